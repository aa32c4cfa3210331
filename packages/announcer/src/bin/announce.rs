//! Post a single place announcement from the command line.
//!
//! Exits zero even when the announcement was not posted: announcing is
//! best-effort by contract.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use announcer::{AnnouncementOutcome, Config, Place, PlaceAnnouncer};

#[derive(Parser)]
#[command(name = "announce")]
#[command(about = "Post a new-place announcement to the community forum")]
struct Cli {
    /// Place identifier
    #[arg(long)]
    id: String,

    /// Display name of the place
    #[arg(long)]
    name: String,

    /// Street address, when known
    #[arg(long)]
    address: Option<String>,

    /// Longer description shown in the post body
    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    lat: f64,

    #[arg(long)]
    lon: f64,

    /// Category label, e.g. "Coffee Shop"
    #[arg(long)]
    category: Option<String>,

    /// Ensure a forum with this name exists on the experience before posting
    #[arg(long)]
    forum_name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,announcer=debug,whop=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;

    let place = Place {
        id: cli.id,
        name: cli.name,
        address: cli.address,
        description: cli.description,
        latitude: cli.lat,
        longitude: cli.lon,
        category: cli.category,
    };

    // Resolve the target forum up front when asked to; otherwise post
    // straight to the configured forum experience.
    let experience_id = match cli.forum_name {
        Some(forum_name) => {
            let client = whop::WhopClient::new(config.whop_api_key.clone())
                .with_user(config.whop_agent_user_id.as_str())
                .with_company(config.whop_company_id.as_str());
            let forum = client
                .find_or_create_forum(&config.forum_experience_id, &forum_name)
                .await
                .context("Failed to resolve forum")?;
            tracing::info!("Posting to forum {}", forum.id);
            forum.id
        }
        None => config.forum_experience_id.clone(),
    };

    let announcer = PlaceAnnouncer::from_config(&config);
    let outcome = announcer
        .announce_new_place(
            &place,
            &experience_id,
            &config.whop_agent_user_id,
            &config.whop_company_id,
        )
        .await;

    match outcome {
        AnnouncementOutcome::Posted { post_id } => {
            tracing::info!("Announcement posted: {}", post_id);
        }
        AnnouncementOutcome::FallbackDelivered => {
            tracing::warn!("Forum post failed, fallback notification delivered");
        }
        AnnouncementOutcome::NotPosted => {
            tracing::warn!("Announcement not posted");
        }
    }

    Ok(())
}
