//! Fire-and-forget forum announcements for newly created places.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::message::{announcement_body, announcement_title};
use crate::place::Place;
use crate::traits::{BaseFallbackNotifier, BaseForumPoster, ForumPostRequest};
use crate::webhook::WebhookNotifier;

/// How an announcement attempt ended.
///
/// Callers can observe which path was taken without the enclosing workflow
/// failing: `post_id()` is `Some` only when the forum post was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnouncementOutcome {
    /// The forum post was created.
    Posted { post_id: String },
    /// The forum call failed but the simplified webhook message went out.
    FallbackDelivered,
    /// Neither the forum post nor the fallback went through.
    NotPosted,
}

impl AnnouncementOutcome {
    /// Id of the created forum post, when one exists.
    pub fn post_id(&self) -> Option<&str> {
        match self {
            AnnouncementOutcome::Posted { post_id } => Some(post_id),
            _ => None,
        }
    }
}

/// Posts new-place announcements into the community forum.
///
/// Cheap to share across concurrent place creations; invocations are
/// independent and hold no shared mutable state.
pub struct PlaceAnnouncer {
    forum: Arc<dyn BaseForumPoster>,
    fallback: Option<Arc<dyn BaseFallbackNotifier>>,
    app_base_url: String,
}

impl PlaceAnnouncer {
    pub fn new(forum: Arc<dyn BaseForumPoster>, app_base_url: impl Into<String>) -> Self {
        Self {
            forum,
            fallback: None,
            app_base_url: app_base_url.into(),
        }
    }

    /// Add a best-effort fallback used when the forum call fails.
    pub fn with_fallback(mut self, fallback: Arc<dyn BaseFallbackNotifier>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Build an announcer from environment configuration.
    pub fn from_config(config: &Config) -> Self {
        let client = whop::WhopClient::new(config.whop_api_key.clone());
        let mut announcer = Self::new(Arc::new(client), config.app_base_url.clone());

        if let Some(url) = &config.fallback_webhook_url {
            announcer = announcer.with_fallback(Arc::new(WebhookNotifier::new(url.clone())));
        }

        announcer
    }

    /// Announce a newly created place in the forum, notifying all members.
    ///
    /// Never returns an error: place creation must not be interrupted by a
    /// failed announcement. A forum failure is recorded and, when a fallback
    /// is configured, followed by a single simplified webhook delivery.
    /// No retries, no backoff; at most two network calls per invocation.
    pub async fn announce_new_place(
        &self,
        place: &Place,
        experience_id: &str,
        user_id: &str,
        company_id: &str,
    ) -> AnnouncementOutcome {
        let title = announcement_title(place);
        let content = announcement_body(place, experience_id, &self.app_base_url);

        let request = ForumPostRequest {
            experience_id: experience_id.to_string(),
            user_id: user_id.to_string(),
            company_id: company_id.to_string(),
            title: title.clone(),
            content,
            notify_all_members: true,
        };

        match self.forum.submit_post(&request).await {
            Ok(post_id) => {
                info!(post_id = %post_id, place_id = %place.id, "Forum announcement posted");
                AnnouncementOutcome::Posted { post_id }
            }
            Err(e) => {
                warn!(
                    title = %title,
                    error = %e,
                    "Forum announcement failed, place content not delivered"
                );
                self.deliver_fallback(place).await
            }
        }
    }

    async fn deliver_fallback(&self, place: &Place) -> AnnouncementOutcome {
        let fallback = match &self.fallback {
            Some(fallback) => fallback,
            None => return AnnouncementOutcome::NotPosted,
        };

        let message = format!("New place added: {}. Open the app for details.", place.name);

        match fallback.notify(&message).await {
            Ok(()) => {
                info!(place_id = %place.id, "Fallback notification delivered");
                AnnouncementOutcome::FallbackDelivered
            }
            Err(e) => {
                error!(place_id = %place.id, error = %e, "Fallback notification failed");
                AnnouncementOutcome::NotPosted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockFallbackNotifier, MockForumPoster};

    fn sample_place() -> Place {
        Place {
            id: "plc_1".to_string(),
            name: "Moon Palace Books".to_string(),
            address: Some("3032 Minnehaha Ave, Minneapolis, MN".to_string()),
            description: None,
            latitude: 44.9489,
            longitude: -93.2323,
            category: Some("Bookstore".to_string()),
        }
    }

    fn announce_args() -> (&'static str, &'static str, &'static str) {
        ("exp_123", "user_1", "biz_1")
    }

    #[tokio::test]
    async fn returns_post_id_on_success() {
        let forum = Arc::new(MockForumPoster::new().with_post_id("post_123"));
        let announcer = PlaceAnnouncer::new(forum.clone(), "https://whop.com");

        let (experience_id, user_id, company_id) = announce_args();
        let outcome = announcer
            .announce_new_place(&sample_place(), experience_id, user_id, company_id)
            .await;

        assert_eq!(
            outcome,
            AnnouncementOutcome::Posted {
                post_id: "post_123".to_string()
            }
        );
        assert_eq!(outcome.post_id(), Some("post_123"));

        let calls = forum.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].title, "New Place Added: Moon Palace Books");
        assert_eq!(calls[0].experience_id, "exp_123");
        assert_eq!(calls[0].user_id, "user_1");
        assert_eq!(calls[0].company_id, "biz_1");
        assert!(calls[0].notify_all_members);
    }

    #[tokio::test]
    async fn delivers_one_fallback_when_forum_fails() {
        let forum = Arc::new(MockForumPoster::new().with_error("HTTP 403"));
        let fallback = Arc::new(MockFallbackNotifier::new());
        let announcer = PlaceAnnouncer::new(forum, "https://whop.com")
            .with_fallback(fallback.clone());

        let (experience_id, user_id, company_id) = announce_args();
        let outcome = announcer
            .announce_new_place(&sample_place(), experience_id, user_id, company_id)
            .await;

        assert_eq!(outcome, AnnouncementOutcome::FallbackDelivered);
        assert_eq!(outcome.post_id(), None);

        let notifications = fallback.notifications();
        assert_eq!(notifications.len(), 1);
        assert!(notifications[0].contains("Moon Palace Books"));
    }

    #[tokio::test]
    async fn stops_after_forum_failure_without_fallback() {
        let forum = Arc::new(MockForumPoster::new().with_error("connection refused"));
        let announcer = PlaceAnnouncer::new(forum.clone(), "https://whop.com");

        let (experience_id, user_id, company_id) = announce_args();
        let outcome = announcer
            .announce_new_place(&sample_place(), experience_id, user_id, company_id)
            .await;

        assert_eq!(outcome, AnnouncementOutcome::NotPosted);
        assert_eq!(forum.call_count(), 1);
    }

    #[tokio::test]
    async fn swallows_fallback_failure() {
        let forum = Arc::new(MockForumPoster::new().with_error("HTTP 500"));
        let fallback = Arc::new(MockFallbackNotifier::new().with_failure("HTTP 404"));
        let announcer = PlaceAnnouncer::new(forum, "https://whop.com")
            .with_fallback(fallback.clone());

        let (experience_id, user_id, company_id) = announce_args();
        let outcome = announcer
            .announce_new_place(&sample_place(), experience_id, user_id, company_id)
            .await;

        assert_eq!(outcome, AnnouncementOutcome::NotPosted);
        assert_eq!(fallback.call_count(), 1);
    }
}
