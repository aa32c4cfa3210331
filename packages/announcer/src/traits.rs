// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "announce a place") lives in functions that use them.
//
// Naming convention: Base* for trait names (e.g., BaseForumPoster)

use anyhow::{Context, Result};
use async_trait::async_trait;

use whop::{CreateForumPostInput, WhopClient};

use crate::webhook::WebhookNotifier;

/// A forum post ready for submission, with its routing context.
#[derive(Debug, Clone)]
pub struct ForumPostRequest {
    pub experience_id: String,
    pub user_id: String,
    pub company_id: String,
    pub title: String,
    pub content: String,
    pub notify_all_members: bool,
}

// =============================================================================
// Forum Poster Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseForumPoster: Send + Sync {
    /// Submit a forum post, returning the created post id.
    async fn submit_post(&self, request: &ForumPostRequest) -> Result<String>;
}

#[async_trait]
impl BaseForumPoster for WhopClient {
    async fn submit_post(&self, request: &ForumPostRequest) -> Result<String> {
        let input = CreateForumPostInput {
            forum_experience_id: request.experience_id.clone(),
            title: request.title.clone(),
            content: request.content.clone(),
            notify_all_members: request.notify_all_members,
        };

        let post = self
            .clone()
            .with_user(request.user_id.as_str())
            .with_company(request.company_id.as_str())
            .create_forum_post(&input)
            .await
            .context("Failed to create forum post")?;

        Ok(post.id)
    }
}

// =============================================================================
// Fallback Notifier Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseFallbackNotifier: Send + Sync {
    /// Deliver a plain-text notification. One attempt, no retries.
    async fn notify(&self, content: &str) -> Result<()>;
}

#[async_trait]
impl BaseFallbackNotifier for WebhookNotifier {
    async fn notify(&self, content: &str) -> Result<()> {
        self.send(content).await
    }
}
