//! Pure Whop REST API client.
//!
//! A minimal client for the Whop platform API. Supports resolving the forum
//! attached to an experience, creating forum posts, and listing existing
//! posts. Requests can be scoped to an acting user and a company, matching
//! the hosted API's authentication model.
//!
//! # Example
//!
//! ```rust,ignore
//! use whop::{CreateForumPostInput, WhopClient};
//!
//! let client = WhopClient::new("your-api-key".into())
//!     .with_user("user_123")
//!     .with_company("biz_456");
//!
//! let post = client
//!     .create_forum_post(&CreateForumPostInput {
//!         forum_experience_id: "exp_789".into(),
//!         title: "Hello".into(),
//!         content: "First post".into(),
//!         notify_all_members: true,
//!     })
//!     .await?;
//! println!("created {}", post.id);
//! ```

pub mod error;
pub mod types;

pub use error::{Result, WhopError};
pub use types::{CreateForumPostInput, FindOrCreateForumInput, ForumExperience, ForumPost};

use reqwest::Method;
use types::ListResponse;

const BASE_URL: &str = "https://api.whop.com/api/v5/app";

#[derive(Debug, Clone)]
pub struct WhopClient {
    client: reqwest::Client,
    api_key: String,
    on_behalf_of: Option<String>,
    company_id: Option<String>,
}

impl WhopClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            on_behalf_of: None,
            company_id: None,
        }
    }

    /// Scope subsequent requests to the given acting user.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.on_behalf_of = Some(user_id.into());
        self
    }

    /// Scope subsequent requests to the given company.
    pub fn with_company(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url).bearer_auth(&self.api_key);
        if let Some(user_id) = &self.on_behalf_of {
            req = req.header("x-on-behalf-of", user_id);
        }
        if let Some(company_id) = &self.company_id {
            req = req.header("x-company-id", company_id);
        }
        req
    }

    /// Resolve the forum attached to an experience, creating it if missing.
    /// Idempotent on the platform side.
    pub async fn find_or_create_forum(
        &self,
        experience_id: &str,
        name: &str,
    ) -> Result<ForumExperience> {
        let input = FindOrCreateForumInput {
            experience_id: experience_id.to_string(),
            name: name.to_string(),
        };

        let url = format!("{}/forums", BASE_URL);
        let resp = self
            .request(Method::POST, &url)
            .json(&input)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WhopError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let forum: ForumExperience = resp.json().await?;
        Ok(forum)
    }

    /// Create a post in a forum experience. Returns the created post.
    pub async fn create_forum_post(&self, input: &CreateForumPostInput) -> Result<ForumPost> {
        tracing::debug!(
            forum_experience_id = %input.forum_experience_id,
            notify_all_members = input.notify_all_members,
            "Creating forum post"
        );

        let url = format!("{}/forum_posts", BASE_URL);
        let resp = self.request(Method::POST, &url).json(input).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WhopError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let post: ForumPost = resp.json().await?;
        tracing::info!(post_id = %post.id, "Forum post created");
        Ok(post)
    }

    /// Fetch existing posts for a forum experience.
    pub async fn list_forum_posts(&self, forum_experience_id: &str) -> Result<Vec<ForumPost>> {
        let url = format!(
            "{}/forum_posts?forum_experience_id={}",
            BASE_URL, forum_experience_id
        );
        let resp = self.request(Method::GET, &url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WhopError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let list: ListResponse<ForumPost> = resp.json().await?;
        Ok(list.data)
    }
}
