use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for creating a forum post.
///
/// Posts are addressed by the forum's experience id. The API carries it
/// under `forumExperienceId`; there is no `forumId` field on this endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CreateForumPostInput {
    #[serde(rename = "forumExperienceId")]
    pub forum_experience_id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "notifyAllMembers")]
    pub notify_all_members: bool,
}

/// Input for resolving the forum attached to an experience.
#[derive(Debug, Clone, Serialize)]
pub struct FindOrCreateForumInput {
    #[serde(rename = "experienceId")]
    pub experience_id: String,
    pub name: String,
}

/// A forum experience on the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct ForumExperience {
    pub id: String,
    pub name: Option<String>,
}

/// A post inside a forum experience.
#[derive(Debug, Clone, Deserialize)]
pub struct ForumPost {
    pub id: String,
    #[serde(rename = "forumExperienceId")]
    pub forum_experience_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Wrapper for Whop list responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forum_post_input_serializes_camel_case() {
        let input = CreateForumPostInput {
            forum_experience_id: "exp_123".to_string(),
            title: "New Place Added: Moon Palace Books".to_string(),
            content: "Address: 3032 Minnehaha Ave".to_string(),
            notify_all_members: true,
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["forumExperienceId"], "exp_123");
        assert_eq!(json["notifyAllMembers"], true);
        // The endpoint rejects forumId; the experience id is the only key.
        assert!(json.get("forumId").is_none());
    }

    #[test]
    fn forum_post_deserializes_partial_response() {
        let post: ForumPost = serde_json::from_str(
            r#"{"id": "post_abc", "title": "Hello"}"#,
        )
        .unwrap();

        assert_eq!(post.id, "post_abc");
        assert_eq!(post.title.as_deref(), Some("Hello"));
        assert!(post.forum_experience_id.is_none());
        assert!(post.created_at.is_none());
    }
}
