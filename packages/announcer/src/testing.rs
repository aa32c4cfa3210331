// Mock implementations for testing
//
// Provides mock services that can be injected into PlaceAnnouncer for tests.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use crate::traits::{BaseFallbackNotifier, BaseForumPoster, ForumPostRequest};

// =============================================================================
// Mock Forum Poster
// =============================================================================

pub struct MockForumPoster {
    responses: Arc<Mutex<Vec<Result<String>>>>,
    calls: Arc<Mutex<Vec<ForumPostRequest>>>,
}

impl MockForumPoster {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful submission returning this post id
    pub fn with_post_id(self, post_id: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Ok(post_id.to_string()));
        self
    }

    /// Queue a failed submission
    pub fn with_error(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Err(anyhow::anyhow!(message.to_string())));
        self
    }

    /// Get all submitted requests
    pub fn calls(&self) -> Vec<ForumPostRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockForumPoster {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseForumPoster for MockForumPoster {
    async fn submit_post(&self, request: &ForumPostRequest) -> Result<String> {
        // Record the call
        self.calls.lock().unwrap().push(request.clone());

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            Ok("post_mock".to_string())
        }
    }
}

// =============================================================================
// Mock Fallback Notifier
// =============================================================================

pub struct MockFallbackNotifier {
    fail_with: Arc<Mutex<Option<String>>>,
    notifications: Arc<Mutex<Vec<String>>>,
}

impl MockFallbackNotifier {
    pub fn new() -> Self {
        Self {
            fail_with: Arc::new(Mutex::new(None)),
            notifications: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make every delivery fail with this message
    pub fn with_failure(self, message: &str) -> Self {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Get all delivered notification contents
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }
}

impl Default for MockFallbackNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseFallbackNotifier for MockFallbackNotifier {
    async fn notify(&self, content: &str) -> Result<()> {
        // Record the call, including failed attempts
        self.notifications.lock().unwrap().push(content.to_string());

        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => Err(anyhow::anyhow!(message.clone())),
            None => Ok(()),
        }
    }
}
