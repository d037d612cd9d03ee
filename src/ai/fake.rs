//! Scripted text generator for tests

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::Notify;

use super::{GenerationError, TextGenerator};

#[derive(Default)]
pub struct FakeGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
    hold: Option<Arc<Notify>>,
}

impl FakeGenerator {
    /// Answer successive calls with `replies`; later calls get `EmptyResponse`
    pub fn replying(replies: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        }
    }

    /// Like [`FakeGenerator::replying`], but each call waits for `release` first
    pub fn held(replies: Vec<Result<String, GenerationError>>, release: Arc<Notify>) -> Self {
        Self {
            hold: Some(release),
            ..Self::replying(replies)
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str, _response_schema: &Value) -> Result<String, GenerationError> {
        self.prompts.lock().push(prompt.to_string());

        if let Some(release) = &self.hold {
            release.notified().await;
        }

        self.replies
            .lock()
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }
}
