use async_trait::async_trait;

use crate::clients::gemini::{self, CoachError};

#[async_trait]
pub trait CoachClient: Send + Sync {
    async fn reply(&self, user_text: &str) -> Result<String, CoachError>;
}

// Holds the credential loaded once at startup; never re-read per call.
pub struct GeminiCoach {
    api_key: String,
}

impl GeminiCoach {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl CoachClient for GeminiCoach {
    async fn reply(&self, user_text: &str) -> Result<String, CoachError> {
        gemini::generate_reply(user_text, &self.api_key).await
    }
}
