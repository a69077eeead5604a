use serde::{Deserialize, Serialize};
use thiserror::Error;

const GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

// Fixed generation parameters; these are configuration constants, not
// computed values.
const TEMPERATURE: f32 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 1024;

const MAX_ERROR_BODY_CHARS: usize = 300;

const SYSTEM_CONTEXT: &str = "You are an AI productivity coach for HAY's Marketing Director. \
HAY is a neighborhood development company focused on human-centric, community-oriented projects. \
Current projects include:\n\n\
1. August digital campaign (critical deadline Aug 1-2) - comprehensive digital marketing for neighborhood showcase\n\
2. Sales office customer journey (critical, 2 weeks) - design complete customer experience\n\
3. November event planning (important, Oct 15) - community engagement event\n\n\
Context: You understand HAY's \"soft developer\" positioning, focusing on community building \
rather than just construction. Provide strategic, actionable advice for marketing and productivity.";

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("request failed with status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("response carried no candidate text")]
    EmptyReply,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// One coaching turn: the fixed business context and the raw user text
/// travel as a single text part, credential in the key query parameter.
pub async fn generate_reply(user_text: &str, api_key: &str) -> Result<String, CoachError> {
    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: format!("{SYSTEM_CONTEXT}\n\nUser message: {user_text}"),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
    };

    let client = reqwest::Client::new();
    let response = client
        .post(GENERATE_URL)
        .query(&[("key", api_key)])
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .map_err(|e| CoachError::Transport(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| CoachError::Transport(e.to_string()))?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "generate request rejected");
        return Err(CoachError::Status {
            code: status.as_u16(),
            body: error_summary(&text),
        });
    }

    extract_candidate_text(&text)
}

// candidates[0].content.parts[0].text; anything else is an empty reply.
pub fn extract_candidate_text(body: &str) -> Result<String, CoachError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|_| CoachError::EmptyReply)?;
    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
        .ok_or(CoachError::EmptyReply)
}

// Prefers the upstream error.message field; falls back to the raw
// body, truncated so an HTML error page cannot flood the chat.
pub fn error_summary(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(detail) = parsed.error {
            return detail.message;
        }
    }
    let trimmed = body.trim();
    if trimmed.chars().count() > MAX_ERROR_BODY_CHARS {
        let cut: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{cut}...")
    } else {
        trimmed.to_string()
    }
}
