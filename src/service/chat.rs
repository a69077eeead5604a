use std::sync::Arc;

use crate::clients::gemini::CoachError;
use crate::models::message::ChatMessage;
use crate::models::task::Task;
use crate::service::coach::CoachClient;

pub const GREETING: &str = "Hello! I'm your AI productivity coach. I understand your role as \
Marketing Director at HAY and your current projects. How can I help you optimize your \
productivity today?";

const NOT_CONFIGURED_REPLY: &str =
    "Please configure your Gemini API key in environment variables.";
const TRANSPORT_REPLY: &str = "I'm having trouble connecting to the AI service. Please check \
your internet connection and try again.";
const EMPTY_REPLY: &str =
    "I'm having trouble generating a response right now. Please try again.";

const CONNECTION_PROBE: &str = "Reply with a single short sentence confirming you can hear me.";

/// Append-only coaching transcript plus the single-in-flight guard.
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    in_flight: bool,
    coach: Option<Arc<dyn CoachClient>>,
}

impl ChatSession {
    pub fn new(coach: Option<Arc<dyn CoachClient>>) -> Self {
        Self {
            transcript: Vec::new(),
            in_flight: false,
            coach,
        }
    }

    // Only reflects whether a credential was present at startup, not
    // whether it works.
    pub fn is_configured(&self) -> bool {
        self.coach.is_some()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// One full chat turn. Returns false without touching the
    /// transcript when the text is blank or a request is in flight.
    pub async fn send(&mut self, text: &str) -> bool {
        let Some(user_text) = self.begin_turn(text) else {
            return false;
        };
        let reply = match &self.coach {
            None => NOT_CONFIGURED_REPLY.to_string(),
            Some(coach) => {
                let outcome = coach.reply(&user_text).await;
                reply_text(outcome)
            }
        };
        self.finish_turn(reply);
        true
    }

    pub fn begin_turn(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.in_flight {
            return None;
        }
        self.transcript.push(ChatMessage::user(trimmed));
        self.in_flight = true;
        Some(trimmed.to_string())
    }

    // Runs on every outcome so the in-flight flag can never stick.
    pub fn finish_turn(&mut self, reply: String) {
        self.transcript.push(ChatMessage::assistant(reply));
        self.in_flight = false;
    }

    // Fixed template, no network call.
    pub fn append_task_note(&mut self, task: &Task) {
        self.transcript.push(ChatMessage::assistant(format!(
            "I've noted \"{}\" as a {} task. Consider blocking focused time for it this week.",
            task.title, task.priority
        )));
    }

    /// Diagnostic round trip. The outcome is appended; the existing
    /// conversation is kept.
    pub async fn test_connection(&mut self) {
        if self.in_flight {
            return;
        }
        let coach = self.coach.clone();
        let note = match coach {
            None => NOT_CONFIGURED_REPLY.to_string(),
            Some(coach) => {
                self.in_flight = true;
                match coach.reply(CONNECTION_PROBE).await {
                    Ok(_) => "Connection test passed. The coaching service is reachable."
                        .to_string(),
                    Err(err) => format!("Connection test failed: {err}"),
                }
            }
        };
        self.transcript.push(ChatMessage::assistant(note));
        self.in_flight = false;
    }
}

// Nothing escapes this boundary as an error; every failure becomes
// assistant-message text.
fn reply_text(outcome: Result<String, CoachError>) -> String {
    match outcome {
        Ok(text) => text,
        Err(CoachError::Status { code, body }) => {
            format!("The coaching service returned an error (status {code}): {body}")
        }
        Err(CoachError::Transport(detail)) => {
            tracing::warn!(%detail, "coach request transport failure");
            TRANSPORT_REPLY.to_string()
        }
        Err(CoachError::EmptyReply) => EMPTY_REPLY.to_string(),
    }
}
