#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Greeting seeded into every fresh transcript.
pub const GREETING: &str = "Hello! I'm monitoring the system logs. How can I help you today?";

/// Canned assistant reply shown when a `/chat` call fails for any reason.
pub const FALLBACK_REPLY: &str = "I'm having trouble retrieving the log analysis right now.";

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// State for the assistant chat widget.
///
/// The transcript lives for the page session: it grows monotonically and is
/// never truncated or persisted. Closing the panel hides it without
/// touching the messages.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Assistant,
                text: GREETING.to_owned(),
            }],
            loading: false,
        }
    }
}

impl ChatState {
    /// Begin sending `input`: append the user message optimistically, raise
    /// the loading flag, and return the text to submit. Blank input and
    /// in-flight sends are inert and return `None`.
    ///
    /// The message is appended verbatim, surrounding whitespace included;
    /// only the emptiness check trims.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if self.loading || input.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            role: Role::User,
            text: input.to_owned(),
        });
        self.loading = true;
        Some(input.to_owned())
    }

    /// Finish a send: append the assistant's reply, or the canned fallback
    /// when the call failed, and clear the loading flag. The optimistic
    /// user message always stands.
    pub fn finish_send(&mut self, reply: Option<String>) {
        let text = reply.unwrap_or_else(|| FALLBACK_REPLY.to_owned());
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            text,
        });
        self.loading = false;
    }
}
