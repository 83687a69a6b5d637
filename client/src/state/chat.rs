//! Chat widget model: visibility, draft, and transcript.
//!
//! DESIGN
//! ======
//! The transcript is append-only and starts with a single assistant
//! greeting. An accepted send appends the user message immediately; its
//! canned reply is appended later, when the reply timer fires, to the end of
//! whatever the transcript holds at that moment. Earlier messages are never
//! edited or reordered.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Greeting that opens every transcript.
pub const GREETING: &str = "Hi! I'm your AI learning assistant. How can I help you today?";

/// The assistant's only reply, regardless of what was asked.
pub const CANNED_REPLY: &str = "I understand you're interested in learning. Let me help guide you through your journey!";

/// Delay between a user message and its canned reply.
pub const REPLY_DELAY_MS: u32 = 1000;

/// Who wrote a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Position in the transcript, used as a render key.
    pub seq: u64,
    pub role: ChatRole,
    pub text: String,
}

/// State for the floating assistant widget.
///
/// The transcript is append-only. Replies are appended to whatever the
/// transcript holds when their timer fires; they are never inserted next to
/// the message that triggered them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub open: bool,
    pub draft: String,
    pub messages: Vec<ChatMessage>,
    next_seq: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        let mut state = Self { open: false, draft: String::new(), messages: Vec::new(), next_seq: 0 };
        state.push(ChatRole::Assistant, GREETING.to_owned());
        state
    }
}

impl ChatState {
    /// Flip visibility. The transcript is untouched.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Append a user message with the trimmed `text` and clear the draft.
    ///
    /// Returns `false` without touching anything when `text` is blank. A
    /// `true` return obliges the caller to schedule exactly one reply.
    pub fn send(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.push(ChatRole::User, trimmed.to_owned());
        self.draft.clear();
        true
    }

    /// [`Self::send`] applied to the current draft.
    pub fn submit_draft(&mut self) -> bool {
        let draft = std::mem::take(&mut self.draft);
        let sent = self.send(&draft);
        if !sent {
            self.draft = draft;
        }
        sent
    }

    /// Append the canned assistant reply to the end of the transcript.
    pub fn push_canned_reply(&mut self) {
        self.push(ChatRole::Assistant, CANNED_REPLY.to_owned());
    }

    fn push(&mut self, role: ChatRole, text: String) {
        self.messages.push(ChatMessage { seq: self.next_seq, role, text });
        self.next_seq += 1;
    }
}
