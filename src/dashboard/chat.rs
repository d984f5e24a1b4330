//! Chat transcript and reply splitting.

use std::sync::LazyLock;

use jiff::Timestamp;
use regex::Regex;

/// Sent once at startup to prime the conversation
pub const PRIME_MESSAGE: &str = "menu";

/// Bubble shown when a chat exchange fails
pub const CHAT_FALLBACK: &str = "Unable to connect to the SLA backend.";

/// Bubble shown when the startup exchange fails
pub const PRIME_FALLBACK: &str = "Unable to connect to the backend. Please start the backend server.";

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n").expect("line break regex should be valid"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence regex should be valid"));

/// Split a message into bubble lines.
///
/// Explicit line breaks win; otherwise the text is split after `.`, `!` or
/// `?` followed by whitespace. Lines are trimmed and empty ones dropped.
pub fn split_reply(text: &str) -> Vec<String> {
    let pieces: Vec<&str> = if LINE_BREAK.is_match(text) {
        LINE_BREAK.split(text).collect()
    } else {
        let mut pieces = Vec::new();
        let mut start = 0;
        for m in SENTENCE_END.find_iter(text) {
            // Punctuation is one ASCII byte; keep it with the sentence
            pieces.push(&text[start..m.start() + 1]);
            start = m.end();
        }
        pieces.push(&text[start..]);
        pieces
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One chat bubble group
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub lines: Vec<String>,
    pub at: Timestamp,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: &str) -> Self {
        Self {
            sender,
            lines: split_reply(text),
            at: Timestamp::now(),
        }
    }
}

/// Transcript shown in the chat pane
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    primed: bool,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user message. Blank input is ignored and returns `None`.
    pub fn push_user(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(Sender::User, text));
        Some(text.to_string())
    }

    pub fn push_bot(&mut self, text: &str) {
        self.messages.push(ChatMessage::new(Sender::Bot, text));
    }

    /// Claim the one-time priming exchange. Returns false if already claimed.
    pub fn begin_prime(&mut self) -> bool {
        !std::mem::replace(&mut self.primed, true)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_newlines() {
        assert_eq!(split_reply("Line1\nLine2"), vec!["Line1", "Line2"]);
        assert_eq!(split_reply("A\r\n\r\nB\n"), vec!["A", "B"]);
    }

    #[test]
    fn test_split_on_sentences() {
        assert_eq!(split_reply("Hi there. Bye now."), vec!["Hi there.", "Bye now."]);
        assert_eq!(
            split_reply("Really?  Yes! Done"),
            vec!["Really?", "Yes!", "Done"]
        );
    }

    #[test]
    fn test_single_line() {
        assert_eq!(split_reply("NoPunctuationHere"), vec!["NoPunctuationHere"]);
        assert_eq!(split_reply("Rate is 87.5%"), vec!["Rate is 87.5%"]);
        assert!(split_reply("   ").is_empty());
    }

    #[test]
    fn test_newlines_take_precedence_over_sentences() {
        let menu = "Here are the questions. Ask away:\n1. Breached?\n2. At risk?";
        let lines = split_reply(menu);
        insta::assert_snapshot!(lines.join("\n"), @r"
        Here are the questions. Ask away:
        1. Breached?
        2. At risk?
        ");
    }

    #[test]
    fn test_blank_user_message_ignored() {
        let mut log = ChatLog::new();
        assert_eq!(log.push_user("   "), None);
        assert!(log.is_empty());
        assert_eq!(log.push_user(" hi "), Some("hi".to_string()));
        assert_eq!(log.messages()[0].sender, Sender::User);
    }

    #[test]
    fn test_prime_claimed_once() {
        let mut log = ChatLog::new();
        assert!(log.begin_prime());
        assert!(!log.begin_prime());
    }
}
