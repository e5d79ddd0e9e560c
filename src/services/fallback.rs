use std::path::Path;

use rand::seq::SliceRandom;

use super::resolver::handle_chat_request;

/// Used when no canned replies are configured.
pub const DEFAULT_REPLY: &str =
    "I'm here to help with your skin concerns. Could you tell me a bit more?";

const CANNED_REPLIES: &[&str] = &[
    "Thanks for sharing! Keeping your skin hydrated and using a gentle cleanser is a great place to start.",
    "That sounds uncomfortable. If it persists for more than a couple of weeks, consider booking a dermatologist.",
    "Sunscreen every day, even when it's cloudy, is one of the best things you can do for your skin.",
    "Could you describe how long you've noticed this and whether anything makes it better or worse?",
    "Try to avoid picking or scratching the area, and patch test any new product before using it fully.",
    "A consistent routine matters more than any single product. Morning and night, keep it simple.",
    "If you can, upload a clear, well-lit photo of the affected area so I can take a closer look.",
];

/// Where a chat reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Custom,
    Fallback,
}

impl ReplySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplySource::Custom => "custom",
            ReplySource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FallbackReplies {
    replies: Vec<String>,
}

impl Default for FallbackReplies {
    fn default() -> Self {
        Self::new(CANNED_REPLIES.iter().map(|r| r.to_string()))
    }
}

impl FallbackReplies {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let replies = replies
            .into_iter()
            .map(Into::into)
            .filter(|r: &String| !r.trim().is_empty())
            .collect();
        Self { replies }
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    pub fn contains(&self, reply: &str) -> bool {
        self.replies.iter().any(|r| r == reply)
    }

    /// Pick a canned reply uniformly at random.
    pub fn pick(&self) -> &str {
        self.replies
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(DEFAULT_REPLY)
    }
}

/// Ask the resolver first and fall back to a canned reply when it defers.
pub fn resolve_reply(
    message: &str,
    image_path: Option<&Path>,
    fallback: &FallbackReplies,
) -> (String, ReplySource) {
    match handle_chat_request(message, image_path) {
        Some(reply) => (reply, ReplySource::Custom),
        None => (fallback.pick().to_string(), ReplySource::Fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_entries_are_dropped() {
        let replies = FallbackReplies::new(["one", "  ", "", "two"]);
        assert_eq!(replies.len(), 2);
        assert!(replies.contains("one"));
        assert!(replies.contains("two"));
    }

    #[test]
    fn empty_list_uses_default_reply() {
        let replies = FallbackReplies::new(Vec::<String>::new());
        assert!(replies.is_empty());
        assert_eq!(replies.pick(), DEFAULT_REPLY);
    }

    #[test]
    fn pick_stays_within_list() {
        let replies = FallbackReplies::default();
        for _ in 0..50 {
            assert!(replies.contains(replies.pick()));
        }
    }

    #[test]
    fn single_entry_is_always_picked() {
        let replies = FallbackReplies::new(["only"]);
        assert_eq!(replies.pick(), "only");
    }
}
