/// Who wrote a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuthor {
    Visitor,
    Guide,
}

#[derive(Debug, Clone)]
pub struct ChatLine {
    pub author: ChatAuthor,
    pub content: String,
    pub timestamp: i64,
}

impl ChatLine {
    pub fn now(author: ChatAuthor, content: impl Into<String>) -> Self {
        Self {
            author,
            content: content.into(),
            timestamp: chrono::Local::now().timestamp(),
        }
    }
}

/// State for the simulated helpline chat widget.
///
/// Replies are canned and delivered after a fixed tick delay to pace the
/// conversation. Rapid sends queue multiple pending replies; they drain
/// in due-tick order with no cancellation or reordering guarantees.
pub struct ChatState {
    pub messages: Vec<ChatLine>,
    pub input: String,
    pub pending_replies: Vec<(String, u64)>,
    pub scroll_offset: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatLine::now(
                ChatAuthor::Guide,
                "Hello! I'm the Harborlight guide. Ask me about donating, \
                 volunteering, or any of our programs.",
            )],
            input: String::new(),
            pending_replies: Vec::new(),
            scroll_offset: 0,
        }
    }
}

impl ChatState {
    pub fn push_visitor(&mut self, content: impl Into<String>) {
        self.messages.push(ChatLine::now(ChatAuthor::Visitor, content));
        self.scroll_offset = 0;
    }

    pub fn queue_reply(&mut self, reply: String, due_tick: u64) {
        self.pending_replies.push((reply, due_tick));
    }

    /// Deliver every queued reply whose deadline has passed.
    pub fn drain_due(&mut self, tick_count: u64) {
        let mut due: Vec<String> = Vec::new();
        self.pending_replies.retain(|(reply, due_tick)| {
            if *due_tick <= tick_count {
                due.push(reply.clone());
                false
            } else {
                true
            }
        });
        for reply in due {
            self.messages.push(ChatLine::now(ChatAuthor::Guide, reply));
            self.scroll_offset = 0;
        }
    }

    pub fn is_guide_typing(&self) -> bool {
        !self.pending_replies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_deliver_when_due_and_not_before() {
        let mut chat = ChatState::default();
        let baseline = chat.messages.len();
        chat.queue_reply("first".to_string(), 10);
        chat.queue_reply("second".to_string(), 20);

        chat.drain_due(9);
        assert_eq!(chat.messages.len(), baseline);
        assert!(chat.is_guide_typing());

        chat.drain_due(10);
        assert_eq!(chat.messages.len(), baseline + 1);
        assert_eq!(chat.messages.last().unwrap().content, "first");

        chat.drain_due(25);
        assert_eq!(chat.messages.len(), baseline + 2);
        assert!(!chat.is_guide_typing());
    }

    #[test]
    fn overlapping_replies_drain_together_in_queue_order() {
        let mut chat = ChatState::default();
        let baseline = chat.messages.len();
        chat.queue_reply("a".to_string(), 5);
        chat.queue_reply("b".to_string(), 5);
        chat.drain_due(5);
        let tail: Vec<&str> = chat.messages[baseline..]
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(tail, vec!["a", "b"]);
    }
}
