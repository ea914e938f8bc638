use tutor_core::model::{ChatLog, ChatRole, ChatTurn};

use crate::vm::markdown_vm::{looks_like_markdown, markdown_to_html, normalize_markdown};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BubbleBody {
    Text(String),
    /// Sanitized HTML rendered from an assistant markdown reply.
    Html(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatBubbleVm {
    pub key: usize,
    pub class: &'static str,
    pub body: BubbleBody,
}

#[must_use]
pub fn map_chat_bubble(key: usize, turn: &ChatTurn) -> ChatBubbleVm {
    let (class, body) = match turn.role() {
        ChatRole::User => ("bubble bubble--user", BubbleBody::Text(turn.text().to_string())),
        ChatRole::Assistant if turn.failed() => (
            "bubble bubble--assistant bubble--error",
            BubbleBody::Text(turn.text().to_string()),
        ),
        ChatRole::Assistant if looks_like_markdown(turn.text()) => (
            "bubble bubble--assistant",
            BubbleBody::Html(markdown_to_html(&normalize_markdown(turn.text()))),
        ),
        ChatRole::Assistant => (
            "bubble bubble--assistant",
            BubbleBody::Text(turn.text().to_string()),
        ),
    };
    ChatBubbleVm { key, class, body }
}

#[must_use]
pub fn map_chat_bubbles(log: &ChatLog) -> Vec<ChatBubbleVm> {
    log.turns()
        .iter()
        .enumerate()
        .map(|(key, turn)| map_chat_bubble(key, turn))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_text_is_never_interpreted_as_markdown() {
        let bubble = map_chat_bubble(0, &ChatTurn::user("**why** <b>?</b>"));
        assert_eq!(bubble.class, "bubble bubble--user");
        assert_eq!(bubble.body, BubbleBody::Text("**why** <b>?</b>".into()));
    }

    #[test]
    fn markdown_reply_becomes_sanitized_html() {
        let bubble = map_chat_bubble(1, &ChatTurn::assistant("Use a **stack**.\n\n<script>x</script>"));
        let BubbleBody::Html(html) = bubble.body else {
            panic!("expected html body");
        };
        assert!(html.contains("<strong>stack</strong>"), "{html}");
        assert!(!html.contains("<script>"), "{html}");
    }

    #[test]
    fn plain_reply_and_error_note_stay_text() {
        let plain = map_chat_bubble(0, &ChatTurn::assistant("A queue is FIFO."));
        assert_eq!(plain.body, BubbleBody::Text("A queue is FIFO.".into()));

        let failed = map_chat_bubble(1, &ChatTurn::assistant_error("Chat failed"));
        assert_eq!(failed.class, "bubble bubble--assistant bubble--error");
    }

    #[test]
    fn bubbles_keep_log_order() {
        let mut log = ChatLog::new();
        log.push(ChatTurn::user("hi"));
        log.push(ChatTurn::assistant("hello"));
        let bubbles = map_chat_bubbles(&log);
        assert_eq!(bubbles.len(), 2);
        assert_eq!(bubbles[0].key, 0);
        assert_eq!(bubbles[1].class, "bubble bubble--assistant");
    }
}
