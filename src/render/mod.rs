//! Outbound message markup
//!
//! Clients receive each broadcast as an HTML fragment ready to append to
//! the chat page. Templates are compiled in, so rendering cannot fail at
//! runtime and user content is escaped.

use maud::{html, Markup};

use crate::api::websocket::Envelope;

/// Render one envelope as the fragment broadcast to every client
pub fn message_html(envelope: &Envelope) -> Markup {
    html! {
        div.message {
            span.sender { (envelope.sender_label) }
            span.body { (envelope.content) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_html_contains_label_and_content() {
        let envelope = Envelope {
            sender_label: "room-1234".to_string(),
            content: "hello".to_string(),
        };

        let html = message_html(&envelope).into_string();
        assert!(html.contains("room-1234"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_message_html_escapes_content() {
        let envelope = Envelope {
            sender_label: "room-1234".to_string(),
            content: "<script>alert(1)</script>".to_string(),
        };

        let html = message_html(&envelope).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
