//! Core types: user, chat, inbound event, outbound reply.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (private or group) identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// A slash command extracted from a message: name without the leading `/`,
/// plus everything after it (untrimmed of inner whitespace).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub args: String,
}

/// One chat message received from the platform. Immutable once produced;
/// consumed exactly once by the router.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    pub chat: Chat,
    pub user: User,
    pub text: String,
    /// Set when the platform marked the message as a command. Command
    /// dispatch takes precedence over free-text handling when present.
    pub command: Option<Command>,
}

impl InboundEvent {
    /// True when the event carries neither a command nor any non-blank text.
    /// Such events are dropped by the dispatch loop without a reply.
    pub fn is_empty(&self) -> bool {
        self.command.is_none() && self.text.trim().is_empty()
    }
}

/// Reply addressed to a chat. Created as an empty shell by the dispatch loop;
/// the router fills in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    pub chat_id: i64,
    pub text: String,
}

impl OutboundReply {
    /// Empty reply shell for the given chat.
    pub fn to_chat(chat_id: i64) -> Self {
        Self {
            chat_id,
            text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(text: &str, command: Option<Command>) -> InboundEvent {
        InboundEvent {
            chat: Chat { id: 1 },
            user: User {
                id: 42,
                username: None,
                first_name: None,
                last_name: None,
            },
            text: text.to_string(),
            command,
        }
    }

    #[test]
    fn test_blank_text_without_command_is_empty() {
        assert!(event("", None).is_empty());
        assert!(event("   \n\t", None).is_empty());
    }

    #[test]
    fn test_command_event_is_never_empty() {
        let cmd = Command {
            name: "start".to_string(),
            args: String::new(),
        };
        assert!(!event("", Some(cmd)).is_empty());
    }

    #[test]
    fn test_text_event_is_not_empty() {
        assert!(!event("Paris", None).is_empty());
    }

    #[test]
    fn test_reply_shell_starts_blank() {
        let reply = OutboundReply::to_chat(7);
        assert_eq!(reply.chat_id, 7);
        assert!(reply.text.is_empty());
    }
}
