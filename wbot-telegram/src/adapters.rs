//! Adapters from Telegram (teloxide) update types to core events.
//!
//! Non-message updates and messages without text produce no event; the
//! dispatch loop never sees them. Command extraction happens here so the
//! router stays free of platform text conventions.

use teloxide::types::{Update, UpdateKind};
use wbot_core::{Chat, Command, InboundEvent, User};

/// Converts one platform update to an [`InboundEvent`]. Returns `None` for
/// non-message updates (edits, callbacks, member changes) and for messages
/// carrying no text.
pub fn event_from_update(update: &Update) -> Option<InboundEvent> {
    match &update.kind {
        UpdateKind::Message(message) => event_from_message(message),
        _ => None,
    }
}

/// Converts one Telegram message to an [`InboundEvent`].
pub fn event_from_message(message: &teloxide::types::Message) -> Option<InboundEvent> {
    let text = message.text()?.to_string();
    let user = message
        .from
        .as_ref()
        .map(|u| User {
            id: u.id.0 as i64,
            username: u.username.clone(),
            first_name: Some(u.first_name.clone()),
            last_name: u.last_name.clone(),
        })
        .unwrap_or(User {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        });
    let command = parse_command(&text);
    Some(InboundEvent {
        chat: Chat {
            id: message.chat.id.0,
        },
        user,
        text,
        command,
    })
}

/// Extracts a bot command from message text: `/name args...`, with an
/// optional `@botname` suffix on the name. Plain text yields `None`.
pub fn parse_command(text: &str) -> Option<Command> {
    let rest = text.strip_prefix('/')?;
    let mut parts = rest.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    if name.is_empty() {
        return None;
    }
    let name = name.split('@').next().unwrap_or(name);
    let args = parts.next().unwrap_or("").trim().to_string();
    Some(Command {
        name: name.to_string(),
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(parse_command("Paris"), None);
        assert_eq!(parse_command("weather Paris"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_bare_slash_is_not_a_command() {
        assert_eq!(parse_command("/"), None);
        assert_eq!(parse_command("/ weather"), None);
    }

    #[test]
    fn test_command_without_args() {
        let cmd = parse_command("/start").unwrap();
        assert_eq!(cmd.name, "start");
        assert_eq!(cmd.args, "");
    }

    #[test]
    fn test_command_with_args() {
        let cmd = parse_command("/weather Saint Denis").unwrap();
        assert_eq!(cmd.name, "weather");
        assert_eq!(cmd.args, "Saint Denis");
    }

    #[test]
    fn test_bot_mention_suffix_is_stripped() {
        let cmd = parse_command("/weather@my_weather_bot Paris").unwrap();
        assert_eq!(cmd.name, "weather");
        assert_eq!(cmd.args, "Paris");
    }

    #[test]
    fn test_args_are_trimmed_but_inner_whitespace_kept() {
        let cmd = parse_command("/exchange   USD RUB  ").unwrap();
        assert_eq!(cmd.name, "exchange");
        assert_eq!(cmd.args, "USD RUB");
    }
}
