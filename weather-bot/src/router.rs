//! Command router: pure dispatch over one event.
//!
//! The only I/O is through the injected [`UpstreamApi`], so the whole command
//! matrix runs against a fake in tests. Command detection takes precedence
//! over free-text interpretation whenever the event carries one; free text is
//! treated as a city name for a weather lookup.

use std::sync::Arc;

use wbot_core::{InboundEvent, OutboundReply, User};
use wbot_upstream::{Topic, UpstreamApi, UserData};

use crate::format::{exchange_reply, weather_reply};

const START_REPLY: &str = "Hi! I'm the weather bot. Use /auth to register.";
const HELP_REPLY: &str = "I show the weather. Use /weather <city>";
const AUTH_REPLY: &str = "Thanks for registering! You can use /weather <city> or /help";
const UNKNOWN_REPLY: &str = "Unknown command";
const NO_CITY_REPLY: &str = "Please specify a city after /weather";
const PROMPT_CITY_REPLY: &str = "Please enter a city";
const EXCHANGE_USAGE_REPLY: &str = "Format: /exchange <base> <target>\nExample: /exchange USD RUB";

/// Routes one inbound event to a handler and fills in the reply text.
pub struct CommandRouter<U: UpstreamApi> {
    upstream: Arc<U>,
}

impl<U: UpstreamApi> CommandRouter<U> {
    pub fn new(upstream: Arc<U>) -> Self {
        Self { upstream }
    }

    /// Fills `reply.text` for the event. Fetch failures have already been
    /// classified upstream; here they only select the reply wording.
    pub async fn route(&self, event: &InboundEvent, reply: &mut OutboundReply) {
        reply.text = match &event.command {
            Some(command) => self.handle_command(&command.name, &command.args, event).await,
            None => self.handle_text(event).await,
        };
    }

    async fn handle_command(&self, name: &str, args: &str, event: &InboundEvent) -> String {
        match name {
            "start" => START_REPLY.to_string(),
            "help" => HELP_REPLY.to_string(),
            "auth" => {
                self.upstream
                    .register_user(&registration_for(&event.user))
                    .await;
                AUTH_REPLY.to_string()
            }
            "weather" => {
                let city = args.trim();
                if city.is_empty() {
                    return NO_CITY_REPLY.to_string();
                }
                self.weather(city, event.user.id).await
            }
            "exchange" => {
                let parts: Vec<&str> = args.split_whitespace().collect();
                let &[base, target] = parts.as_slice() else {
                    return EXCHANGE_USAGE_REPLY.to_string();
                };
                self.exchange(base, target, event.user.id).await
            }
            _ => UNKNOWN_REPLY.to_string(),
        }
    }

    async fn handle_text(&self, event: &InboundEvent) -> String {
        let city = event.text.trim();
        if city.is_empty() {
            return PROMPT_CITY_REPLY.to_string();
        }
        self.weather(city, event.user.id).await
    }

    async fn weather(&self, city: &str, user_id: i64) -> String {
        match self.upstream.weather(city, user_id).await {
            Ok(weather) => weather_reply(&weather),
            Err(e) => e.user_text(Topic::Weather),
        }
    }

    async fn exchange(&self, base: &str, target: &str, user_id: i64) -> String {
        match self.upstream.exchange(base, target, user_id).await {
            Ok(exchange) => exchange_reply(&exchange),
            Err(e) => e.user_text(Topic::Exchange),
        }
    }
}

fn registration_for(user: &User) -> UserData {
    UserData {
        user_id: user.id,
        username: user.username.clone().unwrap_or_default(),
        first_name: user.first_name.clone().unwrap_or_default(),
        last_name: user.last_name.clone().unwrap_or_default(),
    }
}
