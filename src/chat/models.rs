use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One user message and the reply it received. Never updated once
/// stored, only removed in bulk when a user clears their history.
#[derive(Clone, Debug, PartialEq)]
pub struct Exchange {
    pub id: String,
    pub user_id: String,
    pub user_message: String,
    pub bot_reply: String,
    pub timestamp: DateTime<Utc>,
}

/// A single chat bubble as rendered by a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMessage {
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
    pub id: String,
}

impl DisplayMessage {
    pub fn new(text: &str, is_user: bool, timestamp: DateTime<Utc>, id: &str) -> Self {
        Self {
            text: text.to_string(),
            is_user,
            timestamp,
            id: id.to_string(),
        }
    }
}

/// Expand an exchange into the user's message followed by the bot's
/// reply. The reply is stamped one second after the user message so
/// that sorting by timestamp never puts it first.
pub fn format_exchange(exchange: &Exchange) -> [DisplayMessage; 2] {
    [
        DisplayMessage::new(
            &exchange.user_message,
            true,
            exchange.timestamp,
            &format!("{}_user", exchange.id),
        ),
        DisplayMessage::new(
            &exchange.bot_reply,
            false,
            exchange.timestamp + Duration::seconds(1),
            &format!("{}_bot", exchange.id),
        ),
    ]
}

/// Flatten an ordered list of exchanges into display messages,
/// preserving order.
pub fn format_history(history: &[Exchange]) -> Vec<DisplayMessage> {
    history.iter().flat_map(format_exchange).collect()
}
