//! Terminal client for the chat API. Mirrors what the web client
//! does: keep a local user id, show the conversation, and make the
//! create/list/clear calls.
mod api;
pub mod identity;
mod session;

pub use api::ChatClient;
pub use session::{ERROR_MESSAGE, GREETING, Session};
