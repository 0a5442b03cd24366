//! Persisted message exchanges and their display projection
mod db;
mod models;

pub use db::{delete_exchanges_by_user, find_exchanges_by_user, insert_exchange};
pub use models::{DisplayMessage, Exchange, format_exchange, format_history};
