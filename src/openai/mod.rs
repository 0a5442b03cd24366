mod chat;
mod core;

pub use self::chat::reply;
pub use self::core::{Message, Role, completion};
