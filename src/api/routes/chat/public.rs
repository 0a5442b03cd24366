//! Public types for the chat API
use serde::{Deserialize, Serialize};

pub use crate::chat::DisplayMessage;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user_id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub reply: String,
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub user_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClearHistoryRequest {
    pub user_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ClearHistoryResponse {
    pub success: bool,
}
