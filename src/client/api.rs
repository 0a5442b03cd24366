use anyhow::{Error, Result};
use serde_json::json;

use crate::api::public::chat::{ChatRequest, ChatResponse, ClearHistoryResponse, DisplayMessage};

/// HTTP client for the three conversation endpoints
#[derive(Clone, Debug)]
pub struct ChatClient {
    base_url: String,
    http: reqwest::Client,
}

impl ChatClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn send(&self, message: &str, user_id: &str) -> Result<ChatResponse, Error> {
        let payload = ChatRequest {
            message: message.to_string(),
            user_id: user_id.to_string(),
        };
        let resp = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp)
    }

    pub async fn history(&self, user_id: &str) -> Result<Vec<DisplayMessage>, Error> {
        let resp = self
            .http
            .get(format!("{}/api/chat/history", self.base_url))
            .query(&[("userId", user_id)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp)
    }

    pub async fn clear(&self, user_id: &str) -> Result<ClearHistoryResponse, Error> {
        let resp = self
            .http
            .delete(format!("{}/api/chat/history", self.base_url))
            .json(&json!({ "userId": user_id }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp)
    }
}
