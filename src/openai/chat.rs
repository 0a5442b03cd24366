use anyhow::{Error, Result, bail};

use crate::openai::{Message, Role, completion};

/// Send a single user message to the completion provider and return
/// the text of the first choice. No prior conversation is included
/// in the request.
pub async fn reply(
    message: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
    max_tokens: u32,
) -> Result<String, Error> {
    let messages = vec![Message::new(Role::User, message)];
    let resp = completion(&messages, api_hostname, api_key, model, max_tokens).await?;

    match resp["choices"][0]["message"]["content"].as_str() {
        Some(content) if !content.is_empty() => Ok(content.to_string()),
        Some(_) => bail!("Received an empty reply. Resp:\n\n {}", resp),
        None => bail!("No message received. Resp:\n\n {}", resp),
    }
}
