use std::path::Path;

use anyhow::Result;
use chrono::Utc;

use super::api::ChatClient;
use super::identity::load_or_create_user_id;
use crate::chat::DisplayMessage;

pub const GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";
pub const ERROR_MESSAGE: &str = "Sorry, I couldn't process your request. Please try again later.";

fn local_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

fn greeting() -> DisplayMessage {
    DisplayMessage::new(GREETING, false, Utc::now(), &local_id())
}

// Holds the loading flag for the duration of a send. Dropping it
// clears the flag, so a send that is cancelled mid-request doesn't
// block every later one.
struct Loading<'a>(&'a mut bool);

impl<'a> Loading<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// The conversation as seen by one client.
///
/// `send` takes `&mut self` so a session never has two sends in
/// flight. Clearing or reloading from another session with the same
/// user id is not coordinated with a pending send: whichever request
/// the server handles last wins.
pub struct Session {
    client: ChatClient,
    user_id: String,
    messages: Vec<DisplayMessage>,
    is_loading: bool,
}

impl Session {
    /// Start a session for the identifier stored at `user_file`. A
    /// new identifier starts with the greeting, a known one loads its
    /// history and falls back to the greeting when there is nothing
    /// to show.
    pub async fn start(client: ChatClient, user_file: &Path) -> Result<Self> {
        let (user_id, created) = load_or_create_user_id(user_file)?;
        let mut session = Self::new(client, &user_id);
        if !created {
            session.reload().await;
        }
        Ok(session)
    }

    /// A session for `user_id` showing only the greeting
    pub fn new(client: ChatClient, user_id: &str) -> Self {
        Self {
            client,
            user_id: user_id.to_string(),
            messages: vec![greeting()],
            is_loading: false,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn messages(&self) -> &[DisplayMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Replace the visible conversation with the stored history
    pub async fn reload(&mut self) {
        self.messages = match self.client.history(&self.user_id).await {
            Ok(history) if !history.is_empty() => history,
            Ok(_) => vec![greeting()],
            Err(err) => {
                tracing::error!("Error fetching history: {:#}", err);
                vec![greeting()]
            }
        };
    }

    /// Send a message and append the reply, or an error message if
    /// the request fails. Blank input is ignored. Returns the message
    /// that was appended in response, if any.
    pub async fn send(&mut self, input: &str) -> Option<&DisplayMessage> {
        if input.trim().is_empty() || self.is_loading {
            return None;
        }

        self.messages
            .push(DisplayMessage::new(input, true, Utc::now(), &local_id()));
        let loading = Loading::start(&mut self.is_loading);

        let response = match self.client.send(input, &self.user_id).await {
            Ok(resp) => DisplayMessage::new(
                &resp.reply,
                false,
                Utc::now(),
                &format!("{}_bot", resp.id),
            ),
            Err(err) => {
                tracing::error!("Error sending message: {:#}", err);
                DisplayMessage::new(
                    ERROR_MESSAGE,
                    false,
                    Utc::now(),
                    &format!("{}-error", local_id()),
                )
            }
        };
        drop(loading);
        self.messages.push(response);

        self.messages.last()
    }

    /// Clear the stored history and reset to the greeting. The
    /// greeting is shown even if the server could not clear, unlike
    /// the web client which keeps the conversation on screen when the
    /// request fails.
    pub async fn clear(&mut self) {
        if let Err(err) = self.client.clear(&self.user_id).await {
            tracing::error!("Error clearing history: {:#}", err);
        }
        self.messages = vec![greeting()];
    }
}
