use std::path::PathBuf;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::DisplayMessage;
use crate::client::{ChatClient, Session, identity::default_user_file};

fn print_message(msg: &DisplayMessage) {
    let who = if msg.is_user { "you" } else { "bot" };
    println!("[{}] {}: {}", msg.timestamp.format("%H:%M"), who, msg.text);
}

fn print_conversation(session: &Session) {
    for msg in session.messages() {
        print_message(msg);
    }
}

pub async fn run(api_url: &str, user_file: Option<PathBuf>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let user_file = user_file.unwrap_or_else(default_user_file);
    let mut session = Session::start(ChatClient::new(api_url), &user_file).await?;

    println!(
        "Chatting as {} (/clear to reset, /history to reload, Ctrl-D to quit)",
        session.user_id()
    );
    print_conversation(&session);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => match line.trim() {
                "/clear" => {
                    session.clear().await;
                    print_conversation(&session);
                }
                "/history" => {
                    session.reload().await;
                    print_conversation(&session);
                }
                _ => {
                    let _ = rl.add_history_entry(line.as_str());
                    if let Some(msg) = session.send(&line).await {
                        print_message(msg);
                    }
                }
            },
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
