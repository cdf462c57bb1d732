//! Ask command handler.
//!
//! Answers a single message the way the chat assistant would.

use clap::Args;
use faqdesk_core::{config::AppConfig, AppError, AppResult};
use faqdesk_knowledge::respond;
use std::path::PathBuf;

use super::{load_base, print_json};

/// Ask the assistant a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The message to answer
    pub message: Option<String>,

    /// Read the message from a file
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");

        let message = self.get_message()?;
        if message.trim().is_empty() {
            return Err(AppError::Other("Message is empty".to_string()));
        }

        let base = load_base(config)?;
        let reply = respond(&message, &base);

        if self.json {
            print_json(&serde_json::json!({
                "message": message,
                "reply": reply,
            }))
        } else {
            println!("{}", reply);
            Ok(())
        }
    }

    fn get_message(&self) -> AppResult<String> {
        if let Some(ref message) = self.message {
            return Ok(message.clone());
        }

        match self.file {
            Some(ref path) => Ok(std::fs::read_to_string(path)?),
            None => Err(AppError::Config("No message provided".to_string())),
        }
    }
}
