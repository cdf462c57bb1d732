//! Chat command handler.
//!
//! Runs an interactive conversation with the FAQ assistant on stdin/stdout.

use clap::Args;
use faqdesk_core::{config::AppConfig, AppResult};
use faqdesk_knowledge::{ChatSession, Message};
use rand::Rng;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{load_base, print_json};

/// Chat with the FAQ assistant
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Minimum typing delay before each reply, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Show replies immediately
    #[arg(long)]
    pub no_delay: bool,

    /// Print the transcript as JSON when the chat ends
    #[arg(long)]
    pub json: bool,
}

/// A line typed at the chat prompt.
#[derive(Debug, PartialEq, Eq)]
enum ChatInput<'a> {
    Quit,
    AskFaq(&'a str),
    Say(&'a str),
    Blank,
}

fn parse_input(line: &str) -> ChatInput<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ChatInput::Blank;
    }
    if trimmed == "/quit" || trimmed == "/exit" {
        return ChatInput::Quit;
    }
    if let Some(id) = trimmed.strip_prefix("/faq ") {
        return ChatInput::AskFaq(id.trim());
    }
    ChatInput::Say(line)
}

impl ChatCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Starting chat session");

        let base = load_base(config)?;
        let mut session = ChatSession::new(&base);
        let delay = self.reply_delay(config);

        if let Some(welcome) = session.messages().first() {
            print_reply(welcome);
        }
        println!("(type /faq <id> to ask a listed question, /quit to leave)");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush().ok();

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let reply = match parse_input(&line) {
                ChatInput::Quit => break,
                ChatInput::Blank => continue,
                ChatInput::AskFaq(id) => match session.ask_record(id) {
                    Some(reply) => reply.clone(),
                    None => {
                        println!("No FAQ with id '{}'", id);
                        continue;
                    }
                },
                ChatInput::Say(text) => match session.send(text) {
                    Some(reply) => reply.clone(),
                    None => continue,
                },
            };

            if let Some(range) = delay {
                let wait = sample_delay(range);
                tracing::trace!("Simulating typing for {}ms", wait);
                tokio::time::sleep(Duration::from_millis(wait)).await;
            }
            print_reply(&reply);
        }

        tracing::info!("Chat ended after {} messages", session.len());

        if self.json {
            print_json(&serde_json::to_value(session.messages())?)?;
        }

        Ok(())
    }

    /// Typing delay range `[min, 2 * min]`, or `None` when disabled.
    ///
    /// The upper bound saturates, so very large delays collapse to `min`.
    fn reply_delay(&self, config: &AppConfig) -> Option<(u64, u64)> {
        if self.no_delay || !config.chat.simulate_typing {
            return None;
        }

        let min = self.delay_ms.unwrap_or(config.chat.reply_delay_ms);
        if min == 0 {
            None
        } else {
            Some((min, min.saturating_mul(2)))
        }
    }
}

/// Pick a delay in milliseconds from the inclusive range `(min, max)`.
fn sample_delay((min, max): (u64, u64)) -> u64 {
    rand::thread_rng().gen_range(min..=max)
}

fn print_reply(message: &Message) {
    println!("assistant: {}", message.content);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(delay_ms: Option<u64>, no_delay: bool) -> ChatCommand {
        ChatCommand {
            delay_ms,
            no_delay,
            json: false,
        }
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("/quit"), ChatInput::Quit);
        assert_eq!(parse_input("  /exit "), ChatInput::Quit);
        assert_eq!(parse_input("/faq 3"), ChatInput::AskFaq("3"));
        assert_eq!(parse_input("   "), ChatInput::Blank);
        assert_eq!(parse_input("how do fees work?"), ChatInput::Say("how do fees work?"));
    }

    #[test]
    fn test_default_delay_range() {
        let config = AppConfig::default();
        assert_eq!(command(None, false).reply_delay(&config), Some((1000, 2000)));
    }

    #[test]
    fn test_delay_flag_overrides_config() {
        let config = AppConfig::default();
        assert_eq!(command(Some(50), false).reply_delay(&config), Some((50, 100)));
        assert_eq!(command(Some(0), false).reply_delay(&config), None);
    }

    #[test]
    fn test_huge_delay_saturates() {
        let config = AppConfig::default();
        let range = command(Some(u64::MAX), false).reply_delay(&config);
        assert_eq!(range, Some((u64::MAX, u64::MAX)));
        assert_eq!(sample_delay((u64::MAX, u64::MAX)), u64::MAX);
    }

    #[test]
    fn test_sampled_delay_stays_in_range() {
        for _ in 0..100 {
            let wait = sample_delay((50, 100));
            assert!((50..=100).contains(&wait));
        }
        assert_eq!(sample_delay((7, 7)), 7);
    }

    #[test]
    fn test_delay_disabled() {
        let mut config = AppConfig::default();
        assert_eq!(command(None, true).reply_delay(&config), None);

        config.chat.simulate_typing = false;
        assert_eq!(command(Some(50), false).reply_delay(&config), None);
    }
}
