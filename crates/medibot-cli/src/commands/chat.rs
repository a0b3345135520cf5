//! Chat command - converse with the medical assistant.

use std::io::{self, BufRead, Read, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use medibot_assist::{user_message, ChatAssistant, MemoryStore, Namespace};
use medibot_gateway::Client;

use crate::output;

/// Arguments for the chat command.
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Message to send (if not provided, reads from stdin)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Interactive chat mode
    #[arg(short, long)]
    pub interactive: bool,
}

/// Chat reply for JSON output.
#[derive(Debug, Serialize)]
struct ChatOutput {
    text: String,
    sources: Vec<medibot_core::SourceLink>,
}

/// Execute the chat command.
pub async fn execute(args: ChatArgs, client: Client, json: bool) -> Result<()> {
    let store = Namespace::new(Arc::new(MemoryStore::new()), "cli");
    let assistant = ChatAssistant::new(client, store);

    if args.interactive {
        run_interactive(&assistant, json).await
    } else {
        let message = match args.message {
            Some(message) => message,
            None => read_stdin()?,
        };
        send_one(&assistant, &message, json).await
    }
}

async fn send_one(assistant: &ChatAssistant, message: &str, json: bool) -> Result<()> {
    match assistant.send(message).await {
        Ok(reply) => {
            if json {
                output::json(&ChatOutput {
                    text: reply.text,
                    sources: reply.sources,
                })?;
            } else {
                println!("{}", reply.text);
                output::sources(&reply.sources);
            }
            Ok(())
        }
        Err(err) => Err(anyhow::anyhow!(user_message(&err))),
    }
}

async fn run_interactive(assistant: &ChatAssistant, json: bool) -> Result<()> {
    output::info("Interactive chat. Type 'exit' or press Ctrl-D to quit.");

    let stdin = io::stdin();
    loop {
        print!("{} ", "you>".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        // Keep the session alive on errors; one failed turn is not fatal.
        match assistant.send(line).await {
            Ok(reply) => {
                if json {
                    output::json(&ChatOutput {
                        text: reply.text,
                        sources: reply.sources,
                    })?;
                } else {
                    println!("{} {}", "bot>".green().bold(), reply.text);
                    output::sources(&reply.sources);
                }
            }
            Err(err) => output::error(&user_message(&err)),
        }
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().lock().read_to_string(&mut buffer)?;
    let message = buffer.trim().to_string();
    if message.is_empty() {
        anyhow::bail!("no message provided (use --message or pipe text on stdin)");
    }
    Ok(message)
}
