//! Frontdesk - client-side chat session for a consumer banking assistant
//!
//! Holds the conversation transcript, forwards user input to the remote
//! assistant backend, and reconciles the idle/pending dispatch state around
//! each exchange. This binary is the thin terminal view; the session logic
//! lives in the library modules.

mod backend;
mod config;
mod session;
mod state_machine;
mod transcript;

use backend::{HttpBackend, LoggingBackend};
use config::ChatConfig;
use session::{ChatSession, SessionNotice};
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transcript::Speaker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ChatConfig::from_env();
    tracing::info!(backend_url = %config.backend_url, "starting chat session");

    let backend = LoggingBackend::new(HttpBackend::new(&config));
    let session = Arc::new(ChatSession::new(backend, &config));
    tracing::info!(session_id = %session.session_id(), "session created");

    // Printer task: renders appended messages and the typing indicator.
    let mut notices = session.subscribe();
    tokio::spawn(async move {
        loop {
            match notices.recv().await {
                Ok(SessionNotice::MessageAppended { message }) => {
                    let who = match message.speaker {
                        Speaker::User => "you",
                        Speaker::Assistant => "assistant",
                    };
                    println!("{who}> {}", message.text);
                }
                Ok(SessionNotice::StateChanged { busy: true }) => {
                    println!("assistant is typing...");
                }
                Ok(_) => {}
                Err(RecvError::Lagged(_)) => {}
                Err(RecvError::Closed) => break,
            }
        }
    });

    // The greeting is seeded before any observer can subscribe.
    println!("assistant> {}", config.greeting);
    println!();
    println!("Quick replies (type the number, or ask anything):");
    for (i, prompt) in config.quick_replies.iter().enumerate() {
        println!("  {}. {prompt}", i + 1);
    }
    println!();

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let text = match input.parse::<usize>() {
            Ok(n) if (1..=config.quick_replies.len()).contains(&n) => {
                config.quick_replies[n - 1].clone()
            }
            _ => input.to_string(),
        };

        session.submit(&text).await;
    }

    Ok(())
}
