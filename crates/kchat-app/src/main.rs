mod cli;
mod config;

use std::path::Path;
use std::sync::Arc;

use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

use kchat_common::{Role, SessionEvent};
use kchat_core::{ChatSession, SubmitOutcome, WebhookClient, WebhookConfig};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config (before logging init; loader logs are dropped)
    let config = match args.config.as_deref() {
        Some(path) => config::load_from_path(Path::new(path)),
        None => config::load_default(),
    }
    .unwrap_or_else(|e| {
        eprintln!("config load failed, using defaults: {e}");
        config::AppConfig::default()
    });

    // Initialize logging: CLI flag wins over the config file
    let directive = args.log_level.as_deref().unwrap_or(&config.logging.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "kchat=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("kchat v{} starting", env!("CARGO_PKG_VERSION"));

    // Webhook URL resolution: CLI flag > environment > config file
    let webhook = match args.webhook_url {
        Some(url) => WebhookConfig::new(url),
        None => WebhookConfig::from_env()
            .unwrap_or_else(|_| WebhookConfig::new(config.webhook.url.clone())),
    };
    if webhook.url.trim().is_empty() {
        tracing::error!(
            "no webhook url configured; pass --webhook-url, set KCHAT_WEBHOOK_URL, \
             or set webhook.url in the config file"
        );
        std::process::exit(1);
    }
    tracing::info!(url = %webhook.url, "using webhook endpoint");

    let transport = WebhookClient::new(webhook);
    let session = Arc::new(ChatSession::new());
    tracing::info!(session = %session.id(), "session ready");

    // Printer task: renders transcript changes and the thinking
    // indicator. It only reads events; it never mutates the session.
    let mut events = session.subscribe();
    let printer = tokio::spawn(async move {
        use tokio::sync::broadcast::error::RecvError;
        loop {
            match events.recv().await {
                Ok(SessionEvent::MessageAppended(msg)) => match msg.role {
                    Role::User => println!("You: {}", msg.content),
                    Role::Assistant => println!("Assistant: {}", msg.content),
                },
                Ok(SessionEvent::PendingChanged(true)) => println!("Thinking..."),
                Ok(SessionEvent::PendingChanged(false)) => {}
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    });

    println!("Ask questions about your knowledge base (quit to exit).");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("stdin error: {e}");
                break;
            }
        };
        if line.trim().eq_ignore_ascii_case("quit") || line.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        session.set_draft(line.as_str()).await;
        match session.submit(&transport, &line).await {
            SubmitOutcome::Completed | SubmitOutcome::EmptyInput => {}
            SubmitOutcome::Busy => tracing::warn!("a turn is already in flight"),
        }
    }

    printer.abort();
    tracing::info!("shutdown complete");
}
