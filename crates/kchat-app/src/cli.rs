use clap::Parser;

/// kchat — terminal chat client for a knowledge-base webhook.
#[derive(Parser, Debug)]
#[command(name = "kchat", version, about)]
pub struct Args {
    /// Webhook URL override.
    #[arg(short = 'u', long)]
    pub webhook_url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
