//! Reqwest-backed transport for the conversational webhook.

mod client;
mod config;

pub use client::WebhookClient;
pub use config::WebhookConfig;
