//! Hookcard CLI - Render and send repository event notifications
//!
//! Reads an event payload as posted by the Git host, formats it as a DingTalk
//! action card, and prints or delivers it.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hookcard::NotificationFormatter;
use hookcard_integration_dingtalk::{DingtalkClient, DingtalkFormatter};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::{Config, WEBHOOK_URL_ENV};

#[derive(Parser)]
#[command(name = "hookcard")]
#[command(about = "Hookcard CLI - Repository events as DingTalk action cards", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the action card JSON for an event
    Render {
        /// Event tag (create, delete, fork, push, issues, issue_comment, pull_request, release)
        #[arg(short, long)]
        event: String,
        /// Event payload file (reads stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Render an event and post it to the webhook
    Send {
        /// Event tag
        #[arg(short, long)]
        event: String,
        /// Event payload file (reads stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Webhook URL (overrides HOOKCARD_WEBHOOK_URL and config)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Store the webhook URL
    SetUrl {
        url: String,
    },
    /// Set the card title
    SetTitle {
        title: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so rendered JSON on stdout stays clean for piping
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hookcard=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { event, file } => cmd_render(event, file),
        Commands::Send { event, file, url } => cmd_send(event, file, url).await,
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
    }
}

// ============================================
// Command Implementations
// ============================================

fn read_event(file: Option<PathBuf>) -> Result<serde_json::Value> {
    let content = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read event payload from {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read event payload from stdin")?;
            buf
        }
    };

    serde_json::from_str(&content).context("Event payload is not valid JSON")
}

fn cmd_render(event: String, file: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let formatter = DingtalkFormatter::new(config.dingtalk);

    let data = read_event(file)?;
    let bytes = formatter
        .render(&event, &data)
        .with_context(|| format!("Failed to render {} event", event))?;

    println!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}

async fn cmd_send(event: String, file: Option<PathBuf>, url: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let webhook_url = config
        .resolve_webhook_url(url, std::env::var(WEBHOOK_URL_ENV).ok())
        .context(
            "No webhook URL. Use --url, set HOOKCARD_WEBHOOK_URL, or run 'hookcard config set-url'.",
        )?;

    let client = DingtalkClient::new(&config.dingtalk)?;
    let formatter = DingtalkFormatter::new(config.dingtalk);

    let data = read_event(file)?;
    let payload = formatter
        .build_payload(&event, &data)
        .with_context(|| format!("Failed to render {} event", event))?;

    tracing::info!(event = %event, "Sending notification");
    client
        .send_payload(&webhook_url, &payload)
        .await
        .context("Failed to deliver notification")?;

    eprintln!("{} {} notification sent", "✓".green(), event.cyan());
    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!(
                "  Webhook URL: {}",
                if config.webhook_url.is_some() { "Set".green() } else { "Not set".red() }
            );
            println!("  Card Title: {}", config.dingtalk.title.cyan());
            println!("  Hide Avatar: {}", config.dingtalk.hide_avatar);
            println!("  Button Layout: {:?}", config.dingtalk.btn_orientation);
            println!("  @ Mobiles: {}", config.dingtalk.at_mobiles.len());
            println!("  @ All: {}", config.dingtalk.is_at_all);
            println!("  Timeout: {}s", config.dingtalk.timeout_secs);
        }

        ConfigAction::SetUrl { url } => {
            config.set_webhook_url(url);
            config.save()?;
            println!("{} Webhook URL saved to {:?}", "✓".green(), Config::config_path()?);
        }

        ConfigAction::SetTitle { title } => {
            config.set_title(title.clone());
            config.save()?;
            println!("{} Card title set to '{}'", "✓".green(), title);
        }
    }

    Ok(())
}
