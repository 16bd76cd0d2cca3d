use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{HttpBackend, PostsView};
use shared::domain::UserId;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::Command;
use config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "posts", about = "View and edit a user's posts and comments")]
struct Cli {
    /// Base URL of the posts API.
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    user_id: Option<UserId>,
    #[arg(long, default_value = "posts.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(&cli.config)?;
    if let Some(url) = cli.api_url {
        settings.api_base_url = url;
    }
    if let Some(user_id) = cli.user_id {
        settings.user_id = Some(user_id);
    }

    let user_id = settings
        .user_id
        .context("no user id; pass --user-id or set POSTS_USER_ID")?;
    let backend = HttpBackend::with_timeout(
        &settings.api_base_url,
        Duration::from_secs(settings.request_timeout_seconds),
    )
    .context("failed to build api client")?;

    info!(%user_id, api = %settings.api_base_url, "opening posts view");
    let mut view = PostsView::open(backend, user_id).await;
    let outcome = commands::run(&mut view, cli.command).await;

    print!("{}", view.render());
    outcome.context("command failed")
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod main_tests;
