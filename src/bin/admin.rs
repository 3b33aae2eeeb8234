//! CLI administration tool for tinylink.
//!
//! Inspects and creates short links directly against the PostgreSQL store,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Most recent links
//! cargo run --bin admin -- history --limit 20
//!
//! # Statistics of one link
//! cargo run --bin admin -- stats aB3xY9
//!
//! # Create a link
//! cargo run --bin admin -- shorten https://example.com --alias promo
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`DATABASE_URL` or `DB_*`, `BASE_URL`, `CODE_LENGTH`, ...).

use tinylink::config::{self, Config};
use tinylink::domain::entities::RequestMeta;
use tinylink::domain::repositories::UrlRepository;
use tinylink::infrastructure::persistence::PgUrlRepository;
use tinylink::prelude::{ShortenCommand, ShortenService, StatsService};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show the most recently created links
    History {
        /// Number of links to show (0-100)
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },

    /// Show statistics of one link
    Stats {
        /// Short code
        code: String,
    },

    /// Create a short link
    Shorten {
        /// URL to shorten
        url: String,

        /// Custom alias (3-20 characters: letters, digits, '-' or '_')
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let repository: Arc<dyn UrlRepository> =
        Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::History { limit } => handle_history(repository, &config, limit).await?,
        Commands::Stats { code } => handle_stats(repository, &config, &code).await?,
        Commands::Shorten { url, alias } => {
            handle_shorten(repository, &config, url, alias).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Lists recent links, newest first.
async fn handle_history(
    repository: Arc<dyn UrlRepository>,
    config: &Config,
    limit: i64,
) -> Result<()> {
    let settings = config.shortener_settings();
    let service = StatsService::new(repository);

    let records = service
        .history(Some(limit))
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!("{}", "Recent links".bright_blue().bold());
    println!();

    if records.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<20} {:<8} {:<17} {}",
        "CODE".bold(),
        "CLICKS".bold(),
        "CREATED".bold(),
        "URL".bold()
    );

    for record in &records {
        println!(
            "  {:<20} {:<8} {:<17} {}",
            record.short_code.cyan(),
            record.clicks.to_string().bright_green(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.original_url
        );
    }

    println!();
    println!(
        "  Total: {}  (base URL: {})",
        records.len().to_string().bright_white().bold(),
        settings.base_url.bright_black()
    );
    println!();

    Ok(())
}

/// Displays the statistics of one link.
async fn handle_stats(
    repository: Arc<dyn UrlRepository>,
    config: &Config,
    code: &str,
) -> Result<()> {
    let settings = config.shortener_settings();
    let service = StatsService::new(repository);

    let record = service
        .stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let last_clicked = record
        .last_clicked_at
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    println!("{}", "Link statistics".bright_blue().bold());
    println!();
    println!("  Code:         {}", record.short_code.cyan());
    println!("  Short URL:    {}", settings.short_url(&record.short_code));
    println!("  Original URL: {}", record.original_url);
    println!(
        "  Clicks:       {}",
        record.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:      {}",
        record.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!("  Last click:   {}", last_clicked.bright_black());
    println!("  QR code:      {}", settings.qr_url(&record.short_code));
    println!();

    Ok(())
}

/// Creates a short link through the shortening service.
async fn handle_shorten(
    repository: Arc<dyn UrlRepository>,
    config: &Config,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    let service = ShortenService::new(repository, config.shortener_settings());

    let mut command = ShortenCommand::new(url);
    if let Some(alias) = alias {
        command = command.with_alias(alias);
    }

    let shortened = service
        .shorten(command, RequestMeta::default())
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "Short link created".green().bold());
    println!();
    println!("  Code:      {}", shortened.short_code.cyan());
    println!("  Short URL: {}", shortened.short_url.bright_white().bold());
    println!("  Target:    {}", shortened.original_url);
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await?;

            let clicks_count: i64 =
                sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM urls")
                    .fetch_one(pool)
                    .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Links:      {}",
                links_count.to_string().bright_green().bold()
            );
            println!(
                "  Clicks:     {}",
                clicks_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
