//! CLI administration tool for tinylink.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create the urls table
//! cargo run --bin admin -- db init
//!
//! # Show record count
//! cargo run --bin admin -- stats
//!
//! # Shorten a URL / look up a code
//! cargo run --bin admin -- shorten https://example.com
//! cargo run --bin admin -- resolve Xk3b_9aQ
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `tinylink::config`.

use tinylink::application::services::UrlService;
use tinylink::config;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::SqliteUrlRepository;
use tinylink::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show statistics
    Stats,

    /// Create a short URL
    Shorten {
        /// The long URL to shorten
        url: String,
    },

    /// Look up the long URL behind a short code
    Resolve {
        /// Short code to look up
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the urls table if it does not exist
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = server::connect(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Stats => handle_stats(service(&pool, &config.base_url)).await?,
        Commands::Shorten { url } => handle_shorten(service(&pool, &config.base_url), &url).await?,
        Commands::Resolve { code } => {
            handle_resolve(service(&pool, &config.base_url), &code).await?
        }
    }

    Ok(())
}

fn service(pool: &SqlitePool, base_url: &str) -> UrlService {
    let repository = SqliteUrlRepository::new(Arc::new(pool.clone()));
    UrlService::new(Arc::new(repository), base_url)
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  SQLite: {}", version.bright_white());
        }
        DbAction::Init => {
            SqliteUrlRepository::new(Arc::new(pool.clone()))
                .init_schema()
                .await
                .context("Failed to create urls table")?;

            println!("{}", "urls table ready".green().bold());
        }
    }

    Ok(())
}

/// Displays the total number of stored records.
async fn handle_stats(service: UrlService) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count records: {}", e))?;

    println!("  Links: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Creates a record and prints the short URL.
async fn handle_shorten(service: UrlService, url: &str) -> Result<()> {
    let shortened = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten: {}", e))?;

    println!("  Code:      {}", shortened.code.cyan());
    println!("  Short URL: {}", shortened.short_url.bright_yellow().bold());

    Ok(())
}

/// Prints the long URL stored under `code`.
async fn handle_resolve(service: UrlService, code: &str) -> Result<()> {
    match service.resolve(code).await {
        Ok(long_url) => {
            println!("  {} -> {}", code.cyan(), long_url.bright_white());
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("  No record for code '{}'", code).yellow());
        }
        Err(e) => return Err(anyhow::anyhow!("Lookup failed: {}", e)),
    }

    Ok(())
}
