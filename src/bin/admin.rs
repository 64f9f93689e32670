//! CLI administration tool for qr-shortener.
//!
//! Reads click counters and checks the database without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Totals and the most clicked short URLs
//! cargo run --bin admin -- stats --top 10
//!
//! # Inspect one short id (click counter is not touched)
//! cargo run --bin admin -- lookup Xy3_a-9Q
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use qr_shortener::config::mask_connection_string;
use qr_shortener::domain::entities::UrlRecord;
use qr_shortener::domain::repositories::UrlRepository;
use qr_shortener::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing qr-shortener.
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
    /// Show totals and the most clicked short URLs
    Stats {
        /// Number of short URLs to list
        #[arg(short, long, default_value_t = 10)]
        top: i64,
    },

    /// Show one short URL without counting a click
    Lookup {
        /// Short identifier (the last path segment of the short URL)
        short_id: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
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
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Stats { top } => handle_stats(&repo, top).await?,
        Commands::Lookup { short_id, json } => handle_lookup(&repo, &short_id, json).await?,
        Commands::Db { action } => handle_db_action(action, &repo, &pool).await?,
    }

    Ok(())
}

/// Displays totals and the most clicked records.
///
/// # Output Format
///
/// ```text
/// Statistics
///
///   URLs:    42
///   Clicks:  1337
///
///   Short id   Clicks   Created            Original URL
///   ----------------------------------------------------------------
///   Xy3_a-9Q   812      2025-01-15 10:30   https://example.com/page
/// ```
async fn handle_stats(repo: &PgUrlRepository, top: i64) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let stats = repo
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  URLs:    {}",
        stats.total_urls.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:  {}",
        stats.total_clicks.to_string().bright_green().bold()
    );
    println!();

    if top <= 0 || stats.total_urls == 0 {
        return Ok(());
    }

    let records = repo
        .top_by_clicks(top)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list URLs: {}", e))?;

    println!(
        "  {:<10} {:<8} {:<18} {}",
        "Short id".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "-".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<10} {:<8} {:<18} {}",
            record.short_id.cyan(),
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

    Ok(())
}

/// Shows a single record by short identifier.
async fn handle_lookup(repo: &PgUrlRepository, short_id: &str, json: bool) -> Result<()> {
    let record = repo
        .find_by_short_id(short_id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("No short URL with id '{}'", short_id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }

    Ok(())
}

fn print_record(record: &UrlRecord) {
    println!("{}", "Short URL".bright_blue().bold());
    println!();
    println!("  Short id:  {}", record.short_id.cyan());
    println!("  Short URL: {}", record.short_url.bright_white());
    println!("  Target:    {}", record.original_url);
    println!(
        "  Clicks:    {}",
        record.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:   {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!(
        "  Updated:   {}",
        record
            .updated_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, repo: &PgUrlRepository, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            repo.ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
