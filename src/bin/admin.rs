//! CLI administration tool for visit-tracker.
//!
//! Reads statistics and manages the links document directly against the
//! database, without going through the HTTP admin API.
//!
//! # Usage
//!
//! ```bash
//! # Four-window report with top countries
//! cargo run --bin admin -- stats
//!
//! # Last 20 visits
//! cargo run --bin admin -- visits --limit 20
//!
//! # Show or reset the links document
//! cargo run --bin admin -- links show
//! cargo run --bin admin -- links reset -y
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite URL, defaults to `sqlite://data.sqlite`.
//!   The database must already exist; the server creates it on first start.

use visit_tracker::application::services::{SettingsService, VisitService};
use visit_tracker::domain::entities::{WindowStats, clamp_recent_limit};
use visit_tracker::infrastructure::persistence::{
    SqliteSettingsRepository, SqliteVisitRepository, connect, migrate,
};
use visit_tracker::utils::time::format_millis;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing visit-tracker.
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
    /// Show visit statistics
    Stats,

    /// List recent visits
    Visits {
        /// Number of visits (default 100, max 500)
        #[arg(short, long)]
        limit: Option<i64>,
    },

    /// Manage the links document
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinksAction {
    /// Print the current links document
    Show,

    /// Replace the links document with the defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data.sqlite".to_string());

    let pool = connect(&database_url, 1, false)
        .await
        .with_context(|| format!("Failed to open database at {database_url}"))?;
    migrate(&pool).await.context("Failed to migrate")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Visits { limit } => handle_visits(&pool, limit).await?,
        Commands::Links { action } => handle_links_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn visit_service(pool: &SqlitePool) -> VisitService<SqliteVisitRepository> {
    VisitService::new(Arc::new(SqliteVisitRepository::new(Arc::new(pool.clone()))))
}

fn settings_service(pool: &SqlitePool) -> SettingsService<SqliteSettingsRepository> {
    SettingsService::new(Arc::new(SqliteSettingsRepository::new(Arc::new(
        pool.clone(),
    ))))
}

/// Displays the report for every window.
///
/// # Output Format
///
/// ```text
/// Statistics
///
///   Today          42
///     DE             30
///     Unknown        12
/// ```
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let report = visit_service(pool)
        .report()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to build report: {}", e))?;

    print_window("Today", &report.day);
    print_window("Last 7 days", &report.week);
    print_window("Last 30 days", &report.month);
    print_window("All time", &report.all);

    Ok(())
}

fn print_window(label: &str, stats: &WindowStats) {
    println!(
        "  {:<14} {}",
        label.bright_white().bold(),
        stats.visits.to_string().bright_green().bold()
    );

    for country in &stats.countries {
        println!(
            "    {:<14} {}",
            country.country.cyan(),
            country.count.to_string().bright_black()
        );
    }
    println!();
}

/// Lists recent visits, newest first.
async fn handle_visits(pool: &SqlitePool, limit: Option<i64>) -> Result<()> {
    println!(
        "{}",
        format!("Recent visits (up to {})", clamp_recent_limit(limit))
            .bright_blue()
            .bold()
    );
    println!();

    let visits = visit_service(pool)
        .recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list visits: {}", e))?;

    if visits.is_empty() {
        println!("{}", "  No visits recorded".yellow());
        return Ok(());
    }

    println!(
        "  {:<19} {:<39} {:<8} {}",
        "Time".bright_white().bold(),
        "IP".bright_white().bold(),
        "Country".bright_white().bold(),
        "Path".bright_white().bold()
    );
    println!("  {}", "-".repeat(80).bright_black());

    for visit in &visits {
        println!(
            "  {:<19} {:<39} {:<8} {}",
            format_millis(visit.timestamp).bright_black(),
            visit.ip,
            visit.country.cyan(),
            visit.path
        );
    }

    println!();
    println!(
        "  Total: {}",
        visits.len().to_string().bright_white().bold()
    );

    Ok(())
}

async fn handle_links_action(action: LinksAction, pool: &SqlitePool) -> Result<()> {
    let service = settings_service(pool);

    match action {
        LinksAction::Show => {
            let links = service
                .get_links()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read links: {}", e))?;

            println!("{}", "Links".bright_blue().bold());
            println!();
            println!("{}", serde_json::to_string_pretty(&links)?);
        }
        LinksAction::Reset { yes } => {
            println!("{}", "Reset links to defaults".bright_blue().bold());
            println!();
            println!("{}", serde_json::to_string_pretty(service.defaults())?);
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Overwrite the stored links document?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            service
                .set_links(json!({}))
                .await
                .map_err(|e| anyhow::anyhow!("Failed to reset links: {}", e))?;

            println!("{}", "Links reset".green().bold());
        }
    }

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let visits: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visits")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  Visits stored: {}", visits.to_string().bright_white());
        }
    }

    Ok(())
}
