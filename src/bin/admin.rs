//! CLI administration tool for job-board.
//!
//! Provides commands for session housekeeping, user listings, statistics,
//! and database diagnostics without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Delete expired sessions
//! cargo run --bin admin -- sessions purge
//!
//! # Log a user out everywhere
//! cargo run --bin admin -- sessions revoke alice@example.com
//!
//! # List employers
//! cargo run --bin admin -- users list --type employer
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use job_board::domain::entities::UserType;
use job_board::domain::repositories::{SessionRepository, UserRepository};
use job_board::infrastructure::persistence::{PgSessionRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing job-board.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage login sessions
    Sessions {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Inspect user accounts
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Delete sessions whose expiry has passed
    Purge,

    /// Expire every session of one user
    Revoke {
        /// Account email
        email: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// List accounts, newest first
    List {
        /// Only show one role (candidate or employer)
        #[arg(short = 't', long = "type")]
        user_type: Option<UserType>,
    },
}

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
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Sessions { action } => handle_session_action(action, &pool).await?,
        Commands::Users { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_session_action(action: SessionAction, pool: &PgPool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let sessions = PgSessionRepository::new(pool.clone());

    match action {
        SessionAction::Purge => {
            println!("{}", "🧹 Purging expired sessions".bright_blue().bold());

            let removed = sessions
                .purge_expired()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to purge sessions: {}", e))?;

            println!(
                "{} {}",
                "✅ Removed:".green().bold(),
                removed.to_string().bright_white().bold()
            );
        }
        SessionAction::Revoke { email, yes } => {
            revoke_sessions(&PgUserRepository::new(pool), &sessions, &email, yes).await?;
        }
    }

    Ok(())
}

/// Expires every session of the account with `email` after confirmation.
async fn revoke_sessions(
    users: &PgUserRepository,
    sessions: &PgSessionRepository,
    email: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔒 Revoke Sessions".bright_blue().bold());
    println!();

    let account = users
        .find_by_email(email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?
        .user;

    println!("  User:  {}", account.full_name.cyan());
    println!("  Email: {}", account.email.bright_black());
    println!("  Role:  {}", account.user_type.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Log this user out of every session?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let expired = sessions
        .expire_all_for_user(account.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke sessions: {}", e))?;

    println!();
    println!(
        "{} {} session(s) expired",
        "✅".green(),
        expired.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let users = PgUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::List { user_type } => {
            println!("{}", "📋 Users".bright_blue().bold());
            println!();

            let list = users
                .list(user_type)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

            if list.is_empty() {
                println!("{}", "  No users found".yellow());
                return Ok(());
            }

            println!(
                "  {:<6} {:<32} {:<24} {:<10} {}",
                "ID".bright_white().bold(),
                "Email".bright_white().bold(),
                "Name".bright_white().bold(),
                "Role".bright_white().bold(),
                "Registered".bright_white().bold()
            );
            println!("  {}", "─".repeat(90).bright_black());

            for user in &list {
                let role = match user.user_type {
                    UserType::Employer => "employer".magenta(),
                    UserType::Candidate => "candidate".green(),
                };

                println!(
                    "  {:<6} {:<32} {:<24} {:<10} {}",
                    user.id.to_string().bright_black(),
                    user.email.cyan(),
                    user.full_name,
                    role,
                    user.created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black()
                );
            }

            println!();
            println!("  Total: {}", list.len().to_string().bright_white().bold());
            println!();
        }
    }

    Ok(())
}

/// Displays row counts for the main tables.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let rows: [(&str, &str); 6] = [
        ("Users", "SELECT COUNT(*) FROM users"),
        (
            "Active vacancies",
            "SELECT COUNT(*) FROM vacancies WHERE status = 'active'",
        ),
        ("Applications", "SELECT COUNT(*) FROM applications"),
        (
            "Pending applications",
            "SELECT COUNT(*) FROM applications WHERE status = 'pending'",
        ),
        ("Resumes", "SELECT COUNT(*) FROM resumes"),
        (
            "Active sessions",
            "SELECT COUNT(*) FROM user_sessions WHERE expires_at > NOW()",
        ),
    ];

    for (label, sql) in rows {
        let count: i64 = sqlx::query_scalar(sql).fetch_one(pool).await?;
        println!(
            "  {:<22} {}",
            format!("{label}:"),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
