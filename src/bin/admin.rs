//! CLI administration tool for user-service.
//!
//! Inspects and manages user records directly in the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # Show one user by id, username or email
//! cargo run --bin admin -- user show admin@mail.com
//!
//! # Delete a user (asks for confirmation)
//! cargo run --bin admin -- user delete 1b4e28ba-2fa1-11d2-883f-0016d3cca427
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
//! Same database settings as the server: `DATABASE_URL` or the `DB_*` components.

use user_service::config;
use user_service::infrastructure::persistence::PgUserRepository;
use user_service::prelude::{AppError, User, UserService};
use user_service::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-service.
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
    /// Manage users
    User {
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

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Show a single user
    Show {
        /// User id, username or email
        key: String,
    },

    /// Delete a user
    Delete {
        /// User id
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

type PgUserService = UserService<PgUserRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let service = UserService::new(repo);

    match action {
        UserAction::List => list_users(&service).await?,
        UserAction::Show { key } => show_user(&service, &key).await?,
        UserAction::Delete { id, yes } => delete_user(&service, &id, yes).await?,
    }

    Ok(())
}

/// Lists all users as a table.
///
/// ```text
/// Users
///
///   ID                                    Username             Email
///   ──────────────────────────────────────────────────────────────────────────
///   1b4e28ba-2fa1-11d2-883f-0016d3cca427  username             admin@mail.com
/// ```
async fn list_users(service: &PgUserService) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let users = service
        .find_all_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<37} {:<20} {}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Email".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for user in &users {
        println!(
            "  {:<37} {:<20} {}",
            user.id.bright_black(),
            user.username.cyan(),
            user.email
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Finds a user by id, then username, then email.
async fn find_user(service: &PgUserService, key: &str) -> Result<Option<User>> {
    if let Some(user) = found(service.find_user_by_id(key).await)? {
        return Ok(Some(user));
    }
    if let Some(user) = found(service.find_user_by_username(key).await)? {
        return Ok(Some(user));
    }
    found(service.find_user_by_email(key).await)
}

/// Turns a not-found lookup into `None` and any other failure into an error.
fn found(result: Result<User, AppError>) -> Result<Option<User>> {
    match result {
        Ok(user) => Ok(Some(user)),
        Err(AppError::NotFound { .. }) => Ok(None),
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

async fn show_user(service: &PgUserService, key: &str) -> Result<()> {
    let Some(user) = find_user(service, key).await? else {
        println!("{}", format!("No user matches '{}'", key).yellow());
        return Ok(());
    };

    println!("{}", "User".bright_blue().bold());
    println!();
    println!("  ID:       {}", user.id.bright_black());
    println!("  Username: {}", user.username.cyan());
    println!("  Email:    {}", user.email);
    println!();

    Ok(())
}

/// Deletes a user after an optional confirmation prompt (default: No).
async fn delete_user(service: &PgUserService, id: &str, skip_confirm: bool) -> Result<()> {
    let Some(user) = found(service.find_user_by_id(id).await)? else {
        println!("{}", "User not found".yellow());
        return Ok(());
    };

    println!("  User:  {}", user.username.cyan());
    println!("  Email: {}", user.email);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_user(&user.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "User deleted".green().bold());
    Ok(())
}

/// Displays the number of stored users.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    println!("  Users: {}", users_count.to_string().bright_green().bold());
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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
