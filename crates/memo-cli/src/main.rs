//! Memo CLI - private notes over the remote document store.
//!
//! Capture, search, and manage your own notes from the terminal.

mod auth;
mod cli;
mod commands;
mod config;
mod error;
#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{AuthCommands, Cli, Commands, ConfigCommands};
use crate::commands::common::open_store;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("memo=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Add { title, content } => {
            let store = open_store(profile)?;
            commands::add::run_add(&store, &title, &content).await?;
        }
        Commands::List { json } => {
            let store = open_store(profile)?;
            commands::list::run_list(&store, json).await?;
        }
        Commands::Search { query, json } => {
            let store = open_store(profile)?;
            commands::search::run_search(&store, &query, json).await?;
        }
        Commands::Show { id } => {
            let store = open_store(profile)?;
            commands::show::run_show(&store, &id).await?;
        }
        Commands::Edit { id, title, content } => {
            let store = open_store(profile)?;
            commands::edit::run_edit(&store, &id, title.as_deref(), content.as_deref()).await?;
        }
        Commands::Delete { id, yes } => {
            let store = open_store(profile)?;
            commands::delete::run_delete(&store, &id, yes).await?;
        }
        Commands::Auth { command } => match command {
            AuthCommands::Login {
                user_id,
                token,
                email,
            } => commands::auth_cmd::run_login(profile, &user_id, &token, email)?,
            AuthCommands::Status => commands::auth_cmd::run_status(profile)?,
            AuthCommands::Logout => commands::auth_cmd::run_logout(profile)?,
        },
        Commands::Config { command } => match command {
            ConfigCommands::Init {
                api_url,
                api_key,
                no_activate,
            } => commands::config_cmd::run_init(profile, api_url, api_key, no_activate)?,
            ConfigCommands::Show => commands::config_cmd::run_show(profile)?,
        },
    }

    Ok(())
}
