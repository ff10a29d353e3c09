use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "memo")]
#[command(about = "Private notes, kept in your account's remote store")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// CLI profile name for API/auth configuration
    #[arg(long, global = true, value_name = "NAME")]
    pub profile: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        title: String,
        /// Note content
        content: Vec<String>,
    },
    /// List your notes, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search your notes by substring (title or content)
    Search {
        /// Search query
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single note
    Show {
        /// Note ID
        id: String,
    },
    /// Edit an existing note
    Edit {
        /// Note ID
        id: String,
        /// Replacement title (keeps current when omitted)
        #[arg(long, value_name = "TEXT")]
        title: Option<String>,
        /// Replacement content (keeps current when omitted)
        #[arg(long, value_name = "TEXT")]
        content: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Manage the stored session
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Configure CLI profiles
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Store a session issued by the external identity provider
    Login {
        /// Account user id
        #[arg(long, value_name = "ID")]
        user_id: String,
        /// Access token for the document store API
        #[arg(long, value_name = "TOKEN")]
        token: String,
        /// Optional account email, shown by `auth status`
        #[arg(long, value_name = "EMAIL")]
        email: Option<String>,
    },
    /// Show session status for the profile
    Status,
    /// Clear the stored session
    Logout,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize or update profile config
    Init {
        /// Document store API base URL
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
        /// Project API key
        #[arg(long, value_name = "KEY")]
        api_key: Option<String>,
        /// Keep current active profile instead of activating this one
        #[arg(long)]
        no_activate: bool,
    },
    /// Print the resolved profile config
    Show,
}
