//! CLI argument definitions for the Folio binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio::constants::{DEFAULT_DATA_DIR, DEFAULT_USERS_FILE};

/// Folio flat-file document manager
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Folio: markdown and text documents on disk, edited through the browser")]
#[command(version)]
pub struct Cli {
    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Folio web server
    Serve(ServeArgs),
    /// Check health of a running Folio server
    Health(HealthArgs),
    /// Show where documents and users are stored
    Info(InfoArgs),
    /// Document management
    #[command(subcommand)]
    Docs(DocsCommand),
    /// User management
    #[command(subcommand)]
    User(UserCommand),
}

#[derive(Subcommand, Debug)]
pub enum DocsCommand {
    /// List documents with their size and modification time
    List(DocsListArgs),
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Add a user, applying the same rules as the signup form
    Add(UserAddArgs),
}

/// Locations of the document directory and the credentials file
#[derive(clap::Args, Debug, Clone)]
pub struct StoreArgs {
    /// Directory holding the documents
    #[arg(short = 'D', long, default_value = DEFAULT_DATA_DIR, env = "FOLIO_DATA_DIR")]
    pub data_dir: PathBuf,

    /// YAML file mapping usernames to password hashes
    #[arg(short = 'U', long, default_value = DEFAULT_USERS_FILE, env = "FOLIO_USERS_FILE")]
    pub users_file: PathBuf,
}

/// Arguments for the serve command
#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 4567, env = "FOLIO_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0", env = "FOLIO_HOST")]
    pub host: String,

    #[command(flatten)]
    pub stores: StoreArgs,
}

/// Arguments for the health command
#[derive(clap::Args, Debug)]
pub struct HealthArgs {
    /// Base URL of the server to check
    #[arg(long, default_value = "http://127.0.0.1:4567", env = "FOLIO_URL")]
    pub url: String,

    /// Timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    pub timeout: u64,
}

/// Arguments for the info command
#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub stores: StoreArgs,
}

/// Arguments for the `docs list` command
#[derive(clap::Args, Debug)]
pub struct DocsListArgs {
    #[command(flatten)]
    pub stores: StoreArgs,
}

/// Arguments for the `user add` command
#[derive(clap::Args, Debug)]
pub struct UserAddArgs {
    /// Username for the new account
    pub username: String,

    /// Password for the new account
    #[arg(long, env = "FOLIO_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[command(flatten)]
    pub stores: StoreArgs,
}
