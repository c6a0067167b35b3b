//! Console command definitions and dispatch.

pub mod banner;
pub mod chat;
pub mod courses;
pub mod files;
pub mod login;
pub mod structure;
pub mod tests;
pub mod users;

use clap::{Parser, Subcommand};

use eduhub_client::ApiClient;
use eduhub_core::config::AppConfig;
use eduhub_core::error::AppError;

use crate::output::OutputFormat;

/// EduHub — admin console for the learning platform
#[derive(Debug, Parser)]
#[command(name = "eduhub-admin", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and save the session token
    Login(login::LoginArgs),
    /// Drop the saved session
    Logout,
    /// Platform user administration
    Users(users::UsersArgs),
    /// File manager
    Files(files::FilesArgs),
    /// Course management
    Courses(courses::CoursesArgs),
    /// Course-structure editor
    Structure(structure::StructureArgs),
    /// Test management
    Tests(tests::TestsArgs),
    /// Admin chat
    Chat(chat::ChatArgs),
    /// Landing-page banner
    Banner(banner::BannerArgs),
}

impl Cli {
    /// Execute the console command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        let client = ApiClient::new(config)?;
        match &self.command {
            Commands::Login(args) => login::execute(args, &client).await,
            Commands::Logout => login::logout(&client),
            Commands::Users(args) => users::execute(args, &client, self.format).await,
            Commands::Files(args) => files::execute(args, &client, self.format).await,
            Commands::Courses(args) => courses::execute(args, &client, self.format).await,
            Commands::Structure(args) => structure::execute(args, &client, self.format).await,
            Commands::Tests(args) => tests::execute(args, &client, self.format).await,
            Commands::Chat(args) => chat::execute(args, &client, self.format).await,
            Commands::Banner(args) => banner::execute(args, &client, self.format).await,
        }
    }
}
