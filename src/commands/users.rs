//! Platform user administration commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use eduhub_client::ApiClient;
use eduhub_core::error::AppError;
use eduhub_core::types::{PageRequest, UserId};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UsersArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UsersCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List platform users
    List {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u64,
        /// Page size
        #[arg(short, long, default_value = "8")]
        limit: u64,
    },
    /// Ban a user
    Ban {
        /// User ID
        id: UserId,
    },
    /// Unban a user
    Unban {
        /// User ID
        id: UserId,
    },
}

/// User display row
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Phone
    phone: String,
    /// Sign-in method
    login: String,
    /// Account status
    status: String,
}

/// Execute user commands
pub async fn execute(
    args: &UsersArgs,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        UsersCommand::List { page, limit } => {
            let page_request = PageRequest::new(*page, *limit);
            let users = client.auth().users(&page_request).await?;

            let rows: Vec<UserRow> = users
                .items
                .iter()
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    name: u.display_name().to_string(),
                    email: u.email.clone().unwrap_or_else(|| "-".to_string()),
                    phone: u.phone.clone().unwrap_or_else(|| "-".to_string()),
                    login: if u.is_google_login() {
                        "google".to_string()
                    } else {
                        "mobile".to_string()
                    },
                    status: if u.is_banned() {
                        "banned".to_string()
                    } else {
                        "active".to_string()
                    },
                })
                .collect();

            output::print_list(&rows, format);
            println!("Page {} of {}", users.page, users.total_pages);
        }
        UsersCommand::Ban { id } => {
            client.auth().toggle_ban(*id, true).await?;
            output::print_success(&format!("User {id} banned"));
        }
        UsersCommand::Unban { id } => {
            client.auth().toggle_ban(*id, false).await?;
            output::print_success(&format!("User {id} unbanned"));
        }
    }
    Ok(())
}
