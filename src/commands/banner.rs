//! Landing-page banner commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use eduhub_client::ApiClient;
use eduhub_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for banner commands
#[derive(Debug, Args)]
pub struct BannerArgs {
    /// Banner subcommand
    #[command(subcommand)]
    pub command: BannerCommand,
}

/// Banner subcommands
#[derive(Debug, Subcommand)]
pub enum BannerCommand {
    /// Show the current banner
    Show,
    /// Upload and activate a new banner image
    Set {
        /// Image file to upload
        path: PathBuf,
    },
}

/// Execute banner commands
pub async fn execute(
    args: &BannerArgs,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        BannerCommand::Show => {
            let banner = client.banner().current().await?;
            match format {
                OutputFormat::Json => output::print_item(&banner, format),
                OutputFormat::Table => match banner.image_url {
                    Some(url) => output::print_kv("banner", &url),
                    None => println!("No banner set."),
                },
            }
        }
        BannerCommand::Set { path } => {
            let uploaded = client.uploads().upload_path(path).await?;
            client.banner().set(&uploaded.file_url).await?;
            output::print_success("Banner updated");
        }
    }
    Ok(())
}
