//! Login and logout commands.

use clap::Args;
use dialoguer::{Input, Password};

use eduhub_client::ApiClient;
use eduhub_core::error::AppError;

use crate::output;
use crate::tree_ui::prompt_error;

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Admin email (prompted when omitted)
    #[arg(short, long)]
    pub email: Option<String>,
}

/// Execute login
pub async fn execute(args: &LoginArgs, client: &ApiClient) -> Result<(), AppError> {
    let email = match &args.email {
        Some(email) => email.clone(),
        None => Input::<String>::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(prompt_error)?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(prompt_error)?;

    client.auth().login(&email, &password).await?;
    output::print_success(&format!("Logged in as {email}"));
    Ok(())
}

/// Execute logout
pub fn logout(client: &ApiClient) -> Result<(), AppError> {
    client.auth().logout()?;
    output::print_success("Session cleared");
    Ok(())
}
