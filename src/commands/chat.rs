//! Admin chat commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use eduhub_client::ApiClient;
use eduhub_core::error::AppError;
use eduhub_core::types::{GroupId, MessageId};
use eduhub_entity::chat::{Attachment, ChatMessage, ClientEvent, ServerEvent};

use crate::output::{self, OutputFormat};

/// Arguments for chat commands
#[derive(Debug, Args)]
pub struct ChatArgs {
    /// Chat subcommand
    #[command(subcommand)]
    pub command: ChatCommand,
}

/// Chat subcommands
#[derive(Debug, Subcommand)]
pub enum ChatCommand {
    /// List chat groups
    Groups,
    /// Show a group's message history
    History {
        /// Group ID
        group: GroupId,
    },
    /// List a group's members
    Members {
        /// Group ID
        group: GroupId,
    },
    /// Send a message into a group
    Send {
        /// Group ID
        group: GroupId,
        /// Message text
        #[arg(short, long)]
        message: Option<String>,
        /// File to attach (uploaded through the presigned flow)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Delete a message for everyone
    DeleteMessage {
        /// Group ID (for the deletion broadcast)
        group: GroupId,
        /// Message ID
        message: MessageId,
    },
    /// Stream a group's live events until interrupted
    Watch {
        /// Group ID
        group: GroupId,
    },
    /// Create a group
    CreateGroup {
        /// Group name
        name: String,
        /// Avatar image to upload
        #[arg(short, long)]
        image: Option<PathBuf>,
        /// Enroll every user of these courses
        #[arg(long, value_delimiter = ',')]
        courses: Vec<i64>,
        /// Additional individual member user IDs
        #[arg(long, value_delimiter = ',')]
        users: Vec<i64>,
    },
    /// Update a group's name or avatar
    UpdateGroup {
        /// Group ID
        group: GroupId,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New avatar image to upload
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
}

/// Group display row
#[derive(Debug, Serialize, Tabled)]
struct GroupRow {
    /// Group ID
    id: String,
    /// Name
    name: String,
    /// Members
    members: String,
}

/// Member display row
#[derive(Debug, Serialize, Tabled)]
struct MemberRow {
    /// User ID
    id: String,
    /// Name
    name: String,
}

/// Execute chat commands
pub async fn execute(
    args: &ChatArgs,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let chat = client.chat();

    match &args.command {
        ChatCommand::Groups => {
            let groups = chat.groups().await?;
            let rows: Vec<GroupRow> = groups
                .iter()
                .map(|g| GroupRow {
                    id: g.id.to_string(),
                    name: g.name.clone(),
                    members: g
                        .member_count
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            output::print_list(&rows, format);
        }
        ChatCommand::History { group } => {
            let messages = chat.messages(*group).await?;
            match format {
                OutputFormat::Json => output::print_item(&messages, format),
                OutputFormat::Table => {
                    for message in &messages {
                        print_message(message);
                    }
                }
            }
        }
        ChatCommand::Members { group } => {
            let members = chat.members(*group).await?;
            let rows: Vec<MemberRow> = members
                .iter()
                .map(|m| MemberRow {
                    id: m.id.to_string(),
                    name: m.name.clone().unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            output::print_list(&rows, format);
        }
        ChatCommand::Send {
            group,
            message,
            file,
        } => {
            if message.is_none() && file.is_none() {
                return Err(AppError::validation("Nothing to send"));
            }
            let attachment = match file {
                Some(path) => {
                    let uploaded = client.uploads().upload_path(path).await?;
                    Some(Attachment {
                        file_url: uploaded.file_url,
                        file_type: Some(uploaded.file_type),
                        file_name: Some(uploaded.file_name),
                    })
                }
                None => None,
            };
            let mut socket = chat.connect_socket().await?;
            socket.join(*group).await?;
            socket
                .send_message(*group, message.clone(), attachment)
                .await?;
            socket.close().await?;
            output::print_success("Message sent");
        }
        ChatCommand::DeleteMessage { group, message } => {
            chat.delete_message(*message).await?;
            // The REST delete succeeded; broadcast it so open clients
            // gray the message out immediately.
            let mut socket = chat.connect_socket().await?;
            socket
                .send(&ClientEvent::DeleteMessage {
                    message_id: *message,
                    group_id: *group,
                })
                .await?;
            socket.close().await?;
            output::print_success(&format!("Message {message} deleted"));
        }
        ChatCommand::CreateGroup {
            name,
            image,
            courses,
            users,
        } => {
            // Surface what the ids refer to before committing, the way the
            // modal lists courses-with-users and all users.
            if !courses.is_empty() {
                let known = chat.courses_with_users().await?;
                for id in courses {
                    if !known.iter().any(|c| c.id.into_inner() == *id) {
                        output::print_warning(&format!("Course {id} has no enrolled users"));
                    }
                }
            }
            if !users.is_empty() {
                let known = chat.all_users().await?;
                for id in users {
                    if !known.iter().any(|u| u.id.into_inner() == *id) {
                        output::print_warning(&format!("Unknown user {id}"));
                    }
                }
            }

            let image_url = match image {
                Some(path) => Some(client.uploads().upload_path(path).await?.file_url),
                None => None,
            };
            chat.create_group(&eduhub_entity::chat::CreateGroup {
                name: name.clone(),
                image: image_url,
                course_ids: courses.iter().map(|id| (*id).into()).collect(),
                user_ids: users.iter().map(|id| (*id).into()).collect(),
            })
            .await?;
            output::print_success(&format!("Group '{name}' created"));
        }
        ChatCommand::UpdateGroup { group, name, image } => {
            let image_url = match image {
                Some(path) => Some(client.uploads().upload_path(path).await?.file_url),
                None => None,
            };
            chat.update_group(
                *group,
                &eduhub_entity::chat::UpdateGroup {
                    name: name.clone(),
                    image: image_url,
                },
            )
            .await?;
            output::print_success(&format!("Group {group} updated"));
        }
        ChatCommand::Watch { group } => {
            let mut socket = chat.connect_socket().await?;
            socket.join(*group).await?;
            println!("Watching group {group} (ctrl-c to stop)");
            while let Some(event) = socket.next_event().await? {
                match event {
                    ServerEvent::NewMessage(message) => {
                        if message.group_id == *group {
                            print_message(&message);
                        }
                    }
                    ServerEvent::MessageDeleted { message_id } => {
                        println!("(message {message_id} was deleted)");
                    }
                }
            }
        }
    }
    Ok(())
}

fn print_message(message: &ChatMessage) {
    if message.is_deleted() {
        println!("[{}] (deleted)", message.id);
        return;
    }
    let sender = message
        .sender_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    let text = message.message.as_deref().unwrap_or("");
    match &message.attachment {
        Some(attachment) => {
            println!("[{}] {sender}: {text} <{}>", message.id, attachment.file_url)
        }
        None => println!("[{}] {sender}: {text}", message.id),
    }
}
