//! File-manager commands.
//!
//! Every mutation asks the backend first, then reloads the whole tree and
//! prints it — the reload is the only reconciliation with other editors.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use eduhub_client::{ApiClient, TreeStore};
use eduhub_core::error::AppError;
use eduhub_core::types::{NodeId, SortDirection};
use eduhub_entity::node::Node;
use eduhub_entity::upload::SaveUpload;
use eduhub_tree::{find, flatten_sort_updates, rename as rename_tree, reorder, resolve_move_parent};

use crate::output::{self, OutputFormat};
use crate::tree_ui;

/// Arguments for file-manager commands
#[derive(Debug, Args)]
pub struct FilesArgs {
    /// File-manager subcommand
    #[command(subcommand)]
    pub command: FilesCommand,
}

/// File-manager subcommands
#[derive(Debug, Subcommand)]
pub enum FilesCommand {
    /// Show the full tree
    Tree,
    /// Create a folder
    Mkdir {
        /// Folder name
        name: String,
        /// Parent folder ID (omit for root)
        #[arg(short, long)]
        parent: Option<NodeId>,
    },
    /// Upload a file and register it in the tree
    Upload {
        /// Local file to upload
        path: PathBuf,
        /// Parent folder ID (omit for root)
        #[arg(short, long)]
        parent: Option<NodeId>,
        /// Display name (defaults to the file name)
        #[arg(short, long)]
        name: Option<String>,
        /// Optional thumbnail image to upload alongside
        #[arg(short, long)]
        thumbnail: Option<PathBuf>,
    },
    /// Move a node onto a drop target (folder: re-parent; file: to root)
    Move {
        /// Node to move
        id: NodeId,
        /// Drop target node
        onto: NodeId,
    },
    /// Toggle a node's lock
    Lock {
        /// Node ID
        id: NodeId,
    },
    /// Rename a node
    Rename {
        /// Node ID
        id: NodeId,
        /// New name
        name: String,
    },
    /// Delete a node and its subtree
    Rm {
        /// Node ID
        id: NodeId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Move a node up or down among its siblings
    Reorder {
        /// Node ID
        id: NodeId,
        /// Direction
        #[arg(value_enum)]
        direction: Direction,
    },
}

/// Reorder direction argument
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Direction {
    /// Swap with the previous sibling
    Up,
    /// Swap with the next sibling
    Down,
}

impl From<Direction> for SortDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => SortDirection::Up,
            Direction::Down => SortDirection::Down,
        }
    }
}

/// Execute file-manager commands
pub async fn execute(
    args: &FilesArgs,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let files = client.files();
    // The operations both tree backends share go through the store seam.
    let store: &dyn TreeStore = &files;

    match &args.command {
        FilesCommand::Tree => {
            let tree = store.fetch().await?;
            show_tree(&tree, format);
        }
        FilesCommand::Mkdir { name, parent } => {
            store.create_folder(*parent, name).await?;
            output::print_success(&format!("Created folder '{name}'"));
            show_tree(&store.fetch().await?, format);
        }
        FilesCommand::Upload {
            path,
            parent,
            name,
            thumbnail,
        } => {
            let uploaded = client.uploads().upload_path(path).await?;
            let thumbnail_url = match thumbnail {
                Some(thumb) => Some(client.uploads().upload_path(thumb).await?.file_url),
                None => None,
            };
            let display_name = name.clone().unwrap_or_else(|| uploaded.file_name.clone());
            // Register the upload in the shared library so the structure
            // editor's "existing files" list can reuse it.
            client
                .uploads()
                .save(&SaveUpload {
                    name: display_name.clone(),
                    file_url: uploaded.file_url.clone(),
                    file_type: uploaded.file_type.clone(),
                    thumbnail_url: thumbnail_url.clone(),
                })
                .await?;
            files
                .create_file(
                    *parent,
                    &display_name,
                    &uploaded.file_type,
                    &uploaded.file_url,
                    thumbnail_url.as_deref(),
                )
                .await?;
            output::print_success(&format!("Uploaded '{display_name}'"));
            show_tree(&files.tree().await?, format);
        }
        FilesCommand::Move { id, onto } => {
            let tree = files.tree().await?;
            let target = find(&tree, *onto)
                .ok_or_else(|| AppError::not_found(format!("No node with id {onto}")))?;
            let new_parent = resolve_move_parent(target.id, target.kind);
            files.move_node(*id, new_parent).await?;
            output::print_success(&format!("Moved node {id}"));
            show_tree(&files.tree().await?, format);
        }
        FilesCommand::Lock { id } => {
            store.toggle_lock(*id).await?;
            let tree = store.fetch().await?;
            match find(&tree, *id) {
                Some(node) if node.is_locked => {
                    output::print_success(&format!("Locked '{}'", node.name))
                }
                Some(node) => output::print_success(&format!("Unlocked '{}'", node.name)),
                None => output::print_warning("Node no longer present after reload"),
            }
        }
        FilesCommand::Rename { id, name } => {
            // Reject locally unknown ids the way the editor does before
            // bothering the backend.
            let tree = files.tree().await?;
            rename_tree(&tree, *id, name)?;
            files.rename(*id, name).await?;
            output::print_success(&format!("Renamed node {id} to '{name}'"));
            show_tree(&files.tree().await?, format);
        }
        FilesCommand::Rm { id, yes } => {
            if !*yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt("Delete this item and its children?")
                    .default(false)
                    .interact()
                    .map_err(tree_ui::prompt_error)?;
                if !confirmed {
                    return Ok(());
                }
            }
            store.remove(*id).await?;
            output::print_success(&format!("Deleted node {id}"));
            show_tree(&store.fetch().await?, format);
        }
        FilesCommand::Reorder { id, direction } => {
            let tree = store.fetch().await?;
            let reordered = reorder(&tree, *id, (*direction).into())?;

            // Optimistic: show the local result; persistence of the sort
            // batch is fire-and-forget.
            let updates = flatten_sort_updates(&reordered);
            if let Err(e) = store.persist_sort(&updates).await {
                tracing::warn!("Sort persistence failed: {e}");
            }
            show_tree(&reordered, format);
        }
    }
    Ok(())
}

fn show_tree(tree: &[Node], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(tree).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => tree_ui::print_tree_expanded(tree),
    }
}
