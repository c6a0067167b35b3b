//! The interactive course-structure editor.
//!
//! Renames stay local until Save All, deletes prune locally after the
//! backend call, lock toggles and folder/file creation reload the whole
//! structure, and reorders apply optimistically with a fire-and-forget
//! sort batch.

use std::path::Path;

use clap::{Args, Subcommand};
use dialoguer::{Confirm, Input, Select};

use eduhub_client::api::SectionTreeStore;
use eduhub_client::{ApiClient, TreeStore};
use eduhub_core::error::AppError;
use eduhub_core::types::{CourseId, SortDirection};
use eduhub_entity::node::{NodeKind, SectionKind};
use eduhub_entity::upload::VideoChapter;
use eduhub_tree::{find, flatten_sort_updates, remove, rename, reorder};

use crate::output::{self, OutputFormat};
use crate::tree_ui::{self, prompt_error};

/// Arguments for course-structure commands
#[derive(Debug, Args)]
pub struct StructureArgs {
    /// Course-structure subcommand
    #[command(subcommand)]
    pub command: StructureCommand,
}

/// Course-structure subcommands
#[derive(Debug, Subcommand)]
pub enum StructureCommand {
    /// Print a course's section forests
    Show {
        /// Course ID
        course_id: CourseId,
        /// Only this section (syllabus, mock, practice)
        #[arg(short, long)]
        section: Option<SectionKind>,
    },
    /// Edit a course's structure interactively
    Edit {
        /// Course ID
        course_id: CourseId,
    },
}

/// Execute course-structure commands
pub async fn execute(
    args: &StructureArgs,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        StructureCommand::Show { course_id, section } => {
            match section {
                Some(kind) => {
                    // A single section reads through the tree-store seam.
                    let store = SectionTreeStore::new(client, *course_id, *kind);
                    let forest = store.fetch().await?;
                    match format {
                        OutputFormat::Json => output::print_item(&forest, format),
                        OutputFormat::Table => {
                            println!("[{kind}]");
                            tree_ui::print_tree_expanded(&forest);
                        }
                    }
                }
                None => {
                    let sections = client.structure().sections(*course_id).await?;
                    match format {
                        OutputFormat::Json => output::print_item(&sections, format),
                        OutputFormat::Table => {
                            for kind in SectionKind::ALL {
                                println!("[{kind}]");
                                tree_ui::print_tree_expanded(sections.get(kind));
                                println!();
                            }
                        }
                    }
                }
            }
            Ok(())
        }
        StructureCommand::Edit { course_id } => edit(*course_id, client).await,
    }
}

const ACTIONS: &[&str] = &[
    "Switch section",
    "Rename (staged until Save All)",
    "Delete",
    "Lock/unlock",
    "Move up",
    "Move down",
    "Create folder",
    "Upload file",
    "Add from file manager",
    "Change thumbnail",
    "Replace file",
    "Save All",
    "Reload",
    "Quit",
];

async fn edit(course_id: CourseId, client: &ApiClient) -> Result<(), AppError> {
    let structure = client.structure();
    let mut sections = structure.sections(course_id).await?;
    let mut tab = SectionKind::Syllabus;

    loop {
        println!("\n[{tab}]");
        tree_ui::print_tree_expanded(sections.get(tab));

        let action = Select::new()
            .with_prompt("Action")
            .items(ACTIONS)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        let result: Result<(), AppError> = match action {
            0 => {
                let items: Vec<String> =
                    SectionKind::ALL.iter().map(|k| k.to_string()).collect();
                let choice = Select::new()
                    .with_prompt("Section")
                    .items(&items)
                    .default(0)
                    .interact()
                    .map_err(prompt_error)?;
                tab = SectionKind::ALL[choice];
                Ok(())
            }
            1 => {
                // Rename: local only; Save All pushes it.
                match tree_ui::pick_node(sections.get(tab), "Rename which node?")? {
                    None => Ok(()),
                    Some(id) => {
                        let new_name: String = Input::new()
                            .with_prompt("New name")
                            .interact_text()
                            .map_err(prompt_error)?;
                        let updated = rename(sections.get(tab), id, &new_name)?;
                        sections.set(tab, updated);
                        Ok(())
                    }
                }
            }
            2 => {
                match tree_ui::pick_node(sections.get(tab), "Delete which node?")? {
                    None => Ok(()),
                    Some(id) => {
                        let confirmed = Confirm::new()
                            .with_prompt("Delete this file/folder and its children?")
                            .default(false)
                            .interact()
                            .map_err(prompt_error)?;
                        if confirmed {
                            structure.delete_node(id).await?;
                            sections.set(tab, remove(sections.get(tab), id));
                        }
                        Ok(())
                    }
                }
            }
            3 => {
                match tree_ui::pick_node(sections.get(tab), "Lock/unlock which node?")? {
                    None => Ok(()),
                    Some(id) => {
                        structure.toggle_lock(id).await?;
                        sections = structure.sections(course_id).await?;
                        Ok(())
                    }
                }
            }
            4 | 5 => {
                let direction = if action == 4 {
                    SortDirection::Up
                } else {
                    SortDirection::Down
                };
                match tree_ui::pick_node(sections.get(tab), "Move which node?")? {
                    None => Ok(()),
                    Some(id) => match reorder(sections.get(tab), id, direction) {
                        Ok(updated) => {
                            let updates = flatten_sort_updates(&updated);
                            sections.set(tab, updated);
                            // Fire-and-forget; a failed sort batch is only
                            // logged and the optimistic order stands.
                            if let Err(e) = structure.persist_sort(&updates).await {
                                tracing::warn!("Sort persistence failed: {e}");
                            }
                            Ok(())
                        }
                        Err(e) => Err(e),
                    },
                }
            }
            6 => {
                let name: String = Input::new()
                    .with_prompt("Folder name")
                    .interact_text()
                    .map_err(prompt_error)?;
                let parent = folder_parent(sections.get(tab), "Parent folder?")?;
                structure
                    .create_folder(course_id, tab, &name, parent)
                    .await?;
                sections = structure.sections(course_id).await?;
                Ok(())
            }
            7 => {
                let outcome = upload_file(course_id, tab, client, &sections).await;
                if outcome.is_ok() {
                    sections = structure.sections(course_id).await?;
                }
                outcome
            }
            8 => {
                let outcome = add_from_file_manager(course_id, tab, client, &sections).await;
                sections = structure.sections(course_id).await?;
                outcome
            }
            9 => {
                match pick_file(sections.get(tab), "Change whose thumbnail?")? {
                    None => Ok(()),
                    Some(id) => {
                        let path: String = Input::new()
                            .with_prompt("Thumbnail image path")
                            .interact_text()
                            .map_err(prompt_error)?;
                        let uploaded =
                            client.uploads().upload_path(Path::new(&path)).await?;
                        structure.set_thumbnail(id, &uploaded.file_url).await?;
                        sections = structure.sections(course_id).await?;
                        Ok(())
                    }
                }
            }
            10 => {
                match pick_file(sections.get(tab), "Replace which file?")? {
                    None => Ok(()),
                    Some(id) => {
                        let path: String = Input::new()
                            .with_prompt("Replacement file path")
                            .interact_text()
                            .map_err(prompt_error)?;
                        let uploaded =
                            client.uploads().upload_path(Path::new(&path)).await?;
                        structure
                            .replace_file(id, &uploaded.file_url, &uploaded.file_type)
                            .await?;
                        sections = structure.sections(course_id).await?;
                        Ok(())
                    }
                }
            }
            11 => {
                structure.save_all(course_id, &sections).await?;
                output::print_success("Saved");
                Ok(())
            }
            12 => {
                sections = structure.sections(course_id).await?;
                Ok(())
            }
            _ => return Ok(()),
        };

        // Per-action failures surface here and the editor keeps running;
        // already-applied local changes are not rolled back.
        if let Err(e) = result {
            output::print_error(&e.to_string());
        }
    }
}

/// Pick a folder to act as parent; picking a file (or nothing) targets the
/// root, the same resolution the drag-and-drop move uses.
fn folder_parent(
    forest: &[eduhub_entity::node::Node],
    prompt: &str,
) -> Result<Option<eduhub_core::types::NodeId>, AppError> {
    match tree_ui::pick_node(forest, prompt)? {
        None => Ok(None),
        Some(id) => Ok(find(forest, id)
            .filter(|node| node.kind == NodeKind::Folder)
            .map(|node| node.id)),
    }
}

/// Pick a node that must be a file.
fn pick_file(
    forest: &[eduhub_entity::node::Node],
    prompt: &str,
) -> Result<Option<eduhub_core::types::NodeId>, AppError> {
    match tree_ui::pick_node(forest, prompt)? {
        None => Ok(None),
        Some(id) => match find(forest, id) {
            Some(node) if node.is_file() => Ok(Some(id)),
            Some(_) => Err(AppError::validation("Select a file")),
            None => Ok(None),
        },
    }
}

async fn upload_file(
    course_id: CourseId,
    tab: SectionKind,
    client: &ApiClient,
    sections: &eduhub_entity::node::SectionSet,
) -> Result<(), AppError> {
    let parent = folder_parent(sections.get(tab), "Upload into which folder?")?;
    if parent.is_none() {
        return Err(AppError::validation("Select a folder first"));
    }

    let name: String = Input::new()
        .with_prompt("Display name")
        .interact_text()
        .map_err(prompt_error)?;
    if name.trim().is_empty() {
        return Err(AppError::validation("Enter a file name"));
    }

    let kinds = ["pdf", "video", "audio"];
    let kind_choice = Select::new()
        .with_prompt("File type")
        .items(&kinds)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    let file_type = kinds[kind_choice];

    // Reuse from the shared library, or upload fresh.
    let existing = client.uploads().existing().await.unwrap_or_default();
    let mut source_items: Vec<String> = existing
        .iter()
        .map(|f| {
            format!(
                "{} ({})",
                f.name,
                f.file_type.as_deref().unwrap_or("unknown")
            )
        })
        .collect();
    source_items.push("(upload a new file)".to_string());
    let source_choice = Select::new()
        .with_prompt("Source")
        .items(&source_items)
        .default(source_items.len() - 1)
        .interact()
        .map_err(prompt_error)?;

    let (file_url, thumbnail_url) = if let Some(library_file) = existing.get(source_choice) {
        (
            library_file.file_url.clone(),
            library_file.thumbnail_url.clone(),
        )
    } else {
        let path: String = Input::new()
            .with_prompt("File path")
            .interact_text()
            .map_err(prompt_error)?;
        let uploaded = client.uploads().upload_path(Path::new(&path)).await?;
        let thumb_path: String = Input::new()
            .with_prompt("Thumbnail path (empty for none)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        let thumbnail = if thumb_path.trim().is_empty() {
            None
        } else {
            Some(client.uploads().upload_path(Path::new(&thumb_path)).await?.file_url)
        };
        (Some(uploaded.file_url), thumbnail)
    };

    let chapters = if file_type == "video" {
        let entered = prompt_chapters()?;
        let labelled: Vec<VideoChapter> = entered
            .into_iter()
            .filter(VideoChapter::is_labelled)
            .collect();
        if labelled.is_empty() { None } else { Some(labelled) }
    } else {
        None
    };

    client
        .structure()
        .upload_file(
            course_id,
            tab,
            parent,
            &name,
            file_url.as_deref(),
            file_type,
            thumbnail_url.as_deref(),
            chapters.as_deref(),
        )
        .await
}

fn prompt_chapters() -> Result<Vec<VideoChapter>, AppError> {
    let mut chapters = Vec::new();
    loop {
        let label: String = Input::new()
            .with_prompt("Chapter label (empty to finish)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        if label.trim().is_empty() {
            break;
        }
        let start: String = Input::new()
            .with_prompt("Start")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        let end: String = Input::new()
            .with_prompt("End")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        chapters.push(VideoChapter { label, start, end });
    }
    Ok(chapters)
}

async fn add_from_file_manager(
    course_id: CourseId,
    tab: SectionKind,
    client: &ApiClient,
    sections: &eduhub_entity::node::SectionSet,
) -> Result<(), AppError> {
    let fm_tree = client.files().tree().await?;
    let picked = tree_ui::run_picker(fm_tree, "Select from File Manager")?;
    if picked.is_empty() {
        return Ok(());
    }

    let parent = folder_parent(sections.get(tab), "Add inside which folder?")?;

    // One call per picked node; the first failure abandons the rest of the
    // batch and nothing already imported is rolled back.
    for node in &picked {
        client
            .structure()
            .add_from_library(course_id, tab, node.id, parent)
            .await?;
    }
    output::print_success(&format!("Imported {} item(s)", picked.len()));
    Ok(())
}
