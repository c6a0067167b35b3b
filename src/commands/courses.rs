//! Course management commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use dialoguer::{Input, Select};
use serde::Serialize;
use tabled::Tabled;

use eduhub_client::ApiClient;
use eduhub_core::error::AppError;
use eduhub_core::types::CourseId;
use eduhub_entity::course::{CreateCourse, Validity};

use crate::output::{self, OutputFormat};
use crate::tree_ui::prompt_error;

/// Arguments for course commands
#[derive(Debug, Args)]
pub struct CoursesArgs {
    /// Course subcommand
    #[command(subcommand)]
    pub command: CoursesCommand,
}

/// Course subcommands
#[derive(Debug, Subcommand)]
pub enum CoursesCommand {
    /// List all courses
    List,
    /// Show one course's details
    Show {
        /// Course ID
        id: CourseId,
    },
    /// Create a course interactively
    Create {
        /// Thumbnail image to upload
        #[arg(short, long)]
        thumbnail: Option<PathBuf>,
    },
    /// Update a course's details
    Update {
        /// Course ID
        id: CourseId,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New price
        #[arg(long)]
        price: Option<f64>,
        /// New discount price
        #[arg(long)]
        discount: Option<f64>,
        /// New short description
        #[arg(long)]
        short_desc: Option<String>,
        /// New long description
        #[arg(long)]
        long_desc: Option<String>,
        /// New thumbnail image to upload
        #[arg(short, long)]
        thumbnail: Option<PathBuf>,
    },
    /// Duplicate a course under a new name
    Copy {
        /// Course ID
        id: CourseId,
        /// Name for the copy
        new_name: String,
    },
    /// List course categories
    Categories,
}

/// Course display row
#[derive(Debug, Serialize, Tabled)]
struct CourseRow {
    /// Course ID
    id: String,
    /// Name
    name: String,
    /// Price
    price: String,
    /// Discounted price
    discount: String,
}

/// Category display row
#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    /// Category ID
    id: String,
    /// Name
    name: String,
}

/// Execute course commands
pub async fn execute(
    args: &CoursesArgs,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let courses = client.courses();

    match &args.command {
        CoursesCommand::List => {
            let list = courses.list().await?;
            let rows: Vec<CourseRow> = list
                .iter()
                .map(|c| CourseRow {
                    id: c.id.to_string(),
                    name: c.name.clone(),
                    price: c
                        .price
                        .map(|p| format!("₹{p}"))
                        .unwrap_or_else(|| "-".to_string()),
                    discount: c
                        .discount_price
                        .map(|p| format!("₹{p}"))
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            output::print_list(&rows, format);
        }
        CoursesCommand::Show { id } => {
            let details = courses.details(*id).await?;
            output::print_item(&details, format);
        }
        CoursesCommand::Create { thumbnail } => {
            let name: String = Input::new()
                .with_prompt("Course name")
                .interact_text()
                .map_err(prompt_error)?;
            let price: f64 = Input::new()
                .with_prompt("Price")
                .default(0.0)
                .interact_text()
                .map_err(prompt_error)?;
            let discount_price: f64 = Input::new()
                .with_prompt("Discount price")
                .default(0.0)
                .interact_text()
                .map_err(prompt_error)?;
            let short_desc: String = Input::new()
                .with_prompt("Short description")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_error)?;
            let long_desc: String = Input::new()
                .with_prompt("Long description")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_error)?;
            let start_date: String = Input::new()
                .with_prompt("Valid from (YYYY-MM-DD)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_error)?;
            let end_date: String = Input::new()
                .with_prompt("Valid until (YYYY-MM-DD)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_error)?;

            let categories = courses.categories().await?;
            let category_id = if categories.is_empty() {
                None
            } else {
                let mut items: Vec<String> =
                    categories.iter().map(|c| c.name.clone()).collect();
                items.push("(none)".to_string());
                let choice = Select::new()
                    .with_prompt("Category")
                    .items(&items)
                    .default(0)
                    .interact()
                    .map_err(prompt_error)?;
                categories.get(choice).map(|c| c.id)
            };

            let thumbnail_url = match thumbnail {
                Some(path) => Some(client.uploads().upload_path(path).await?.file_url),
                None => None,
            };

            courses
                .create(&CreateCourse {
                    name: name.clone(),
                    price,
                    discount_price,
                    validity: Validity {
                        start_date,
                        end_date,
                    },
                    short_desc,
                    long_desc,
                    thumbnail: thumbnail_url,
                    syllabus: Vec::new(),
                    mock_test: Vec::new(),
                    practice_plan: Vec::new(),
                    category_id,
                })
                .await?;
            output::print_success(&format!(
                "Created course '{name}' — use `structure edit` to fill its sections"
            ));
        }
        CoursesCommand::Update {
            id,
            name,
            price,
            discount,
            short_desc,
            long_desc,
            thumbnail,
        } => {
            // Start from the current details; flags override field by field.
            let current = courses.details(*id).await?;
            let thumbnail_url = match thumbnail {
                Some(path) => Some(client.uploads().upload_path(path).await?.file_url),
                None => current.course.thumbnail_url.clone(),
            };
            courses
                .update(
                    *id,
                    &eduhub_entity::course::UpdateCourse {
                        name: name.clone().unwrap_or_else(|| current.course.name.clone()),
                        price: price.or(current.course.price).unwrap_or(0.0),
                        discount_price: discount
                            .or(current.course.discount_price)
                            .unwrap_or(0.0),
                        validity: current.validity.clone().unwrap_or_default(),
                        short_desc: short_desc
                            .clone()
                            .or_else(|| current.course.short_desc.clone())
                            .unwrap_or_default(),
                        long_desc: long_desc
                            .clone()
                            .or_else(|| current.long_desc.clone())
                            .unwrap_or_default(),
                        thumbnail: thumbnail_url,
                        category_id: current.category_id,
                    },
                )
                .await?;
            output::print_success(&format!("Course {id} updated"));
        }
        CoursesCommand::Copy { id, new_name } => {
            courses.copy(*id, new_name).await?;
            output::print_success(&format!("Copied course {id} as '{new_name}'"));
        }
        CoursesCommand::Categories => {
            let categories = courses.categories().await?;
            let rows: Vec<CategoryRow> = categories
                .iter()
                .map(|c| CategoryRow {
                    id: c.id.to_string(),
                    name: c.name.clone(),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
