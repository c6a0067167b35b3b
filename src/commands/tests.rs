//! Test-management commands.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use dialoguer::Input;
use serde::Serialize;
use tabled::Tabled;

use eduhub_client::{ApiClient, RequestSequence};
use eduhub_core::error::AppError;
use eduhub_core::types::{CourseId, PageRequest, TestCategoryId, TestId};
use eduhub_entity::test::{CreateTest, Question, TestCategoryForm, UpdateTest};

use crate::output::{self, OutputFormat};
use crate::tree_ui::prompt_error;

/// Arguments for test commands
#[derive(Debug, Args)]
pub struct TestsArgs {
    /// Test subcommand
    #[command(subcommand)]
    pub command: TestsCommand,
}

/// Test subcommands
#[derive(Debug, Subcommand)]
pub enum TestsCommand {
    /// List tests
    List {
        /// Name filter
        #[arg(short, long, default_value = "")]
        search: String,
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u64,
        /// Page size
        #[arg(short, long, default_value = "8")]
        limit: u64,
    },
    /// Search tests interactively (type, see results, repeat)
    Search,
    /// Show one test with its question bank
    Show {
        /// Test ID
        id: TestId,
    },
    /// Create a test from a questions file
    Add {
        /// Owning course ID
        #[arg(short, long)]
        course: CourseId,
        /// JSON file holding the question array
        #[arg(short, long)]
        questions: PathBuf,
        /// Thumbnail image to upload
        #[arg(short, long)]
        thumbnail: PathBuf,
        /// Candidate-facing instructions
        #[arg(short, long, default_value = "")]
        instructions: String,
        /// Time limit in minutes
        #[arg(long, default_value = "60")]
        test_time: u32,
        /// Per-question time limit in seconds (0 = none)
        #[arg(long, default_value = "0")]
        question_time: u32,
    },
    /// Replace a test's question bank from a file
    Edit {
        /// Test ID
        id: TestId,
        /// JSON file holding the replacement question array
        #[arg(short, long)]
        questions: PathBuf,
        /// New thumbnail image
        #[arg(short, long)]
        thumbnail: Option<PathBuf>,
        /// New instructions
        #[arg(short, long)]
        instructions: Option<String>,
    },
    /// Delete a test
    Delete {
        /// Test ID
        id: TestId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Compact listing used by pickers
    Picker,
    /// Test category management
    Categories {
        /// Category subcommand
        #[command(subcommand)]
        command: CategoriesCommand,
    },
}

/// Test-category subcommands
#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List test categories
    List,
    /// Add a category
    Add {
        /// Category name
        name: String,
        /// Icon identifier or URL
        #[arg(short, long)]
        icon: Option<String>,
    },
    /// Update a category
    Update {
        /// Category ID
        id: TestCategoryId,
        /// New name
        name: String,
        /// New icon
        #[arg(short, long)]
        icon: Option<String>,
    },
    /// Delete a category
    Delete {
        /// Category ID
        id: TestCategoryId,
    },
}

/// Test display row
#[derive(Debug, Serialize, Tabled)]
struct TestRow {
    /// Test ID
    id: String,
    /// Name
    name: String,
    /// Question count
    questions: String,
}

/// Category display row
#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    /// Category ID
    id: String,
    /// Name
    name: String,
    /// Assigned tests
    tests: String,
}

/// Execute test commands
pub async fn execute(
    args: &TestsArgs,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let tests = client.tests();

    match &args.command {
        TestsCommand::List {
            search,
            page,
            limit,
        } => {
            let results = tests.list(search, &PageRequest::new(*page, *limit)).await?;
            print_tests(&results.items, format);
            println!("Page {} of {}", results.page, results.total_pages);
        }
        TestsCommand::Search => {
            // Overlapping queries race; the sequence guard makes the
            // latest-issued query the only one whose results render.
            let guard = RequestSequence::new();
            loop {
                let query: String = Input::new()
                    .with_prompt("Search (empty to quit)")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(prompt_error)?;
                if query.is_empty() {
                    break;
                }
                let seq = guard.begin();
                let results = tests.list(&query, &PageRequest::default()).await?;
                if guard.accept(seq) {
                    print_tests(&results.items, format);
                }
            }
        }
        TestsCommand::Show { id } => {
            let details = tests.details(*id).await?;
            output::print_item(&details, format);
        }
        TestsCommand::Add {
            course,
            questions,
            thumbnail,
            instructions,
            test_time,
            question_time,
        } => {
            let bank = read_questions(questions)?;
            let uploaded = client.uploads().upload_path(thumbnail).await?;
            tests
                .create(&CreateTest {
                    course_id: *course,
                    thumbnail_url: uploaded.file_url,
                    instructions: instructions.clone(),
                    test_time: *test_time,
                    question_time: *question_time,
                    questions: bank,
                })
                .await?;
            output::print_success("Test created");
        }
        TestsCommand::Edit {
            id,
            questions,
            thumbnail,
            instructions,
        } => {
            let bank = read_questions(questions)?;
            let current = tests.details(*id).await?;
            let thumbnail_url = match thumbnail {
                Some(path) => Some(client.uploads().upload_path(path).await?.file_url),
                None => current.thumbnail,
            };
            tests
                .update(
                    *id,
                    &UpdateTest {
                        course_id: current.course_id,
                        thumbnail_url,
                        instructions: instructions.clone().or(current.instructions),
                        questions: bank,
                    },
                )
                .await?;
            output::print_success(&format!("Test {id} updated"));
        }
        TestsCommand::Delete { id, yes } => {
            if !*yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt("Are you sure you want to delete this test?")
                    .default(false)
                    .interact()
                    .map_err(prompt_error)?;
                if !confirmed {
                    return Ok(());
                }
            }
            tests.delete(*id).await?;
            output::print_success(&format!("Test {id} deleted"));
        }
        TestsCommand::Picker => {
            let summaries = tests.picker().await?;
            print_tests(&summaries, format);
        }
        TestsCommand::Categories { command } => match command {
            CategoriesCommand::List => {
                let categories = tests.categories().await?;
                let rows: Vec<CategoryRow> = categories
                    .iter()
                    .map(|c| CategoryRow {
                        id: c.id.to_string(),
                        name: c.name.clone(),
                        tests: c
                            .total_tests
                            .map(|n| n.to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    })
                    .collect();
                output::print_list(&rows, format);
            }
            CategoriesCommand::Add { name, icon } => {
                tests
                    .add_category(&TestCategoryForm {
                        name: name.clone(),
                        icon: icon.clone(),
                    })
                    .await?;
                output::print_success(&format!("Category '{name}' added"));
            }
            CategoriesCommand::Update { id, name, icon } => {
                tests
                    .update_category(
                        *id,
                        &TestCategoryForm {
                            name: name.clone(),
                            icon: icon.clone(),
                        },
                    )
                    .await?;
                output::print_success(&format!("Category {id} updated"));
            }
            CategoriesCommand::Delete { id } => {
                tests.delete_category(*id).await?;
                output::print_success(&format!("Category {id} deleted"));
            }
        },
    }
    Ok(())
}

fn print_tests(items: &[eduhub_entity::test::TestSummary], format: OutputFormat) {
    let rows: Vec<TestRow> = items
        .iter()
        .map(|t| TestRow {
            id: t.id.to_string(),
            name: t.name.clone().unwrap_or_else(|| "-".to_string()),
            questions: t
                .question_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    output::print_list(&rows, format);
}

fn read_questions(path: &Path) -> Result<Vec<Question>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::validation(format!("Bad questions file {}: {e}", path.display()))
    })
}
