//! Test category entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use eduhub_core::types::TestCategoryId;

/// A test category row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCategory {
    /// Unique category identifier.
    pub id: TestCategoryId,
    /// Category name.
    pub name: String,
    /// Optional icon identifier or URL.
    #[serde(default)]
    pub icon: Option<String>,
    /// Number of tests assigned to this category.
    #[serde(default)]
    pub total_tests: Option<u64>,
}

/// Body of add-category / update-category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TestCategoryForm {
    /// Category name.
    #[validate(length(min = 1, message = "category name is required"))]
    pub name: String,
    /// Optional icon identifier or URL.
    #[serde(default)]
    pub icon: Option<String>,
}
