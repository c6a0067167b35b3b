//! Course category entity.

use serde::{Deserialize, Serialize};

use eduhub_core::types::CategoryId;

/// A course category row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Optional icon identifier or URL.
    #[serde(default)]
    pub icon: Option<String>,
}
