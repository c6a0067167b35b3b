//! Course entity models.
//!
//! The backend returns snake_case list rows but expects camelCase bodies
//! on create/update; both shapes are kept verbatim.

use serde::{Deserialize, Serialize};
use validator::Validate;

use eduhub_core::types::{CategoryId, CourseId};

use crate::node::Node;

/// A course as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: CourseId,
    /// Course name.
    pub name: String,
    /// Short description shown on cards.
    #[serde(default, rename = "shortDesc")]
    pub short_desc: Option<String>,
    /// Full price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Discounted price, when a discount is active.
    #[serde(default, rename = "discountPrice")]
    pub discount_price: Option<f64>,
    /// Card thumbnail URL.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl Course {
    /// The price a buyer would currently pay.
    pub fn effective_price(&self) -> Option<f64> {
        self.discount_price.or(self.price)
    }
}

/// Full course details for the edit flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDetails {
    /// The course row.
    #[serde(flatten)]
    pub course: Course,
    /// Long description.
    #[serde(default, rename = "longDesc")]
    pub long_desc: Option<String>,
    /// Validity window.
    #[serde(default)]
    pub validity: Option<Validity>,
    /// Category assignment.
    #[serde(default, rename = "categoryId")]
    pub category_id: Option<CategoryId>,
}

/// Sale validity window, both bounds as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Validity {
    /// First day the course is on sale.
    #[serde(default, rename = "startDate")]
    pub start_date: String,
    /// Last day the course is on sale.
    #[serde(default, rename = "endDate")]
    pub end_date: String,
}

/// Body of `POST /api/course/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCourse {
    /// Course name.
    #[validate(length(min = 1, message = "course name must not be empty"))]
    pub name: String,
    /// Full price.
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Discounted price.
    #[serde(rename = "discountPrice")]
    #[validate(range(min = 0.0))]
    pub discount_price: f64,
    /// Validity window.
    pub validity: Validity,
    /// Short description.
    #[serde(rename = "shortDesc")]
    pub short_desc: String,
    /// Long description.
    #[serde(rename = "longDesc")]
    pub long_desc: String,
    /// Thumbnail URL from the presigned upload, if one was provided.
    pub thumbnail: Option<String>,
    /// Initial syllabus forest.
    pub syllabus: Vec<Node>,
    /// Initial mock-test forest.
    #[serde(rename = "mockTest")]
    pub mock_test: Vec<Node>,
    /// Initial practice forest.
    #[serde(rename = "practicePlan")]
    pub practice_plan: Vec<Node>,
    /// Category assignment.
    #[serde(rename = "categoryId")]
    pub category_id: Option<CategoryId>,
}

/// Body of `PUT /api/course/update/:id`. Only the scalar fields; section
/// forests are edited through the course-structure endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCourse {
    /// Course name.
    #[validate(length(min = 1, message = "course name must not be empty"))]
    pub name: String,
    /// Full price.
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Discounted price.
    #[serde(rename = "discountPrice")]
    #[validate(range(min = 0.0))]
    pub discount_price: f64,
    /// Validity window.
    pub validity: Validity,
    /// Short description.
    #[serde(rename = "shortDesc")]
    pub short_desc: String,
    /// Long description.
    #[serde(rename = "longDesc")]
    pub long_desc: String,
    /// Thumbnail URL.
    pub thumbnail: Option<String>,
    /// Category assignment.
    #[serde(rename = "categoryId")]
    pub category_id: Option<CategoryId>,
}
