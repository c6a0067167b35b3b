//! Test entity models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use eduhub_core::types::{CourseId, TestId};

use super::question::Question;

/// A test as returned by the list and picker endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSummary {
    /// Unique test identifier.
    pub id: TestId,
    /// Test name.
    #[serde(default)]
    pub name: Option<String>,
    /// Card thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Number of questions in the bank.
    #[serde(default)]
    pub question_count: Option<u64>,
}

/// Full test details for the edit flow (`GET /api/test/:id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestDetails {
    /// Owning course.
    pub course_id: CourseId,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Candidate-facing instructions (may contain markup).
    #[serde(default)]
    pub instructions: Option<String>,
    /// The question bank.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Body of `POST /api/test/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTest {
    /// Owning course.
    #[serde(rename = "courseId")]
    pub course_id: CourseId,
    /// Thumbnail URL from the presigned upload.
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: String,
    /// Candidate-facing instructions.
    pub instructions: String,
    /// Overall time limit in minutes.
    #[serde(rename = "testTime")]
    #[validate(range(min = 1))]
    pub test_time: u32,
    /// Optional per-question time limit in seconds (0 = none).
    #[serde(rename = "questionTime")]
    pub question_time: u32,
    /// The question bank.
    #[validate(length(min = 1, message = "a test needs at least one question"))]
    pub questions: Vec<Question>,
}

/// Body of `PUT /api/test/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTest {
    /// Owning course.
    #[serde(rename = "courseId")]
    pub course_id: CourseId,
    /// Thumbnail URL.
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
    /// Candidate-facing instructions.
    pub instructions: Option<String>,
    /// The full replacement question bank.
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_wire_names() {
        let body = CreateTest {
            course_id: CourseId::new(3),
            thumbnail_url: "https://cdn.example.com/t.png".into(),
            instructions: String::new(),
            test_time: 60,
            question_time: 0,
            questions: vec![],
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"courseId\":3"));
        assert!(json.contains("\"testTime\":60"));
    }
}
