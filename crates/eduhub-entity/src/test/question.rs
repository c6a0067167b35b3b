//! Question entity for the test question bank.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single four-option question.
///
/// Option text and the optional per-field illustration URLs mirror the
/// backend's columns; `correctAnswer` is the letter `A`-`D`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Question {
    /// Question text.
    #[validate(length(min = 1, message = "question text must not be empty"))]
    pub question: String,
    /// Illustration for the question text.
    #[serde(default)]
    pub question_image: Option<String>,
    /// Option A text.
    #[serde(rename = "optionA")]
    pub option_a: String,
    /// Illustration for option A.
    #[serde(default, rename = "optionA_image")]
    pub option_a_image: Option<String>,
    /// Option B text.
    #[serde(rename = "optionB")]
    pub option_b: String,
    /// Illustration for option B.
    #[serde(default, rename = "optionB_image")]
    pub option_b_image: Option<String>,
    /// Option C text.
    #[serde(rename = "optionC")]
    pub option_c: String,
    /// Illustration for option C.
    #[serde(default, rename = "optionC_image")]
    pub option_c_image: Option<String>,
    /// Option D text.
    #[serde(rename = "optionD")]
    pub option_d: String,
    /// Illustration for option D.
    #[serde(default, rename = "optionD_image")]
    pub option_d_image: Option<String>,
    /// The correct option letter.
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    /// Marks awarded for a correct answer.
    #[serde(default = "default_positive_marks", rename = "positiveMarks")]
    pub positive_marks: f64,
    /// Marks deducted for a wrong answer.
    #[serde(default, rename = "negativeMarks")]
    pub negative_marks: f64,
}

fn default_positive_marks() -> f64 {
    1.0
}

impl Question {
    /// Whether the recorded answer names one of the four options.
    pub fn has_valid_answer(&self) -> bool {
        matches!(
            self.correct_answer.trim().to_ascii_uppercase().as_str(),
            "A" | "B" | "C" | "D"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_and_defaults() {
        let raw = r#"{"question":"2+2?","optionA":"3","optionB":"4",
                      "optionC":"5","optionD":"6","correctAnswer":"b"}"#;
        let q: Question = serde_json::from_str(raw).unwrap();
        assert_eq!(q.positive_marks, 1.0);
        assert_eq!(q.negative_marks, 0.0);
        assert!(q.has_valid_answer());
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"optionA\""));
        assert!(json.contains("\"correctAnswer\""));
    }

    #[test]
    fn test_invalid_answer_letter_detected() {
        let raw = r#"{"question":"?","optionA":"1","optionB":"2",
                      "optionC":"3","optionD":"4","correctAnswer":"E"}"#;
        let q: Question = serde_json::from_str(raw).unwrap();
        assert!(!q.has_valid_answer());
    }
}
