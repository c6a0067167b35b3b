//! Test-management and test-category endpoints.

use serde::Deserialize;
use validator::Validate;

use eduhub_core::types::{PageRequest, Paginated, TestCategoryId, TestId};
use eduhub_core::{AppError, AppResult};
use eduhub_entity::test::{
    CreateTest, Question, TestCategory, TestCategoryForm, TestDetails, TestSummary, UpdateTest,
};

use crate::client::ApiClient;

/// `/api/test` and `/api/test-category` surface.
pub struct TestsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Test-management endpoints.
    pub fn tests(&self) -> TestsApi<'_> {
        TestsApi { client: self }
    }
}

#[derive(Deserialize)]
struct PaginationInfo {
    #[serde(default, rename = "totalPages")]
    total_pages: Option<u64>,
}

#[derive(Deserialize)]
struct TestListResponse {
    #[serde(default)]
    data: Vec<TestSummary>,
    #[serde(default)]
    pagination: Option<PaginationInfo>,
}

#[derive(Deserialize)]
struct PickerResponse {
    #[serde(default)]
    data: Vec<TestSummary>,
}

#[derive(Deserialize)]
struct TestCategoriesResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    categories: Vec<TestCategory>,
}

impl TestsApi<'_> {
    /// One page of tests matching a search query.
    ///
    /// Call sites that fire this repeatedly (search-as-you-type) must gate
    /// application of the result with a
    /// [`RequestSequence`](crate::RequestSequence) — responses can arrive
    /// out of order.
    pub async fn list(
        &self,
        search: &str,
        page: &PageRequest,
    ) -> AppResult<Paginated<TestSummary>> {
        let response: TestListResponse = self
            .client
            .get_json_query(
                "/api/test/list",
                &[
                    ("search", search.to_string()),
                    ("page", page.page.to_string()),
                    ("limit", page.limit.to_string()),
                ],
            )
            .await?;
        let total_pages = response
            .pagination
            .and_then(|p| p.total_pages)
            .unwrap_or(1);
        Ok(Paginated::new(response.data, page.page, total_pages))
    }

    /// Full test details including the question bank.
    pub async fn details(&self, id: TestId) -> AppResult<TestDetails> {
        self.client.get_json(&format!("/api/test/{id}")).await
    }

    /// Create a test. The question bank is validated client-side first.
    pub async fn create(&self, test: &CreateTest) -> AppResult<()> {
        test.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        validate_questions(&test.questions)?;
        self.client
            .post_envelope("/api/test/create", test, "create test")
            .await
    }

    /// Replace a test's details and question bank.
    pub async fn update(&self, id: TestId, test: &UpdateTest) -> AppResult<()> {
        validate_questions(&test.questions)?;
        self.client
            .put_envelope(&format!("/api/test/{id}"), test, "update test")
            .await
    }

    /// Delete a test.
    pub async fn delete(&self, id: TestId) -> AppResult<()> {
        self.client.delete_ok(&format!("/api/test/{id}")).await
    }

    /// The compact list used by the test picker.
    pub async fn picker(&self) -> AppResult<Vec<TestSummary>> {
        let response: PickerResponse = self.client.get_json("/api/test/picker").await?;
        Ok(response.data)
    }

    /// All test categories.
    pub async fn categories(&self) -> AppResult<Vec<TestCategory>> {
        let response: TestCategoriesResponse = self
            .client
            .get_json("/api/test-category/get-categories")
            .await?;
        if !response.success {
            return Err(AppError::api("Failed to load test categories"));
        }
        Ok(response.categories)
    }

    /// Add a test category.
    pub async fn add_category(&self, form: &TestCategoryForm) -> AppResult<()> {
        form.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client
            .post_envelope("/api/test-category/add-category", form, "add category")
            .await
    }

    /// Update a test category.
    pub async fn update_category(
        &self,
        id: TestCategoryId,
        form: &TestCategoryForm,
    ) -> AppResult<()> {
        form.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client
            .put_envelope(
                &format!("/api/test-category/update-category/{id}"),
                form,
                "update category",
            )
            .await
    }

    /// Delete a test category.
    pub async fn delete_category(&self, id: TestCategoryId) -> AppResult<()> {
        self.client
            .delete_ok(&format!("/api/test-category/delete-category/{id}"))
            .await
    }
}

fn validate_questions(questions: &[Question]) -> AppResult<()> {
    for (index, question) in questions.iter().enumerate() {
        question
            .validate()
            .map_err(|e| AppError::validation(format!("Question {}: {e}", index + 1)))?;
        if !question.has_valid_answer() {
            return Err(AppError::validation(format!(
                "Question {}: correct answer must be one of A, B, C, D",
                index + 1
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_validation_reports_position() {
        let mut q: Question = serde_json::from_str(
            r#"{"question":"?","optionA":"1","optionB":"2",
                "optionC":"3","optionD":"4","correctAnswer":"A"}"#,
        )
        .unwrap();
        q.correct_answer = "X".into();
        let err = validate_questions(&[q]).unwrap_err();
        assert!(err.message.contains("Question 1"));
    }
}
