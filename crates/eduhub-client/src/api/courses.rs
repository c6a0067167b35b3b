//! Course and course-category endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use eduhub_core::types::CourseId;
use eduhub_core::{AppError, AppResult};
use eduhub_entity::course::{Category, Course, CourseDetails, CreateCourse, UpdateCourse};

use crate::client::ApiClient;

/// `/api/course` and `/api/category` surface.
pub struct CoursesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Course endpoints.
    pub fn courses(&self) -> CoursesApi<'_> {
        CoursesApi { client: self }
    }
}

#[derive(Deserialize)]
struct CourseListResponse {
    #[serde(default)]
    courses: Vec<Course>,
}

#[derive(Deserialize)]
struct CategoriesResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Serialize)]
struct CopyRequest<'a> {
    #[serde(rename = "newName")]
    new_name: &'a str,
}

impl CoursesApi<'_> {
    /// All courses.
    pub async fn list(&self) -> AppResult<Vec<Course>> {
        let response: CourseListResponse = self.client.get_json("/api/course/list").await?;
        Ok(response.courses)
    }

    /// Full details of one course.
    pub async fn details(&self, id: CourseId) -> AppResult<CourseDetails> {
        self.client
            .get_json(&format!("/api/course/details/{id}"))
            .await
    }

    /// Create a course. Validated client-side before the request goes out.
    pub async fn create(&self, course: &CreateCourse) -> AppResult<()> {
        course
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client
            .post_envelope("/api/course/create", course, "create course")
            .await
    }

    /// Update a course's scalar fields.
    pub async fn update(&self, id: CourseId, course: &UpdateCourse) -> AppResult<()> {
        course
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client
            .put_envelope(&format!("/api/course/update/{id}"), course, "update course")
            .await
    }

    /// Duplicate a course (structure included) under a new name.
    pub async fn copy(&self, id: CourseId, new_name: &str) -> AppResult<()> {
        self.client
            .post_envelope(
                &format!("/api/course/copy/{id}"),
                &CopyRequest { new_name },
                "copy course",
            )
            .await
    }

    /// All course categories.
    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        let response: CategoriesResponse = self
            .client
            .get_json("/api/category/get-categories")
            .await?;
        if !response.success {
            return Err(AppError::api("Failed to load categories"));
        }
        Ok(response.categories)
    }
}
