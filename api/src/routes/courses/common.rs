//! Shared request DTOs for the `/courses` route group.

use serde::Deserialize;
use validator::Validate;

use crate::routes::bootcamps::courses::common::validate_minimum_skill;

/// Partial update payload: absent fields keep their current values.
/// Ownership fields (`bootcamp_id`, `user_id`) are not part of the
/// contract and cannot be changed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    #[validate(range(min = 1, message = "weeks must be at least 1"))]
    pub weeks: Option<i32>,
    #[validate(range(min = 0.0, message = "tuition must not be negative"))]
    pub tuition: Option<f64>,
    #[validate(custom(function = validate_minimum_skill))]
    pub minimum_skill: Option<String>,
    pub scholarship_available: Option<bool>,
}
