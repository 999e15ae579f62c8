//! # Course Request DTO
//!
//! Represents the payload for creating a course under a bootcamp. The
//! parent bootcamp and creating user are never taken from the body: they
//! come from the request path and the authenticated caller, so any
//! caller-supplied values are ignored.

use serde::Deserialize;
use validator::{Validate, ValidationError};

pub const SKILL_LEVELS: [&str; 3] = ["beginner", "intermediate", "advanced"];

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(range(min = 1, message = "weeks must be at least 1"))]
    pub weeks: i32,
    #[validate(range(min = 0.0, message = "tuition must not be negative"))]
    pub tuition: f64,
    #[validate(custom(function = validate_minimum_skill))]
    pub minimum_skill: String,
    #[serde(default)]
    pub scholarship_available: bool,
}

pub fn validate_minimum_skill(value: &str) -> Result<(), ValidationError> {
    if SKILL_LEVELS.contains(&value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("minimum_skill");
        err.message =
            Some("minimum_skill must be one of beginner, intermediate or advanced".into());
        Err(err)
    }
}
