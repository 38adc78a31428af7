//! Rule checks shared by the Create/Update schemas.
//!
//! Schemas implement [`Validate`] by feeding their fields through a
//! [`Violations`] collector, so a single response reports every bad field.

use crate::errors::{FieldViolation, ModelError};

pub const NAME_MAX_LEN: usize = 128;
pub const EMAIL_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 1024;

/// Implemented by every input schema accepted over HTTP.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    /// Non-blank and at most `max` characters.
    pub fn name(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, "must not be blank");
        } else if value.chars().count() > max {
            self.push(field, format!("must be at most {max} characters"));
        }
        self
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        let trimmed = value.trim();
        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
                if trimmed.chars().count() > EMAIL_MAX_LEN {
                    self.push(field, format!("must be at most {EMAIL_MAX_LEN} characters"));
                }
            }
            _ => self.push(field, "must be a valid email address"),
        }
        self
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.push(field, format!("must be at most {max} characters"));
        }
        self
    }

    /// Foreign keys must reference a real row, which can never have id <= 0.
    pub fn reference(&mut self, field: &str, id: i32) -> &mut Self {
        if id <= 0 {
            self.push(field, "must be a positive id");
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ModelError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Validation(std::mem::take(&mut self.0)))
        }
    }
}
