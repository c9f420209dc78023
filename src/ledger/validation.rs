use std::fmt;

use thiserror::Error;

/// Longest accepted description, counted in characters after trimming.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// A single reason a description/amount pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Transaction description is required")]
    MissingDescription,
    #[error("Transaction description cannot exceed 100 characters")]
    DescriptionTooLong,
    #[error("Transaction amount must be a positive number")]
    InvalidAmount,
}

/// Outcome of [`validate`]; every applicable error is collected, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    errors: Vec<ValidationError>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn first(&self) -> Option<ValidationError> {
        self.errors.first().copied()
    }

    pub fn into_result(self) -> Result<(), Validation> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first() {
            Some(first) => write!(f, "{first}"),
            None => f.write_str("valid"),
        }
    }
}

impl std::error::Error for Validation {}

/// Checks a description/amount pair without touching any ledger.
pub fn validate(description: &str, amount: f64) -> Validation {
    let mut errors = Vec::new();
    let trimmed = description.trim();

    if trimmed.is_empty() {
        errors.push(ValidationError::MissingDescription);
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        errors.push(ValidationError::DescriptionTooLong);
    }
    if !amount.is_finite() || amount < 0.0 {
        errors.push(ValidationError::InvalidAmount);
    }

    Validation { errors }
}
