use serde::Serialize;
use thiserror::Error;

/// One failed validation rule, addressed by field name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub msg: String,
}

impl FieldError {
    pub fn new(field: &'static str, msg: impl Into<String>) -> Self {
        Self { field, msg: msg.into() }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {}", .0.iter().map(|e| e.msg.as_str()).collect::<Vec<_>>().join("; "))]
    Validation(Vec<FieldError>),
    #[error("food truck with locationid {0} not found")]
    NotFound(i64),
    #[error("food truck with locationid {0} already exists")]
    Conflict(i64),
    #[error("dataset error: {0}")]
    Dataset(String),
}

impl ServiceError {
    pub fn single(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, msg)])
    }
}
