//! CLI error handling with user-friendly messages.
//!
//! Centralizes the failure paths: validation, HTTP client construction,
//! and races that end without a usable record. Every variant's message is
//! the diagnostic shown on stderr before the process exits non-zero.

use std::process;

use thiserror::Error;

use ceprace::{AdapterError, ValidationError};

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// The raw code was rejected before any network activity.
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// The shared HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    HttpClient(AdapterError),
    /// Every provider answered without knowing the code.
    #[error("cep not found")]
    NotFound,
    /// No provider answered before the deadline.
    #[error("lookup deadline exceeded")]
    DeadlineExceeded,
    /// The winning record could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialize(String),
}

impl CliError {
    /// Exit the process with an error message and a failure status.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        process::exit(1)
    }
}
