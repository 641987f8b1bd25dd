//! Unified application error type.
//! All modules (core, storage, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

use crate::core::validation::FieldErrors;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Snapshot encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
