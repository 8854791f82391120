//! Unified application error type.
//! All modules (core, cli, config, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid approval status: {0}")]
    InvalidApprovalStatus(String),

    #[error("Invalid volunteer status: {0}")]
    InvalidVolunteerStatus(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Unknown template: {0}")]
    InvalidTemplate(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No event with id {0}")]
    EventNotFound(String),

    #[error("No volunteer {volunteer} in event {event}")]
    VolunteerNotFound { event: String, volunteer: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Interactive shell
    // ---------------------------
    #[error("Shell error: {0}")]
    Shell(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
