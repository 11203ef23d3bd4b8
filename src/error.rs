//! Global error handling for projsum
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

/// Global error type for projsum operations
#[derive(Error, Debug)]
pub enum ProjSumError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive prompt errors
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Specialized Result type for projsum operations
pub type Result<T> = std::result::Result<T, ProjSumError>;
