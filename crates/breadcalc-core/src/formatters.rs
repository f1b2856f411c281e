// ABOUTME: Output format abstraction for rendering results as text or JSON
// ABOUTME: Text uses the value's Display impl, JSON uses its Serialize impl
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

//! Output Format Abstraction Layer
//!
//! The CLI prints either the human-readable block produced by a type's
//! `Display` implementation or a pretty-printed JSON document.
//!
//! ## Usage
//!
//! ```rust
//! use breadcalc_core::formatters::{format_output, OutputFormat};
//!
//! let output = format_output(&42_u32, OutputFormat::Json).unwrap();
//! assert_eq!(output, "42");
//! ```

use serde::Serialize;
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    ///
    /// Returns `None` for unrecognized values so callers can report them.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

/// Render data in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails. Text rendering is
/// infallible.
pub fn format_output<T>(data: &T, format: OutputFormat) -> Result<String, FormatError>
where
    T: Serialize + fmt::Display + ?Sized,
{
    match format {
        OutputFormat::Text => Ok(data.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        }),
    }
}
