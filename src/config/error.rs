// ABOUTME: Configuration error types for environment-sourced recipe settings
// ABOUTME: Defines error variants for unreadable, unparsable, and unknown values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

use std::env;
use thiserror::Error;

use crate::errors::AppError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable is set but not valid unicode
    #[error("Environment variable error: {key}: {source}")]
    EnvVar {
        /// Variable name
        key: &'static str,
        /// Underlying lookup failure
        #[source]
        source: env::VarError,
    },

    /// Failed to parse a numeric configuration value
    #[error("Parse error: {key}={value:?}: {reason}")]
    Parse {
        /// Variable name
        key: &'static str,
        /// Raw value as read
        value: String,
        /// Parser message
        reason: String,
    },

    /// Value is well-formed but not one of the accepted choices
    #[error("Invalid value: {key}={value:?} (expected one of: {expected})")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Raw value as read
        value: String,
        /// Accepted choices
        expected: &'static str,
    },
}

impl ConfigError {
    /// Name of the variable that failed
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::EnvVar { key, .. } | Self::Parse { key, .. } | Self::InvalidValue { key, .. } => {
                key
            }
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
            .with_details(serde_json::json!({ "key": error.key() }))
            .with_source(error)
    }
}
