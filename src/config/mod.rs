// ABOUTME: Configuration module resolving recipe inputs and output format
// ABOUTME: Layers CLI overrides over environment variables over built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors
//! Configuration module for breadcalc
//!
//! - **Recipe**: `RecipeSettings` built from `BREADCALC_*` variables and overrides
//! - **Error**: `ConfigError` for values that are set but unusable
//!
//! Logging has its own configuration in [`crate::logging`].

/// Configuration error types
pub mod error;
/// Recipe input and output format settings
pub mod recipe;

pub use error::ConfigError;
pub use recipe::{RecipeOverrides, RecipeSettings};
