// ABOUTME: Main library entry point for the breadcalc dough calculator
// ABOUTME: Wires configuration, logging, and the dough service over the workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

#![deny(unsafe_code)]

//! # Breadcalc
//!
//! Computes a sourdough recipe (flour, fluid, and starter masses) from a total
//! dough weight, an inoculation percentage, and a hydration percentage.
//!
//! ## Architecture
//!
//! - **`breadcalc-core`**: errors, constants, output formatters
//! - **`breadcalc-intelligence`**: the dough models and calculator
//! - **this crate**: configuration, logging, and the service used by the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use breadcalc::dough::RecipeRequest;
//! use breadcalc::formatters::OutputFormat;
//! use breadcalc::services::{calculate, render};
//!
//! let report = calculate(&RecipeRequest::new(500.0, 40.0, 70.0)).unwrap();
//! let text = render(&report, OutputFormat::Text).unwrap();
//! assert!(text.starts_with("Weight: 500"));
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the binary (src/bin/) and integration tests (tests/).

/// Recipe settings from environment and CLI overrides
pub mod config;

/// Structured logging setup
pub mod logging;

/// Calculation and rendering services
pub mod services;

// ── Workspace re-exports ────────────────────────────────────────────────

/// Application constants (defaults, environment keys)
pub use breadcalc_core::constants;

/// Unified error handling system
pub use breadcalc_core::errors;

/// Output format abstraction (text, JSON)
pub use breadcalc_core::formatters;

/// Dough models and the recipe calculator
pub use breadcalc_intelligence::dough;
