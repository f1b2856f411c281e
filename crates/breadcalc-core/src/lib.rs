// ABOUTME: Core types and constants for the breadcalc dough calculator
// ABOUTME: Foundation crate with error handling, constants, and output formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

#![deny(unsafe_code)]

//! # Breadcalc Core
//!
//! Foundation crate providing shared types and constants for the breadcalc
//! workspace. Nothing here knows how a dough is computed; it only defines the
//! vocabulary the calculator and the CLI share.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `InvalidInputError`
//! - **constants**: Default recipe inputs, baker's-percentage constants, environment keys
//! - **formatters**: Output format abstraction (plain text, JSON)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Output format abstraction (text, JSON)
pub mod formatters;
