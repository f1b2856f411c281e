// ABOUTME: Dough formula engine computing flour, fluid, and starter masses
// ABOUTME: Pure calculations with no I/O, shared by the CLI and benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

#![deny(unsafe_code)]

//! # Breadcalc Intelligence
//!
//! Solves the baker's-percentage equations for a dough built with a
//! 100%-hydration starter.

/// Dough models and the recipe calculator
pub mod dough;

pub use dough::{compute, compute_request, Recipe, RecipeBreakdown, RecipeRequest};
