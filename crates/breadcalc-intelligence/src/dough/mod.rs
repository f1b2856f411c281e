// ABOUTME: Dough module grouping recipe models, the calculator, and breakdowns
// ABOUTME: Re-exports the types callers need to compute and inspect a recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

//! # Dough Module
//!
//! A dough is described by three numbers: its total weight, how much starter
//! it carries (inoculation) and how wet it is (hydration). The calculator
//! turns those into masses to weigh out.
//!
//! ## Example Usage
//!
//! ```rust
//! use breadcalc_intelligence::dough::{compute, RecipeBreakdown};
//!
//! let recipe = compute(500.0, 40.0, 70.0).unwrap();
//! assert!(recipe.is_valid());
//!
//! let breakdown = RecipeBreakdown::from_recipe(&recipe);
//! assert!((breakdown.hydration_percent - 70.0).abs() < 1e-9);
//! ```

/// Derived totals and baker's percentages
pub mod breakdown;
/// The closed-form recipe solver
pub mod calculator;
/// Request and result types
pub mod models;

pub use breakdown::RecipeBreakdown;
pub use calculator::{compute, compute_request};
pub use models::{Recipe, RecipeRequest};
