// ABOUTME: Closed-form solver for flour, fluid, and starter masses
// ABOUTME: Splits total flour and fluid pools, then backs out the starter's share
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

//! # Recipe Calculator
//!
//! Given the total dough weight `W`, hydration ratio `h` and inoculation
//! ratio `r`:
//!
//! ```text
//! total_flour = W / (1 + h)
//! total_fluid = W - total_flour
//! flour       = total_flour / (1 + 0.5 r)
//! fluid       = total_fluid - 0.5 r * flour
//! inoculation = W - flour - fluid
//! ```
//!
//! The starter is 100% hydration, so half its mass sits in the flour pool and
//! half in the fluid pool. Starter mass equals `r * flour`.

use breadcalc_core::constants::baker::{PERCENT_SCALE, STARTER_FLOUR_FRACTION};
use breadcalc_core::errors::InvalidInputError;
use tracing::{debug, warn};

use super::models::{Recipe, RecipeRequest};

/// Compute a recipe from raw inputs
///
/// # Errors
///
/// Returns `InvalidInputError` if any input is zero, negative, or not finite.
/// Validation happens before any arithmetic.
///
/// # Examples
///
/// ```rust
/// use breadcalc_intelligence::dough::compute;
///
/// let recipe = compute(500.0, 40.0, 70.0).unwrap();
/// assert!((recipe.flour() - 245.098).abs() < 0.001);
/// assert!(compute(0.0, 40.0, 70.0).is_err());
/// ```
pub fn compute(
    weight: f64,
    inoculation_percent: f64,
    hydration_percent: f64,
) -> Result<Recipe, InvalidInputError> {
    compute_request(&RecipeRequest::new(
        weight,
        inoculation_percent,
        hydration_percent,
    ))
}

/// Compute a recipe from a [`RecipeRequest`]
///
/// # Errors
///
/// Returns the first `InvalidInputError` found by [`RecipeRequest::validate`].
pub fn compute_request(request: &RecipeRequest) -> Result<Recipe, InvalidInputError> {
    request.validate()?;

    let weight = request.weight;
    let hydration_ratio = request.hydration_percent / PERCENT_SCALE;
    let total_flour = weight / (1.0 + hydration_ratio);
    let total_fluid = weight - total_flour;

    let inoculation_ratio = request.inoculation_percent / PERCENT_SCALE;
    let starter_share = STARTER_FLOUR_FRACTION * inoculation_ratio;
    let flour = total_flour / (1.0 + starter_share);
    let fluid = total_fluid - (starter_share * flour);
    let inoculation = weight - flour - fluid;

    debug!(
        weight,
        inoculation_percent = request.inoculation_percent,
        hydration_percent = request.hydration_percent,
        total_flour,
        total_fluid,
        "Solved dough pools"
    );

    let recipe = Recipe::from_parts(flour, fluid, inoculation, weight);
    if recipe.has_negative_fluid() {
        warn!(
            fluid,
            inoculation_percent = request.inoculation_percent,
            hydration_percent = request.hydration_percent,
            "Starter water exceeds target hydration; recipe needs negative fluid"
        );
    }

    Ok(recipe)
}
