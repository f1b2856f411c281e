// ABOUTME: Dough calculation service tying the calculator to output rendering
// ABOUTME: Builds a DoughReport (request, recipe, breakdown) and renders it as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

use serde::Serialize;
use std::fmt;
use tracing::info;

use crate::dough::{compute_request, Recipe, RecipeBreakdown, RecipeRequest};
use crate::errors::AppResult;
use crate::formatters::{format_output, OutputFormat};

/// Everything produced by one calculation
///
/// Text rendering is the plain four-line recipe; JSON rendering also carries
/// the request and the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoughReport {
    /// Inputs as supplied
    pub request: RecipeRequest,
    /// Computed masses
    pub recipe: Recipe,
    /// Starter split and recovered percentages
    pub breakdown: RecipeBreakdown,
}

impl fmt::Display for DoughReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.recipe, f)
    }
}

/// Run the calculator for a request
///
/// # Errors
///
/// Returns an `INVALID_INPUT` error if any input is non-positive or not finite
pub fn calculate(request: &RecipeRequest) -> AppResult<DoughReport> {
    let recipe = compute_request(request)?;
    let breakdown = RecipeBreakdown::from_recipe(&recipe);

    info!(
        weight = recipe.total_weight(),
        flour = recipe.flour(),
        fluid = recipe.fluid(),
        inoculation = recipe.inoculation(),
        valid = recipe.is_valid(),
        "Dough recipe computed"
    );

    Ok(DoughReport {
        request: *request,
        recipe,
        breakdown,
    })
}

/// Render a report in the requested format
///
/// # Errors
///
/// Returns a `SERIALIZATION_ERROR` if JSON encoding fails
pub fn render(report: &DoughReport, format: OutputFormat) -> AppResult<String> {
    Ok(format_output(report, format)?)
}
