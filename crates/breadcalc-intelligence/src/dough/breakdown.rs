// ABOUTME: Derived view of a recipe splitting the starter into flour and water
// ABOUTME: Recovers total flour, total fluid, and the baker's percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

use breadcalc_core::constants::baker::{
    PERCENT_SCALE, STARTER_FLOUR_FRACTION, STARTER_WATER_FRACTION,
};
use serde::Serialize;

use super::models::Recipe;

/// Totals and percentages derived from a [`Recipe`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecipeBreakdown {
    /// Flour carried inside the starter
    pub starter_flour: f64,
    /// Water carried inside the starter
    pub starter_water: f64,
    /// All flour in the dough, starter included
    pub total_flour: f64,
    /// All fluid in the dough, starter included
    pub total_fluid: f64,
    /// `total_fluid / total_flour`, as a percentage
    pub hydration_percent: f64,
    /// `inoculation / flour`, as a percentage
    pub inoculation_percent: f64,
}

impl RecipeBreakdown {
    /// Derive the breakdown for a computed recipe
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let starter_flour = recipe.inoculation() * STARTER_FLOUR_FRACTION;
        let starter_water = recipe.inoculation() * STARTER_WATER_FRACTION;
        let total_flour = recipe.flour() + starter_flour;
        let total_fluid = recipe.fluid() + starter_water;

        Self {
            starter_flour,
            starter_water,
            total_flour,
            total_fluid,
            hydration_percent: total_fluid / total_flour * PERCENT_SCALE,
            inoculation_percent: recipe.inoculation() / recipe.flour() * PERCENT_SCALE,
        }
    }
}
