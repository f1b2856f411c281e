// ABOUTME: Data models for dough calculation requests and computed recipes
// ABOUTME: Defines RecipeRequest (inputs) and Recipe (immutable result with validity check)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

use breadcalc_core::constants::defaults;
use breadcalc_core::errors::{InvalidInputError, RecipeInput};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inputs for one dough calculation
///
/// All three values must be strictly positive and finite. Percentages above
/// 100 are accepted; a 120% hydration batter is unusual but well defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// Total dough mass in grams
    pub weight: f64,
    /// Starter mass as a percentage of non-starter flour
    pub inoculation_percent: f64,
    /// Total fluid as a percentage of total flour
    pub hydration_percent: f64,
}

impl RecipeRequest {
    /// Create a request from raw inputs (not yet validated)
    #[must_use]
    pub const fn new(weight: f64, inoculation_percent: f64, hydration_percent: f64) -> Self {
        Self {
            weight,
            inoculation_percent,
            hydration_percent,
        }
    }

    /// Validate every input, in the order weight, inoculation, hydration
    ///
    /// # Errors
    ///
    /// Returns the first `InvalidInputError` encountered.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        InvalidInputError::check(RecipeInput::Weight, self.weight)?;
        InvalidInputError::check(RecipeInput::InoculationPercent, self.inoculation_percent)?;
        InvalidInputError::check(RecipeInput::HydrationPercent, self.hydration_percent)?;
        Ok(())
    }
}

impl Default for RecipeRequest {
    fn default() -> Self {
        Self::new(
            defaults::WEIGHT_GRAMS,
            defaults::INOCULATION_PERCENT,
            defaults::HYDRATION_PERCENT,
        )
    }
}

/// A computed dough recipe, in grams
///
/// Assumes a 100%-hydration starter. Only the calculator constructs a
/// `Recipe`, so `total_weight == flour + fluid + inoculation` holds up to
/// floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recipe {
    flour: f64,
    fluid: f64,
    inoculation: f64,
    total_weight: f64,
}

impl Recipe {
    pub(crate) const fn from_parts(
        flour: f64,
        fluid: f64,
        inoculation: f64,
        total_weight: f64,
    ) -> Self {
        Self {
            flour,
            fluid,
            inoculation,
            total_weight,
        }
    }

    /// Mass of flour excluding the starter's flour
    #[must_use]
    pub const fn flour(&self) -> f64 {
        self.flour
    }

    /// Mass of fluid excluding the starter's water
    #[must_use]
    pub const fn fluid(&self) -> f64 {
        self.fluid
    }

    /// Mass of starter
    #[must_use]
    pub const fn inoculation(&self) -> f64 {
        self.inoculation
    }

    /// Total dough mass, echoed from the request
    #[must_use]
    pub const fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Sum of the three weighed components
    #[must_use]
    pub fn component_sum(&self) -> f64 {
        self.flour + self.fluid + self.inoculation
    }

    /// Whether the components add up to the total weight, to the nearest gram
    #[must_use]
    #[allow(clippy::float_cmp)] // both sides are whole numbers after rounding
    pub fn is_valid(&self) -> bool {
        self.total_weight.round() == self.component_sum().round()
    }

    /// True when the starter carries more water than the target hydration allows
    #[must_use]
    pub fn has_negative_fluid(&self) -> bool {
        self.fluid < 0.0
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weight: {}", self.total_weight)?;
        writeln!(f, "Flour: {}", self.flour)?;
        writeln!(f, "Fluid: {}", self.fluid)?;
        write!(f, "Inoculation: {}", self.inoculation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_matches_constants() {
        let request = RecipeRequest::default();
        assert!((request.weight - 500.0).abs() < f64::EPSILON);
        assert!((request.inoculation_percent - 40.0).abs() < f64::EPSILON);
        assert!((request.hydration_percent - 70.0).abs() < f64::EPSILON);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let request = RecipeRequest::new(0.0, -1.0, 70.0);
        let error = request.validate().unwrap_err();
        assert_eq!(error.field(), RecipeInput::Weight);

        let request = RecipeRequest::new(500.0, 40.0, 0.0);
        let error = request.validate().unwrap_err();
        assert_eq!(error.field(), RecipeInput::HydrationPercent);
    }

    #[test]
    fn test_is_valid_rounds_to_nearest_gram() {
        // Component sum lands a hair under the total; truncation would fail this.
        let recipe = Recipe::from_parts(245.0, 156.0, 98.999_999_9, 500.0);
        assert!(recipe.is_valid());

        let recipe = Recipe::from_parts(245.0, 156.0, 90.0, 500.0);
        assert!(!recipe.is_valid());
    }

    #[test]
    fn test_display_four_lines() {
        let recipe = Recipe::from_parts(250.0, 150.0, 100.0, 500.0);
        assert_eq!(
            recipe.to_string(),
            "Weight: 500\nFlour: 250\nFluid: 150\nInoculation: 100"
        );
    }
}
