// ABOUTME: Validation error raised when a recipe input cannot produce a dough
// ABOUTME: Names the offending input and the value that was rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The three caller-supplied recipe inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeInput {
    /// Total dough weight in grams
    Weight,
    /// Starter mass as a percentage of flour
    InoculationPercent,
    /// Fluid mass as a percentage of flour
    HydrationPercent,
}

impl RecipeInput {
    /// Stable identifier used in error details
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::InoculationPercent => "inoculation_percent",
            Self::HydrationPercent => "hydration_percent",
        }
    }
}

impl fmt::Display for RecipeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recipe input that no dough can be computed from
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInputError {
    /// Input is zero or negative
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive {
        /// Which input was rejected
        field: RecipeInput,
        /// The rejected value
        value: f64,
    },
    /// Input is NaN or infinite
    #[error("{field} must be a finite number, got {value}")]
    NotFinite {
        /// Which input was rejected
        field: RecipeInput,
        /// The rejected value
        value: f64,
    },
}

impl InvalidInputError {
    /// Check a single input, returning it unchanged when usable
    ///
    /// # Errors
    ///
    /// Returns `NotFinite` for NaN or infinite values and `NotPositive` for
    /// values less than or equal to zero.
    pub fn check(field: RecipeInput, value: f64) -> Result<f64, Self> {
        if !value.is_finite() {
            return Err(Self::NotFinite { field, value });
        }
        if value <= 0.0 {
            return Err(Self::NotPositive { field, value });
        }
        Ok(value)
    }

    /// The input that failed validation
    #[must_use]
    pub const fn field(&self) -> RecipeInput {
        match self {
            Self::NotPositive { field, .. } | Self::NotFinite { field, .. } => *field,
        }
    }

    /// The rejected value
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::NotPositive { value, .. } | Self::NotFinite { value, .. } => *value,
        }
    }
}
