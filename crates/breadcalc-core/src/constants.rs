// ABOUTME: Application-wide constants for the breadcalc workspace
// ABOUTME: Default recipe inputs, baker's-percentage factors, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

//! # Constants Module
//!
//! Hardcoded defaults and the names of the environment variables that
//! override them.

/// Recipe inputs used when neither a flag nor an environment variable is set
pub mod defaults {
    /// Total dough mass in grams
    pub const WEIGHT_GRAMS: f64 = 500.0;

    /// Starter mass as a percentage of non-starter flour
    pub const INOCULATION_PERCENT: f64 = 40.0;

    /// Fluid mass as a percentage of total flour
    pub const HYDRATION_PERCENT: f64 = 70.0;
}

/// Baker's-percentage arithmetic
pub mod baker {
    /// Divisor turning a percentage into a ratio
    pub const PERCENT_SCALE: f64 = 100.0;

    /// Fraction of a 100%-hydration starter that is flour (the rest is water)
    pub const STARTER_FLOUR_FRACTION: f64 = 0.5;

    /// Fraction of a 100%-hydration starter that is water
    pub const STARTER_WATER_FRACTION: f64 = 1.0 - STARTER_FLOUR_FRACTION;
}

/// Environment variable names read by the configuration layer
pub mod env_keys {
    /// Overrides the default dough weight
    pub const WEIGHT: &str = "BREADCALC_WEIGHT";

    /// Overrides the default inoculation percentage
    pub const INOCULATION: &str = "BREADCALC_INOCULATION";

    /// Overrides the default hydration percentage
    pub const HYDRATION: &str = "BREADCALC_HYDRATION";

    /// Selects the output format (`text` or `json`)
    pub const FORMAT: &str = "BREADCALC_FORMAT";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the CLI in startup logs
    pub const BREADCALC: &str = "breadcalc";
}
