// ABOUTME: Recipe settings resolved from defaults, environment variables, and CLI overrides
// ABOUTME: Produces the RecipeRequest and OutputFormat for a single calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

//! Recipe settings
//!
//! Precedence, highest first: explicit overrides (CLI flags), environment
//! variables, built-in defaults. An empty environment value counts as unset.

use std::env;

use tracing::debug;

use super::error::ConfigError;
use crate::constants::env_keys;
use crate::dough::RecipeRequest;
use crate::formatters::OutputFormat;

/// Resolved inputs for one run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecipeSettings {
    /// Inputs handed to the calculator
    pub request: RecipeRequest,
    /// How the result is printed
    pub format: OutputFormat,
}

/// Values supplied explicitly by the caller, each optional
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecipeOverrides {
    /// Total dough weight in grams
    pub weight: Option<f64>,
    /// Inoculation percentage
    pub inoculation_percent: Option<f64>,
    /// Hydration percentage
    pub hydration_percent: Option<f64>,
    /// Output format
    pub format: Option<OutputFormat>,
}

impl RecipeSettings {
    /// Load settings from the process environment on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a `BREADCALC_*` variable is set but cannot be
    /// read or parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Read only `BREADCALC_FORMAT` from the process environment
    ///
    /// Lets a caller pick the error format even when another variable fails
    /// to parse.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the variable is set to an unknown format.
    pub fn format_from_env() -> Result<Option<OutputFormat>, ConfigError> {
        format_from_lookup(&env_lookup)
    }

    /// Load settings through an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Propagates lookup failures and returns `ConfigError` for values that
    /// cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let mut settings = Self::default();

        if let Some(format) = format_from_lookup(&lookup)? {
            settings.format = format;
        }
        if let Some(weight) = read_f64(&lookup, env_keys::WEIGHT)? {
            settings.request.weight = weight;
        }
        if let Some(inoculation) = read_f64(&lookup, env_keys::INOCULATION)? {
            settings.request.inoculation_percent = inoculation;
        }
        if let Some(hydration) = read_f64(&lookup, env_keys::HYDRATION)? {
            settings.request.hydration_percent = hydration;
        }

        debug!(
            weight = settings.request.weight,
            inoculation_percent = settings.request.inoculation_percent,
            hydration_percent = settings.request.hydration_percent,
            format = %settings.format,
            "Recipe settings loaded"
        );
        Ok(settings)
    }

    /// Apply explicit overrides, keeping current values where none is given
    #[must_use]
    pub fn with_overrides(mut self, overrides: &RecipeOverrides) -> Self {
        if let Some(weight) = overrides.weight {
            self.request.weight = weight;
        }
        if let Some(inoculation) = overrides.inoculation_percent {
            self.request.inoculation_percent = inoculation;
        }
        if let Some(hydration) = overrides.hydration_percent {
            self.request.hydration_percent = hydration;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }
}

fn env_lookup(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::EnvVar { key, source }),
    }
}

fn format_from_lookup<F>(lookup: &F) -> Result<Option<OutputFormat>, ConfigError>
where
    F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
{
    read_non_empty(lookup, env_keys::FORMAT)?
        .map(|raw| {
            OutputFormat::from_str_param(&raw).ok_or(ConfigError::InvalidValue {
                key: env_keys::FORMAT,
                value: raw,
                expected: "text, json",
            })
        })
        .transpose()
}

fn read_non_empty<F>(lookup: &F, key: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
{
    Ok(lookup(key)?
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty()))
}

fn read_f64<F>(lookup: &F, key: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
{
    read_non_empty(lookup, key)?
        .map(|raw| {
            raw.parse::<f64>().map_err(|e| ConfigError::Parse {
                key,
                reason: e.to_string(),
                value: raw,
            })
        })
        .transpose()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(
        pairs: &[(&'static str, &str)],
    ) -> impl Fn(&'static str) -> Result<Option<String>, ConfigError> {
        let map: HashMap<&'static str, String> = pairs
            .iter()
            .map(|(key, value)| (*key, (*value).to_owned()))
            .collect();
        move |key| Ok(map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let settings = RecipeSettings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, RecipeSettings::default());
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_values_read_from_lookup() {
        let settings = RecipeSettings::from_lookup(lookup_from(&[
            (env_keys::WEIGHT, "900"),
            (env_keys::INOCULATION, " 20.5 "),
            (env_keys::FORMAT, "JSON"),
        ]))
        .unwrap();

        assert!((settings.request.weight - 900.0).abs() < f64::EPSILON);
        assert!((settings.request.inoculation_percent - 20.5).abs() < f64::EPSILON);
        assert!((settings.request.hydration_percent - 70.0).abs() < f64::EPSILON);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_value_counts_as_unset() {
        let settings =
            RecipeSettings::from_lookup(lookup_from(&[(env_keys::HYDRATION, "  ")])).unwrap();
        assert!((settings.request.hydration_percent - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparsable_number_names_key() {
        let error =
            RecipeSettings::from_lookup(lookup_from(&[(env_keys::WEIGHT, "heavy")])).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
        assert_eq!(error.key(), env_keys::WEIGHT);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let error =
            RecipeSettings::from_lookup(lookup_from(&[(env_keys::FORMAT, "yaml")])).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_format_readable_when_number_is_bad() {
        let lookup = lookup_from(&[(env_keys::FORMAT, "json"), (env_keys::WEIGHT, "a loaf")]);

        assert!(RecipeSettings::from_lookup(&lookup).is_err());
        assert_eq!(format_from_lookup(&lookup).unwrap(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let settings = RecipeSettings::from_lookup(lookup_from(&[(env_keys::WEIGHT, "900")]))
            .unwrap()
            .with_overrides(&RecipeOverrides {
                weight: Some(750.0),
                format: Some(OutputFormat::Json),
                ..RecipeOverrides::default()
            });

        assert!((settings.request.weight - 750.0).abs() < f64::EPSILON);
        assert!((settings.request.inoculation_percent - 40.0).abs() < f64::EPSILON);
        assert_eq!(settings.format, OutputFormat::Json);
    }
}
