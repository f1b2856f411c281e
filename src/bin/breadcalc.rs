// ABOUTME: breadcalc CLI - prints a sourdough recipe for a dough weight, inoculation, and hydration
// ABOUTME: Resolves flags over BREADCALC_* environment variables over built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors
//!
//! Usage:
//! ```bash
//! # Default 500g dough, 40% inoculation, 70% hydration
//! breadcalc
//!
//! # 1kg dough at 20% inoculation and 78% hydration
//! breadcalc --weight 1000 --inoculation 20 --hydration 78
//!
//! # Full report with breakdown as JSON
//! breadcalc --format json
//!
//! # Same, driven by the environment
//! BREADCALC_WEIGHT=1000 BREADCALC_FORMAT=json breadcalc
//! ```

use std::process::ExitCode;

use breadcalc::config::{RecipeOverrides, RecipeSettings};
use breadcalc::errors::{AppError, AppResult, ErrorResponse};
use breadcalc::formatters::OutputFormat;
use breadcalc::logging::{LoggingConfig, VERBOSE_LEVEL};
use breadcalc::services;
use clap::Parser;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "breadcalc",
    version,
    about = "Sourdough recipe calculator",
    long_about = "Computes flour, fluid, and starter masses from a total dough weight, an inoculation percentage, and a hydration percentage. The starter is assumed to be 100% hydration."
)]
struct Cli {
    /// Total dough weight in grams [env: BREADCALC_WEIGHT] [default: 500]
    #[arg(long, short = 'w', allow_negative_numbers = true)]
    weight: Option<f64>,

    /// Starter mass as a percentage of flour [env: BREADCALC_INOCULATION] [default: 40]
    #[arg(long, short = 'i', allow_negative_numbers = true)]
    inoculation: Option<f64>,

    /// Fluid mass as a percentage of flour [env: BREADCALC_HYDRATION] [default: 70]
    #[arg(long, short = 'H', allow_negative_numbers = true)]
    hydration: Option<f64>,

    /// Output format: text or json [env: BREADCALC_FORMAT] [default: text]
    #[arg(long, short = 'f', value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> RecipeOverrides {
        RecipeOverrides {
            weight: self.weight,
            inoculation_percent: self.inoculation,
            hydration_percent: self.hydration,
            format: self.format,
        }
    }
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str_param(raw)
        .ok_or_else(|| format!("unknown format '{raw}' (expected text or json)"))
}

fn run(settings: &RecipeSettings) -> AppResult<String> {
    let report = services::calculate(&settings.request)?;
    services::render(&report, settings.format)
}

fn report_error(error: AppError, format: OutputFormat) -> ExitCode {
    let status = error.exit_code();
    debug!(code = ?error.code, "{error}");

    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&ErrorResponse::from(error)) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => eprintln!("Error: {e}"),
        },
        OutputFormat::Text => eprintln!("Error: {error}"),
    }

    ExitCode::from(status)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().with_level(VERBOSE_LEVEL)
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let settings = match RecipeSettings::from_env() {
        Ok(settings) => settings.with_overrides(&cli.overrides()),
        Err(e) => {
            let format = cli
                .format
                .or_else(|| RecipeSettings::format_from_env().ok().flatten())
                .unwrap_or_default();
            return report_error(e.into(), format);
        }
    };

    match run(&settings) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => report_error(error, settings.format),
    }
}
