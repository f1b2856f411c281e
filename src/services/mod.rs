// ABOUTME: Service layer sitting between configuration and the dough engine
// ABOUTME: Keeps calculation and rendering logic out of the binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Breadcalc Contributors

/// Dough calculation and report rendering
pub mod dough;

pub use dough::{calculate, render, DoughReport};
