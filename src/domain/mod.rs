//! Domain types used throughout the calculator.
//!
//! This module defines:
//!
//! - the selector enums (`Branch`, `Country`, `RankingRange`, `Currency`)
//! - slider bounds (`SliderSpec`)
//! - calculator state (`CalculatorInputs`) and its output (`EarningsSeries`)

pub mod types;

pub use types::*;
