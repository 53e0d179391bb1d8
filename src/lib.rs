//! `future-earnings` library crate.
//!
//! The binary (`fe`) is a thin wrapper around this library so that:
//!
//! - the projection and widget logic is testable without a terminal
//! - the chart backend is swappable behind `chart::ChartRenderer`

pub mod app;
pub mod calculator;
pub mod chart;
pub mod cli;
pub mod controls;
pub mod domain;
pub mod error;
pub mod plot;
pub mod projection;
pub mod report;
pub mod state;
pub mod tui;
