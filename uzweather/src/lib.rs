//! Uzbek city weather lookup - tui-dispatch widget
//!
//! This library exposes the widget's modules for testing.

pub mod action;
pub mod cities;
pub mod components;
pub mod effect;
pub mod error;
pub mod icon;
pub mod logging;
pub mod reducer;
pub mod report;
pub mod simulation;
pub mod state;
