//! Actions - everything that can happen to the lookup widget

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::report::WeatherReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Lookup category =====
    /// Intent: look up the raw text typed by the user
    LookupSubmit(String),

    /// Result: the simulated request for `request_id` finished
    LookupDidResolve {
        request_id: u64,
        report: WeatherReport,
    },

    // ===== Input category =====
    /// City field text changed
    InputChange(String),

    /// Clear the city field
    InputClear,

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement)
    Render,

    /// Periodic tick for the spinner
    Tick,

    /// Exit the application
    Quit,
}
