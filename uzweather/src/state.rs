//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cities::{CityAllowList, CityName};
use crate::error::ErrorKind;
use crate::report::WeatherReport;

/// Spinner timing while a lookup is pending.
pub const SPINNER_TICK_MS: u64 = 80;
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Lifecycle of a lookup: Idle → Pending → Resolved, or Rejected on bad input
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RequestState {
    #[default]
    Idle,
    Pending {
        query: CityName,
        /// Sequence number of the submission that started this request
        request_id: u64,
    },
    Resolved {
        report: WeatherReport,
    },
    Rejected {
        reason: ErrorKind,
    },
}

impl RequestState {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending { .. })
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, RequestState::Resolved { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, RequestState::Rejected { .. })
    }

    pub fn pending_id(&self) -> Option<u64> {
        match self {
            RequestState::Pending { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            RequestState::Resolved { report } => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<ErrorKind> {
        match self {
            RequestState::Rejected { reason } => Some(*reason),
            _ => None,
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Lookup (visible in debug) ---
    /// The single state cell driven by submits
    #[debug(section = "Lookup", label = "Request", debug_fmt)]
    pub request: RequestState,

    /// Last successful report; survives a later rejection
    #[debug(section = "Lookup", label = "Last report", debug_fmt)]
    pub last_report: Option<WeatherReport>,

    /// Id of the most recent submission that passed validation
    #[debug(section = "Lookup", label = "Latest id", debug_fmt)]
    pub latest_request_id: u64,

    /// Current text of the city field
    #[debug(section = "Input", label = "Text", debug_fmt)]
    pub input: String,

    // --- Configuration (skipped) ---
    #[debug(skip)]
    pub allow_list: CityAllowList,

    // --- Animation internals (skipped) ---
    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new(allow_list: CityAllowList) -> Self {
        Self {
            request: RequestState::Idle,
            last_report: None,
            latest_request_id: 0,
            input: String::new(),
            allow_list,
            tick_count: 0,
        }
    }

    /// Start with the city field pre-filled
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    /// Report to show: the current one, else the last one that resolved.
    pub fn visible_report(&self) -> Option<&WeatherReport> {
        self.request.report().or(self.last_report.as_ref())
    }

    /// Submitting is disabled while a request is in flight
    pub fn can_submit(&self) -> bool {
        !self.request.is_pending()
    }

    /// Drop a `Pending` request that no task will ever resolve (e.g. one
    /// restored from a snapshot) and hand back its query.
    pub fn take_interrupted_query(&mut self) -> Option<CityName> {
        match std::mem::take(&mut self.request) {
            RequestState::Pending { query, .. } => {
                self.tick_count = 0;
                Some(query)
            }
            other => {
                self.request = other;
                None
            }
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CityAllowList::uzbek())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Condition;

    fn sample_report(city: &str) -> WeatherReport {
        WeatherReport {
            location: CityName::new(city),
            temperature_celsius: 24,
            humidity_percent: 40,
            wind_speed_mps: 3,
            condition: Condition::Sunny,
        }
    }

    #[test]
    fn test_default_state_is_idle() {
        let state = AppState::default();
        assert!(state.request.is_idle());
        assert!(state.can_submit());
        assert_eq!(state.visible_report(), None);
        assert_eq!(state.allow_list.len(), 12);
    }

    #[test]
    fn test_visible_report_prefers_current() {
        let state = AppState {
            request: RequestState::Resolved {
                report: sample_report("xiva"),
            },
            last_report: Some(sample_report("nukus")),
            ..Default::default()
        };
        assert_eq!(state.visible_report().map(|r| r.location.as_str()), Some("xiva"));
    }

    #[test]
    fn test_visible_report_falls_back_after_rejection() {
        let state = AppState {
            request: RequestState::Rejected {
                reason: ErrorKind::UnknownCity,
            },
            last_report: Some(sample_report("nukus")),
            ..Default::default()
        };
        assert_eq!(state.request.error(), Some(ErrorKind::UnknownCity));
        assert_eq!(state.visible_report().map(|r| r.location.as_str()), Some("nukus"));
    }

    #[test]
    fn test_pending_blocks_submit() {
        let state = AppState {
            request: RequestState::Pending {
                query: CityName::new("buxoro"),
                request_id: 3,
            },
            ..Default::default()
        };
        assert!(!state.can_submit());
        assert_eq!(state.request.pending_id(), Some(3));
    }

    #[test]
    fn test_interrupted_query_resets_to_idle() {
        let mut state = AppState {
            request: RequestState::Pending {
                query: CityName::new("xiva"),
                request_id: 1,
            },
            latest_request_id: 1,
            tick_count: 9,
            ..Default::default()
        };

        assert_eq!(state.take_interrupted_query(), Some(CityName::new("xiva")));
        assert!(state.request.is_idle());
        assert!(state.can_submit());
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.latest_request_id, 1);
    }

    #[test]
    fn test_interrupted_query_leaves_settled_state_alone() {
        let mut state = AppState {
            request: RequestState::Resolved {
                report: sample_report("nukus"),
            },
            ..Default::default()
        };

        assert_eq!(state.take_interrupted_query(), None);
        assert!(state.request.is_resolved());
    }

    #[test]
    fn test_spinner_wraps() {
        let state = AppState {
            tick_count: SPINNER_FRAMES.len() as u32 + 1,
            ..Default::default()
        };
        assert_eq!(state.spinner_frame(), SPINNER_FRAMES[1]);
    }

    #[test]
    fn test_request_state_serializes_with_tag() {
        let json = serde_json::to_value(RequestState::Rejected {
            reason: ErrorKind::UnknownCity,
        })
        .unwrap();
        assert_eq!(json["state"], "rejected");
        assert_eq!(json["reason"], "unknown_city");
    }
}
