//! Reducer - pure function: (state, action) -> DispatchResult

use tracing::{debug, info};
use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::cities::validate;
use crate::effect::Effect;
use crate::state::{AppState, RequestState};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Lookup actions =====
        Action::LookupSubmit(raw) => {
            if !state.can_submit() {
                debug!(query = %raw, "submit ignored while a lookup is pending");
                return DispatchResult::unchanged();
            }

            match validate(&raw, &state.allow_list) {
                Ok(city) => {
                    state.latest_request_id += 1;
                    let request_id = state.latest_request_id;
                    debug!(%city, request_id, "lookup accepted");
                    state.request = RequestState::Pending {
                        query: city.clone(),
                        request_id,
                    };
                    state.tick_count = 0;
                    DispatchResult::changed_with(Effect::RequestReport { city, request_id })
                }
                Err(reason) => {
                    debug!(query = %raw, ?reason, "lookup rejected");
                    state.request = RequestState::Rejected { reason };
                    DispatchResult::changed()
                }
            }
        }

        Action::LookupDidResolve { request_id, report } => {
            if state.request.pending_id() != Some(request_id) {
                debug!(request_id, latest = state.latest_request_id, "stale report discarded");
                return DispatchResult::unchanged();
            }
            info!(
                city = %report.location,
                temperature = report.temperature_celsius,
                condition = ?report.condition,
                "report resolved"
            );
            state.last_report = Some(report.clone());
            state.request = RequestState::Resolved { report };
            DispatchResult::changed()
        }

        // ===== Input actions =====
        Action::InputChange(text) => {
            if !state.can_submit() || text == state.input {
                return DispatchResult::unchanged();
            }
            state.input = text;
            DispatchResult::changed()
        }

        Action::InputClear => {
            if !state.can_submit() || state.input.is_empty() {
                return DispatchResult::unchanged();
            }
            state.input.clear();
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            if state.request.is_pending() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::CityName;
    use crate::error::ErrorKind;
    use crate::report::{Condition, WeatherReport};
    use pretty_assertions::assert_eq;

    fn report_for(city: &str) -> WeatherReport {
        WeatherReport {
            location: CityName::new(city),
            temperature_celsius: 30,
            humidity_percent: 35,
            wind_speed_mps: 4,
            condition: Condition::Rainy,
        }
    }

    #[test]
    fn test_valid_submit_goes_pending() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::LookupSubmit("toshkent".into()));

        assert!(result.changed);
        assert_eq!(
            state.request,
            RequestState::Pending {
                query: CityName::new("toshkent"),
                request_id: 1,
            }
        );
        assert_eq!(result.effects.len(), 1);
        assert_eq!(
            result.effects[0],
            Effect::RequestReport {
                city: CityName::new("toshkent"),
                request_id: 1,
            }
        );
    }

    #[test]
    fn test_empty_submit_is_rejected_without_effect() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::LookupSubmit(String::new()));

        assert!(result.changed);
        assert_eq!(
            state.request,
            RequestState::Rejected {
                reason: ErrorKind::UnknownCity
            }
        );
        assert!(result.effects.is_empty());
        assert_eq!(state.latest_request_id, 0);
    }

    #[test]
    fn test_capitalized_city_is_rejected() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LookupSubmit("Toshkent".into()));
        assert!(state.request.is_rejected());
    }

    #[test]
    fn test_rejection_keeps_last_report() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LookupSubmit("xiva".into()));
        reducer(
            &mut state,
            Action::LookupDidResolve {
                request_id: 1,
                report: report_for("xiva"),
            },
        );

        reducer(&mut state, Action::LookupSubmit("Xiva".into()));

        assert!(state.request.is_rejected());
        assert_eq!(state.last_report, Some(report_for("xiva")));
    }

    #[test]
    fn test_submit_while_pending_is_ignored() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LookupSubmit("buxoro".into()));

        let result = reducer(&mut state, Action::LookupSubmit("buxoro".into()));

        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.request.pending_id(), Some(1));
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LookupSubmit("buxoro".into()));
        reducer(
            &mut state,
            Action::LookupDidResolve {
                request_id: 1,
                report: report_for("buxoro"),
            },
        );
        reducer(&mut state, Action::LookupSubmit("xiva".into()));

        let result = reducer(
            &mut state,
            Action::LookupDidResolve {
                request_id: 1,
                report: report_for("buxoro"),
            },
        );

        assert!(!result.changed);
        assert_eq!(state.request.pending_id(), Some(2));
    }

    #[test]
    fn test_resolution_without_pending_is_discarded() {
        let mut state = AppState::default();
        let result = reducer(
            &mut state,
            Action::LookupDidResolve {
                request_id: 0,
                report: report_for("nukus"),
            },
        );
        assert!(!result.changed);
        assert!(state.request.is_idle());
    }

    #[test]
    fn test_input_is_frozen_while_pending() {
        let mut state = AppState::default().with_input("samarqand");
        reducer(&mut state, Action::LookupSubmit("samarqand".into()));

        assert!(!reducer(&mut state, Action::InputChange("x".into())).changed);
        assert!(!reducer(&mut state, Action::InputClear).changed);
        assert_eq!(state.input, "samarqand");
    }

    #[test]
    fn test_tick_only_animates_while_pending() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::Tick).changed);

        reducer(&mut state, Action::LookupSubmit("termiz".into()));
        assert!(reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 1);
    }
}
