//! Effects - side effects declared by the reducer

use crate::cities::CityName;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start the simulated report request for a validated city
    RequestReport { city: CityName, request_id: u64 },
}
