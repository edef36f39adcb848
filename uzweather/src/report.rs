//! Synthetic weather reports

use std::ops::RangeInclusive;

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cities::CityName;

pub const TEMPERATURE_RANGE: RangeInclusive<i32> = 10..=35;
pub const HUMIDITY_RANGE: RangeInclusive<u8> = 30..=80;
pub const WIND_SPEED_RANGE: RangeInclusive<u8> = 1..=10;

/// Sky condition of a generated report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::Sunny, Condition::Cloudy, Condition::Rainy];

    /// Label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "Quyoshli",
            Condition::Cloudy => "Bulutli",
            Condition::Rainy => "Yomg'irli",
        }
    }

    /// Parse either the display label or the English variant name, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|condition| {
            condition.label().to_lowercase() == label
                || format!("{condition:?}").to_lowercase() == label
        })
    }
}

/// One synthetic observation for a city
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub location: CityName,
    pub temperature_celsius: i32,
    pub humidity_percent: u8,
    pub wind_speed_mps: u8,
    pub condition: Condition,
}

/// Sample a report for `city`.
///
/// Every field is drawn independently and uniformly; the condition does not
/// influence the numbers.
pub fn generate<R: Rng>(city: CityName, rng: &mut R) -> WeatherReport {
    let condition = Condition::ALL[rng.gen_range(0..Condition::ALL.len())];
    WeatherReport {
        location: city,
        temperature_celsius: rng.gen_range(TEMPERATURE_RANGE),
        humidity_percent: rng.gen_range(HUMIDITY_RANGE),
        wind_speed_mps: rng.gen_range(WIND_SPEED_RANGE),
        condition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const SAMPLES: usize = 5_000;

    #[test]
    fn test_generated_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..SAMPLES {
            let report = generate(CityName::new("xiva"), &mut rng);
            assert!(TEMPERATURE_RANGE.contains(&report.temperature_celsius));
            assert!(HUMIDITY_RANGE.contains(&report.humidity_percent));
            assert!(WIND_SPEED_RANGE.contains(&report.wind_speed_mps));
            assert!(Condition::ALL.contains(&report.condition));
            assert_eq!(report.location, "xiva");
        }
    }

    #[test]
    fn test_every_value_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut temperatures = HashSet::new();
        let mut humidities = HashSet::new();
        let mut winds = HashSet::new();
        let mut conditions = HashSet::new();
        for _ in 0..SAMPLES {
            let report = generate(CityName::new("nukus"), &mut rng);
            temperatures.insert(report.temperature_celsius);
            humidities.insert(report.humidity_percent);
            winds.insert(report.wind_speed_mps);
            conditions.insert(report.condition);
        }
        assert_eq!(temperatures.len(), TEMPERATURE_RANGE.count());
        assert_eq!(humidities.len(), HUMIDITY_RANGE.count());
        assert_eq!(winds.len(), WIND_SPEED_RANGE.count());
        assert_eq!(conditions.len(), 3);
    }

    #[test]
    fn test_same_seed_gives_same_report() {
        let first = generate(CityName::new("qarshi"), &mut StdRng::seed_from_u64(9));
        let second = generate(CityName::new("qarshi"), &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_condition_labels_round_trip() {
        for condition in Condition::ALL {
            assert_eq!(Condition::from_label(condition.label()), Some(condition));
        }
        assert_eq!(Condition::from_label("RAINY"), Some(Condition::Rainy));
        assert_eq!(Condition::from_label("quyoshli"), Some(Condition::Sunny));
        assert_eq!(Condition::from_label("Snowy"), None);
    }
}
