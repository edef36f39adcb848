//! City names and the fixed allow-list they are validated against

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// Identifiers accepted by the lookup, in display order.
pub const UZBEK_CITIES: [&str; 12] = [
    "toshkent",
    "samarqand",
    "buxoro",
    "andijon",
    "namangan",
    "fargona",
    "qarshi",
    "nukus",
    "xiva",
    "termiz",
    "jizzax",
    "guliston",
];

/// A city identifier exactly as the user typed it. No normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CityName(String);

impl CityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CityName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for CityName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CityName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered, immutable set of known cities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CityAllowList {
    cities: Vec<CityName>,
}

impl CityAllowList {
    /// Build an allow-list, dropping repeated entries but keeping first-seen order.
    pub fn new<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<CityName> = Vec::new();
        for city in cities {
            let city = CityName::new(city);
            if !unique.contains(&city) {
                unique.push(city);
            }
        }
        Self { cities: unique }
    }

    /// The twelve regional centres the widget knows about.
    pub fn uzbek() -> Self {
        Self::new(UZBEK_CITIES)
    }

    pub fn contains(&self, query: &str) -> bool {
        self.cities.iter().any(|city| city.as_str() == query)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CityName> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl Default for CityAllowList {
    fn default() -> Self {
        Self::uzbek()
    }
}

/// Check `query` against the allow-list.
///
/// Matching is exact and case-sensitive: surrounding whitespace or a capital
/// letter make the query unknown. The empty string is always unknown.
pub fn validate(query: &str, allow_list: &CityAllowList) -> Result<CityName, ErrorKind> {
    if allow_list.contains(query) {
        Ok(CityName::new(query))
    } else {
        Err(ErrorKind::UnknownCity)
    }
}
