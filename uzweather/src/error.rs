//! Lookup errors surfaced to the user

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Why a lookup was rejected.
///
/// Rejections are ordinary state, not faults: the reducer stores them in
/// `RequestState::Rejected` and the renderer shows the message until the user
/// submits a valid city.
#[derive(
    thiserror::Error, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The submitted text is not an exact entry of the allow-list.
    #[error("Aka iltimos brornima yozib keyin btn ni bosing")]
    UnknownCity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_city_message_is_user_facing() {
        let message = ErrorKind::UnknownCity.to_string();
        assert!(!message.is_empty());
        assert!(message.starts_with("Aka"));
    }

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&ErrorKind::UnknownCity).unwrap();
        assert_eq!(json, "\"unknown_city\"");
    }
}
