//! Power state — the two observable states a switchable receiver announces.

use serde::{Deserialize, Serialize};

/// Whether a receiver is powered on or off.
///
/// Receivers do not store this value; it only travels inside the
/// [`StatusMessage`](crate::status::StatusMessage) they emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    Off,
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_lowercase_variant_name() {
        assert_eq!(PowerState::On.to_string(), "on");
        assert_eq!(PowerState::Off.to_string(), "off");
    }

    #[test]
    fn should_serialize_as_lowercase_string() {
        assert_eq!(serde_json::to_string(&PowerState::On).unwrap(), "\"on\"");
        let parsed: PowerState = serde_json::from_str("\"off\"").unwrap();
        assert_eq!(parsed, PowerState::Off);
    }
}
