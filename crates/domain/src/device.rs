//! Device — a receiver the remote control can operate.
//!
//! Devices carry identity only. A device announces every action it performs
//! but keeps no record of whether it is currently on or off, so turning a
//! light on twice in a row simply announces "on" twice.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

/// The family a receiver belongs to. Drives icons and wording of status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Light,
    Television,
}

impl DeviceKind {
    /// Icon prefixed to the device's status lines.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1f4a1}",
            Self::Television => "\u{1f4fa}",
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Television => f.write_str("television"),
        }
    }
}

/// A receiver exposing a mutually-inverse on/off action pair.
///
/// Both actions are infallible and return nothing; their only effect is the
/// status message the implementation emits.
pub trait Switchable {
    /// Identity of this receiver.
    fn id(&self) -> DeviceId;

    /// Which family this receiver belongs to.
    fn kind(&self) -> DeviceKind;

    /// Perform the "on" action.
    fn turn_on(&self);

    /// Perform the "off" action.
    fn turn_off(&self);
}
