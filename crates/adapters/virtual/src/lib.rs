//! # homeremote-adapter-virtual
//!
//! Simulated receivers for the remote control.
//!
//! ## Provided devices
//!
//! | Device | Kind | Behaviour |
//! |--------|------|-----------|
//! | [`VirtualLight`] | `light` | Announces on/off through its sink |
//! | [`VirtualTelevision`] | `television` | Announces on/off through its sink |
//!
//! Neither device remembers its state: the last status message it published
//! is the only record of whether it is on.
//!
//! ## Dependency rule
//!
//! Depends on `homeremote-app` (port traits) and `homeremote-domain` only.

mod devices;

pub use devices::{VirtualLight, VirtualTelevision};

use homeremote_domain::command::{TurnOff, TurnOn};

/// Turns a [`VirtualLight`] on.
pub type LightOn<S> = TurnOn<VirtualLight<S>>;
/// Turns a [`VirtualLight`] off.
pub type LightOff<S> = TurnOff<VirtualLight<S>>;
/// Turns a [`VirtualTelevision`] on.
pub type TelevisionOn<S> = TurnOn<VirtualTelevision<S>>;
/// Turns a [`VirtualTelevision`] off.
pub type TelevisionOff<S> = TurnOff<VirtualTelevision<S>>;
