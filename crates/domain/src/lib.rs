//! # homeremote-domain
//!
//! Pure domain model for the homeremote remote control.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **power states** and **device kinds** (lights, televisions, …)
//! - Define the **receiver** capability ([`device::Switchable`])
//! - Define **commands** ([`command::Command`]) binding one action and its inverse
//!   to a single receiver
//! - Define **status messages** emitted by receivers and the remote, and their
//!   localised rendering
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Output boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod command;
pub mod device;
pub mod language;
pub mod power;
pub mod status;
