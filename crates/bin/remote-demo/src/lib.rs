//! # remote-demo
//!
//! Composition root for the remote control demo.
//!
//! ## Responsibilities
//! - Load configuration (optional TOML file, env var overrides)
//! - Construct the virtual receivers and their command pairs
//! - Construct the remote control, injecting the status sink
//! - Drive the canonical press sequence
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod config;
pub mod scenario;
