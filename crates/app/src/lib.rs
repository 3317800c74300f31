//! # homeremote-app
//!
//! Application layer — the **invoker** and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the outbound port adapters must implement:
//!   - `StatusSink` — receives every observable status message
//! - Provide the driving use-case:
//!   - `RemoteControl` — bind commands to buttons, press them, undo them
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (`RecordingSink`)
//!
//! ## Dependency rule
//! Depends on `homeremote-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod recorder;
pub mod remote_control;
