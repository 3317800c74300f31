//! Common error types used across the workspace.
//!
//! The remote control itself cannot fail: unbound buttons are no-ops and an
//! empty history is only reported. Errors only arise at the edges, when text
//! coming from configuration is turned into domain values.

/// A textual value did not name any known variant of a domain enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownVariantError {
    /// What was being parsed, e.g. `"language"`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownVariantError {
    /// Build an error for the given kind and offending input.
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
