//! Error types for component binding.
//!
//! The registry keeps its recoverable failure surface deliberately small:
//! binding is the only operation that can refuse a well-formed call, and it
//! reports that refusal by value. Lookups and unbinds express "no such
//! mapping" as an absent `Option`, which is not an error. Fatal conditions
//! (id-space exhaustion, allocation failure during growth) abort instead of
//! travelling through this channel, and never leave a half-mutated store
//! behind.
//!
//! ## Goals
//! * **Specificity:** each variant models a single failure mode.
//! * **Ergonomics:** the type implements [`std::error::Error`] and
//!   [`fmt::Display`], so it composes with `?` and error-reporting crates.
//! * **Actionability:** [`BindError::description`] exposes the stable
//!   human-readable string for each variant, suitable for logs.

use std::fmt;


/// Reasons a `bind` call can be refused.
///
/// Returned by value from [`SparseSet::bind`](crate::SparseSet::bind) and
/// [`Registry::bind`](crate::Registry::bind). A refused bind leaves the
/// registry and every store unchanged.
///
/// ### Example
/// ```
/// use ecs_registry::{BindError, Registry};
///
/// let mut registry = Registry::new();
/// let ghost = 7; // never created
/// assert_eq!(registry.bind(ghost, 1u32), Err(BindError::DeadEntity));
/// ```

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindError {
    /// The key was the reserved null id.
    InvalidKey,

    /// The target entity was killed or never created.
    DeadEntity,
}

impl BindError {
    /// Returns the stable human-readable description of this error.
    pub const fn description(self) -> &'static str {
        match self {
            BindError::InvalidKey => "key must be less than the null id",
            BindError::DeadEntity => "entity must be alive",
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl std::error::Error for BindError {}

/// Result of a binding operation.
pub type BindResult = Result<(), BindError>;
