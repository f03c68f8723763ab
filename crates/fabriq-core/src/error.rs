//! Error types for factory registration.
//!
//! Lookup misses are deliberately *not* errors: asking a registry to build
//! an unregistered name is an expected outcome and surfaces as `None` from
//! `create`. Only registration itself can fail.

use thiserror::Error;

/// Errors that occur while binding a factory into a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A factory with this name already exists for the base type.
    ///
    /// Returned by the strict registration path. Callers that want
    /// shadowing semantics use the overriding path instead, which never
    /// produces this error.
    #[error("duplicate binding: a factory named '{name}' is already registered for this base type")]
    DuplicateBinding {
        /// The name that collided.
        name: String,
    },

    /// The name is reserved and cannot be bound.
    ///
    /// The `"unknown"` sentinel marks instances that were never produced
    /// through a registry; binding a factory under it would make type tags
    /// ambiguous.
    #[error("reserved name: '{name}' cannot be used as a factory name")]
    ReservedName {
        /// The rejected name.
        name: String,
    },
}
