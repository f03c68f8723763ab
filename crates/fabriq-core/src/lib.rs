//! Core types for the fabriq factory system.
//!
//! This crate holds the pieces that do not depend on the registry itself:
//! the [`Tagged`] capability that instances carry so they can round-trip the
//! name they were created under, and the error hierarchy used by
//! registration.

mod error;
mod tag;

pub use error::RegistrationError;
pub use tag::{Tagged, TypeTag, UNKNOWN_TYPE_NAME};
