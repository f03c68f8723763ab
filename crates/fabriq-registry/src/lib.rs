//! Name-keyed factory registries.
//!
//! This crate provides [`SharedRegistry`], a process-wide name-to-factory
//! table instantiated once per base type, together with the [`Factory`]
//! handle that populates it and the [`Buildable`] capability that gives a
//! base type its `create`-by-name API.
//!
//! # Lifecycle
//!
//! A registry is a `const`-constructed `static`, so it needs no coordinated
//! initialization across modules. Its backing map is allocated when the
//! first [`Factory`] (or raw [`RegistryGuard`]) acquires it and dropped when
//! the last one goes away; registration and lookup are only valid in
//! between. Violating that contract is a programming error and panics.
//!
//! # Thread safety
//!
//! All state sits behind one mutex per base type, so factories may be
//! constructed from concurrent initializers. Lookup never runs variant
//! construction code under the lock.

mod buildable;
mod factory;
mod macros;
mod registry;

pub use buildable::Buildable;
pub use factory::{Construct, Factory, VariantOf};
pub use registry::{BindingId, RegistryGuard, SharedRegistry};
