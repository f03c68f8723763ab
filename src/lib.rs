//! fabriq - a name-keyed factory registry for polymorphic types.
//!
//! Any family of polymorphic types can register concrete variants under
//! string names and later build them by name, without static knowledge of
//! the concrete type at the call site. Each base type gets one process-wide
//! registry; the registry's backing map lives exactly as long as at least
//! one [`Factory`] for that base type does, so registration sites never
//! depend on initialization order relative to each other.
//!
//! # Example
//!
//! ```
//! use fabriq::{Buildable, Factory, Tagged, TypeTag, buildable, delegate_tagged, variant_of};
//!
//! // A base trait opts in by requiring `Tagged` and attaching a registry.
//! trait Greeter: Tagged {
//!     fn greet(&self) -> String;
//! }
//! buildable!(dyn Greeter);
//!
//! #[derive(Default)]
//! struct Plain {
//!     tag: TypeTag,
//! }
//! delegate_tagged!(Plain { tag });
//! impl Greeter for Plain {
//!     fn greet(&self) -> String {
//!         format!("hello from {}", self.type_name())
//!     }
//! }
//! variant_of!(dyn Greeter: Plain);
//!
//! // Explicit registration step: the factory handle keeps the name bound.
//! let _factory = Factory::<dyn Greeter>::register::<Plain>("plain")?;
//!
//! let greeter = <dyn Greeter>::create("plain").expect("registered above");
//! assert_eq!(greeter.greet(), "hello from plain");
//!
//! // Unknown names are a normal outcome, not an error.
//! assert!(<dyn Greeter>::create("fancy").is_none());
//! # Ok::<(), fabriq::RegistrationError>(())
//! ```

pub use fabriq_core::{RegistrationError, Tagged, TypeTag, UNKNOWN_TYPE_NAME, delegate_tagged};
pub use fabriq_registry::{
    BindingId, Buildable, Construct, Factory, RegistryGuard, SharedRegistry, VariantOf, buildable,
    variant_of,
};
