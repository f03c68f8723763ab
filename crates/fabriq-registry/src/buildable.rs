//! The type-level half of the buildable contract.

use fabriq_core::{RegistrationError, Tagged};

use crate::factory::{Factory, VariantOf};
use crate::registry::SharedRegistry;

/// Gives a base type its by-name construction API.
///
/// Implemented once per base trait object, normally by the
/// [`buildable!`](crate::buildable) macro, which supplies the per-type
/// `static` registry. Everything else is a thin facade over
/// [`SharedRegistry`]:
///
/// ```
/// use fabriq_registry::{Buildable, buildable, variant_of};
/// use fabriq_core::{Tagged, TypeTag, delegate_tagged};
///
/// trait Shape: Tagged {
///     fn sides(&self) -> u32;
/// }
/// buildable!(dyn Shape);
///
/// #[derive(Default)]
/// struct Square {
///     tag: TypeTag,
/// }
/// delegate_tagged!(Square { tag });
/// impl Shape for Square {
///     fn sides(&self) -> u32 {
///         4
///     }
/// }
/// variant_of!(dyn Shape: Square);
///
/// let _factory = <dyn Shape>::register_factory::<Square>("square")?;
/// let shape = <dyn Shape>::create("square").expect("registered above");
/// assert_eq!(shape.sides(), 4);
/// assert_eq!(shape.type_name(), "square");
/// # Ok::<(), fabriq_core::RegistrationError>(())
/// ```
pub trait Buildable: Tagged + 'static {
    /// The process-wide registry for this base type.
    fn registry() -> &'static SharedRegistry<Self>;

    /// Build a new instance of the variant registered under `name`, or
    /// `None` if no factory is registered under it.
    ///
    /// # Panics
    ///
    /// Panics if no factory (or guard) currently holds the registry; see
    /// [`SharedRegistry::create`].
    fn create(name: &str) -> Option<Box<Self>> {
        Self::registry().create(name)
    }

    /// Register variant `V` under `name`, returning the owning factory
    /// handle. Equivalent to [`Factory::register`].
    fn register_factory<V>(name: &str) -> Result<Factory<Self>, RegistrationError>
    where
        V: VariantOf<Self>,
    {
        Factory::register::<V>(name)
    }
}
