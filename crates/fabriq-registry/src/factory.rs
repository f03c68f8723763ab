//! Creation capabilities and the factory handle.
//!
//! A [`Construct`] is the capability stored in a registry: it can produce
//! one new instance of the base type. [`Factory`] is the owning handle a
//! program holds for as long as it wants a name to stay registered; its
//! construction is the registration step and its drop is the
//! unregistration step, so registration lifetime is explicit in the code
//! instead of implicit in link order.

use std::marker::PhantomData;
use std::sync::Arc;

use fabriq_core::RegistrationError;

use crate::buildable::Buildable;
use crate::registry::{BindingId, RegistryGuard};

/// The creation capability: produce one new instance of `T`.
///
/// Registries store these as `Arc<dyn Construct<T>>`. The bound variant
/// constructors used by [`Factory`] are stateless; hand-written impls may
/// carry state if a variant needs construction context.
pub trait Construct<T: ?Sized>: Send + Sync + 'static {
    /// Build one new instance. Ownership transfers fully to the caller.
    fn construct(&self) -> Box<T>;
}

/// Compile-time proof that a concrete type is substitutable for a base.
///
/// Registering `V` under `dyn Base` requires `V: VariantOf<dyn Base>`; the
/// impl is where the unsized coercion happens, so an invalid base/variant
/// pairing fails to compile rather than misbehaving at runtime. Written by
/// the [`variant_of!`](crate::variant_of) macro.
pub trait VariantOf<T: Buildable + ?Sized>: Default + 'static {
    /// Upcast a freshly built variant to the base type.
    fn into_base(variant: Box<Self>) -> Box<T>;
}

/// Stateless [`Construct`] impl for a `(base, variant)` pair.
struct VariantConstructor<T: Buildable + ?Sized, V: VariantOf<T>> {
    _marker: PhantomData<fn() -> (Box<T>, V)>,
}

impl<T, V> Construct<T> for VariantConstructor<T, V>
where
    T: Buildable + ?Sized,
    V: VariantOf<T>,
{
    fn construct(&self) -> Box<T> {
        V::into_base(Box::new(V::default()))
    }
}

/// Owning handle for one name binding in the registry of base type `T`.
///
/// Constructing a factory acquires the registry (allocating it on first
/// acquisition) and binds the name; dropping it removes the binding it
/// still owns and releases the registry, tearing the map down when the
/// last factory for `T` goes away. Factories are typically created during
/// an explicit startup step and held for the life of the program.
pub struct Factory<T: Buildable + ?Sized> {
    name: Arc<str>,
    id: BindingId,
    capability: Arc<dyn Construct<T>>,
    guard: RegistryGuard<T>,
}

impl<T: Buildable + ?Sized> Factory<T> {
    /// Register variant `V` under `name`, strictly: an already-taken name
    /// is a [`RegistrationError::DuplicateBinding`].
    pub fn register<V: VariantOf<T>>(name: &str) -> Result<Self, RegistrationError> {
        let guard = T::registry().acquire();
        let name: Arc<str> = Arc::from(name);
        let capability = Self::capability::<V>();
        let id = guard
            .registry()
            .bind(Arc::clone(&name), Arc::clone(&capability))?;
        Ok(Self {
            name,
            id,
            capability,
            guard,
        })
    }

    /// Register variant `V` under `name`, displacing any existing binding.
    /// The displaced factory's handle stays valid but its name no longer
    /// resolves to it.
    pub fn register_overriding<V: VariantOf<T>>(name: &str) -> Result<Self, RegistrationError> {
        let guard = T::registry().acquire();
        let name: Arc<str> = Arc::from(name);
        let capability = Self::capability::<V>();
        let (id, _displaced) = guard
            .registry()
            .rebind(Arc::clone(&name), Arc::clone(&capability))?;
        Ok(Self {
            name,
            id,
            capability,
            guard,
        })
    }

    /// The name this factory registered.
    pub fn type_name(&self) -> &str {
        &self.name
    }

    /// Build one instance directly, without going through the name lookup.
    /// The instance is stamped with the factory's registered name exactly
    /// as registry-created instances are.
    pub fn create(&self) -> Box<T> {
        let mut instance = self.capability.construct();
        instance.set_type_name(&self.name);
        instance
    }

    fn capability<V: VariantOf<T>>() -> Arc<dyn Construct<T>> {
        Arc::new(VariantConstructor::<T, V> {
            _marker: PhantomData,
        })
    }
}

impl<T: Buildable + ?Sized> std::fmt::Debug for Factory<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory")
            .field("name", &self.name)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<T: Buildable + ?Sized> Drop for Factory<T> {
    fn drop(&mut self) {
        // Only removes the entry if it is still ours; a displaced factory
        // must leave its successor's binding in place. The guard field
        // drops afterwards and releases the registry itself.
        self.guard.registry().unbind(&self.name, self.id);
    }
}
