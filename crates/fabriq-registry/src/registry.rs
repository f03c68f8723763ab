//! The per-base-type factory table and its lifecycle.
//!
//! One [`SharedRegistry`] exists per base type, as a `const`-constructed
//! `static` (usually written by the [`buildable!`](crate::buildable) macro).
//! The backing map does not exist for the whole process lifetime: it is
//! allocated when the reference count moves 0 -> 1 and dropped when it moves
//! back to 0. Acquisition sites can run in any order relative to each other,
//! which is what makes registration safe from independent initializers.

use std::any;
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, warn};
use rustc_hash::FxHashMap;

use fabriq_core::{RegistrationError, Tagged, UNKNOWN_TYPE_NAME};

use crate::factory::Construct;

/// Identity of one name binding, assigned at insertion.
///
/// Ids are monotonic per registry and never reused, so a factory can tell
/// whether the entry currently stored under its name is still its own (see
/// [`SharedRegistry::unbind`]).
pub type BindingId = u64;

/// One registered name -> creation capability entry.
struct Binding<T: ?Sized> {
    name: Arc<str>,
    capability: Arc<dyn Construct<T>>,
    id: BindingId,
}

struct RegistryState<T: ?Sized> {
    /// Live acquisitions. The map exists exactly while this is non-zero.
    refs: usize,
    next_id: BindingId,
    bindings: Option<FxHashMap<Arc<str>, Binding<T>>>,
}

/// Process-wide name-to-factory table for one base type.
///
/// The registry moves through three states: uninitialized (no live
/// acquisition, no map), active (map present, registration and lookup
/// valid), and uninitialized again once the last [`RegistryGuard`] drops.
/// Registration and lookup outside the active state panic; an unknown name
/// during lookup is a normal outcome and yields `None`.
pub struct SharedRegistry<T: ?Sized> {
    state: Mutex<RegistryState<T>>,
}

impl<T: Tagged + ?Sized + 'static> SharedRegistry<T> {
    /// An uninitialized registry. `const`, so statics of this type need no
    /// coordinated initialization across modules.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RegistryState {
                refs: 0,
                next_id: 0,
                bindings: None,
            }),
        }
    }

    /// Take a counted reference to the registry, allocating the backing map
    /// on the 0 -> 1 transition. Dropping the returned guard releases the
    /// reference; the map is torn down when the count returns to 0.
    pub fn acquire(&'static self) -> RegistryGuard<T> {
        let mut state = self.lock();
        state.refs += 1;
        if state.refs == 1 {
            state.bindings = Some(FxHashMap::default());
            debug!("factory registry for `{}` activated", any::type_name::<T>());
        }
        RegistryGuard { registry: self }
    }

    /// Insert a fresh binding for `name`.
    ///
    /// Fails with [`RegistrationError::DuplicateBinding`] if the name is
    /// taken; use [`rebind`](Self::rebind) for shadowing semantics.
    ///
    /// # Panics
    ///
    /// Panics if the registry is uninitialized.
    pub fn bind(
        &self,
        name: Arc<str>,
        capability: Arc<dyn Construct<T>>,
    ) -> Result<BindingId, RegistrationError> {
        Self::check_name(&name)?;
        let mut state = self.lock();
        let state = &mut *state;
        let map = Self::active_mut(&mut state.bindings);
        if map.contains_key(name.as_ref()) {
            return Err(RegistrationError::DuplicateBinding {
                name: name.to_string(),
            });
        }
        let id = state.next_id;
        state.next_id += 1;
        debug!(
            "registering factory `{name}` for `{}`",
            any::type_name::<T>()
        );
        map.insert(Arc::clone(&name), Binding { name, capability, id });
        Ok(id)
    }

    /// Insert a binding for `name`, displacing any existing one.
    ///
    /// Returns the new binding's id and, if the name was already taken, the
    /// id of the binding that was displaced. Overwrites are logged at warn
    /// level so silent shadowing is at least observable.
    ///
    /// # Panics
    ///
    /// Panics if the registry is uninitialized.
    pub fn rebind(
        &self,
        name: Arc<str>,
        capability: Arc<dyn Construct<T>>,
    ) -> Result<(BindingId, Option<BindingId>), RegistrationError> {
        Self::check_name(&name)?;
        let mut state = self.lock();
        let state = &mut *state;
        let map = Self::active_mut(&mut state.bindings);
        let id = state.next_id;
        state.next_id += 1;
        let displaced = map
            .insert(
                Arc::clone(&name),
                Binding {
                    name: Arc::clone(&name),
                    capability,
                    id,
                },
            )
            .map(|previous| previous.id);
        if displaced.is_some() {
            warn!(
                "factory `{name}` for `{}` overrides an existing binding",
                any::type_name::<T>()
            );
        } else {
            debug!(
                "registering factory `{name}` for `{}`",
                any::type_name::<T>()
            );
        }
        Ok((id, displaced))
    }

    /// Remove the binding for `name`, but only if it is still the one
    /// identified by `id`. A factory that has been displaced by a later
    /// `rebind` must not tear down its successor's entry.
    ///
    /// Tolerates an uninitialized registry: teardown paths may race with the
    /// final release.
    pub fn unbind(&self, name: &str, id: BindingId) {
        let mut state = self.lock();
        if let Some(map) = state.bindings.as_mut()
            && map.get(name).is_some_and(|binding| binding.id == id)
        {
            map.remove(name);
            debug!(
                "unregistering factory `{name}` for `{}`",
                any::type_name::<T>()
            );
        }
    }

    /// Build a new instance of the variant registered under `name`.
    ///
    /// Returns `None` for an unknown name; nothing is allocated in that
    /// case. On a hit, the variant is constructed *outside* the registry
    /// lock and stamped with its registration name before being handed to
    /// the caller, who fully owns it.
    ///
    /// # Panics
    ///
    /// Panics if the registry is uninitialized.
    pub fn create(&self, name: &str) -> Option<Box<T>> {
        let (registered, capability) = {
            let state = self.lock();
            let map = Self::active(&state.bindings);
            let binding = map.get(name)?;
            (Arc::clone(&binding.name), Arc::clone(&binding.capability))
        };
        let mut instance = capability.construct();
        instance.set_type_name(&registered);
        Some(instance)
    }

    /// Whether the registry currently has a backing map.
    pub fn is_active(&self) -> bool {
        self.lock().bindings.is_some()
    }

    /// Number of live bindings (0 while uninitialized).
    pub fn len(&self) -> usize {
        self.lock().bindings.as_ref().map_or(0, FxHashMap::len)
    }

    /// Whether no bindings are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `name` currently resolves to a factory.
    pub fn contains(&self, name: &str) -> bool {
        self.lock()
            .bindings
            .as_ref()
            .is_some_and(|map| map.contains_key(name))
    }

    /// Snapshot of the registered names, sorted for determinism.
    pub fn names(&self) -> Vec<Arc<str>> {
        let mut names: Vec<Arc<str>> = self
            .lock()
            .bindings
            .as_ref()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    fn check_name(name: &Arc<str>) -> Result<(), RegistrationError> {
        if name.as_ref() == UNKNOWN_TYPE_NAME {
            return Err(RegistrationError::ReservedName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState<T>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn active<'a>(
        bindings: &'a Option<FxHashMap<Arc<str>, Binding<T>>>,
    ) -> &'a FxHashMap<Arc<str>, Binding<T>> {
        match bindings {
            Some(map) => map,
            None => Self::uninitialized(),
        }
    }

    fn active_mut<'a>(
        bindings: &'a mut Option<FxHashMap<Arc<str>, Binding<T>>>,
    ) -> &'a mut FxHashMap<Arc<str>, Binding<T>> {
        match bindings {
            Some(map) => map,
            None => Self::uninitialized(),
        }
    }

    #[cold]
    fn uninitialized() -> ! {
        panic!(
            "factory registry for `{}` used while uninitialized; \
             register a factory (or hold a RegistryGuard) first",
            any::type_name::<T>()
        )
    }
}

impl<T: Tagged + ?Sized + 'static> Default for SharedRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Counted reference to a [`SharedRegistry`].
///
/// Held by every [`Factory`](crate::Factory); may also be held directly to
/// pin a registry active across a region of code. The drop of the last
/// guard tears down the backing map.
pub struct RegistryGuard<T: Tagged + ?Sized + 'static> {
    registry: &'static SharedRegistry<T>,
}

impl<T: Tagged + ?Sized + 'static> RegistryGuard<T> {
    /// The registry this guard keeps active.
    pub fn registry(&self) -> &'static SharedRegistry<T> {
        self.registry
    }
}

impl<T: Tagged + ?Sized + 'static> Drop for RegistryGuard<T> {
    fn drop(&mut self) {
        let mut state = self.registry.lock();
        state.refs -= 1;
        if state.refs == 0 {
            state.bindings = None;
            debug!(
                "factory registry for `{}` deactivated",
                any::type_name::<T>()
            );
        }
    }
}
