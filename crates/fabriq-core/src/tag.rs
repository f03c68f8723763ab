//! Instance-side type tagging.
//!
//! Every object produced through a registry carries a redundant copy of the
//! name it was created under. The registry stamps the name right after
//! construction; application code only reads it (for example to persist the
//! object under a name that can later be fed back to `create`).

/// Sentinel reported by instances that were never produced through a
/// registry.
pub const UNKNOWN_TYPE_NAME: &str = "unknown";

/// Storage for the registration name carried by an instance.
///
/// Variants embed one of these and delegate [`Tagged`] to it with
/// [`delegate_tagged!`](crate::delegate_tagged). The default value reports
/// [`UNKNOWN_TYPE_NAME`] until a factory stamps the real name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTag {
    name: String,
}

impl TypeTag {
    /// A tag holding the `"unknown"` sentinel.
    pub fn new() -> Self {
        Self {
            name: UNKNOWN_TYPE_NAME.to_owned(),
        }
    }

    /// The name currently carried by the tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the carried name.
    pub fn set(&mut self, name: &str) {
        name.clone_into(&mut self.name);
    }

    /// Whether the tag still holds the sentinel.
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_TYPE_NAME
    }
}

impl Default for TypeTag {
    fn default() -> Self {
        Self::new()
    }
}

/// The instance half of the buildable contract.
///
/// A base type opts into by-name construction by requiring this as a
/// supertrait. `set_type_name` is called by the factory immediately after
/// construction; application code is not expected to call it directly.
pub trait Tagged {
    /// The name this instance was created under, or the `"unknown"`
    /// sentinel.
    fn type_name(&self) -> &str;

    /// Store the creation name on the instance.
    fn set_type_name(&mut self, name: &str);
}

/// Implements [`Tagged`] for a type by delegating to a [`TypeTag`] field.
///
/// ```
/// use fabriq_core::{delegate_tagged, Tagged, TypeTag, UNKNOWN_TYPE_NAME};
///
/// #[derive(Default)]
/// struct Blur {
///     tag: TypeTag,
/// }
/// delegate_tagged!(Blur { tag });
///
/// let blur = Blur::default();
/// assert_eq!(blur.type_name(), UNKNOWN_TYPE_NAME);
/// ```
#[macro_export]
macro_rules! delegate_tagged {
    ($ty:ty { $field:ident }) => {
        impl $crate::Tagged for $ty {
            fn type_name(&self) -> &str {
                self.$field.name()
            }

            fn set_type_name(&mut self, name: &str) {
                self.$field.set(name);
            }
        }
    };
}
