//! Wiring macros for attaching the factory system to a base trait.

/// Attaches the [`Buildable`](crate::Buildable) capability to a base trait
/// object, declaring its process-wide registry.
///
/// The registry `static` is `const`-constructed, so no initialization-order
/// coordination is needed between the modules that register into it.
///
/// ```ignore
/// trait Filter: Tagged { /* ... */ }
/// buildable!(dyn Filter);
/// ```
#[macro_export]
macro_rules! buildable {
    (dyn $base:path) => {
        impl $crate::Buildable for dyn $base {
            fn registry() -> &'static $crate::SharedRegistry<Self> {
                static REGISTRY: $crate::SharedRegistry<dyn $base> =
                    $crate::SharedRegistry::new();
                &REGISTRY
            }
        }
    };
}

/// Declares concrete types substitutable for a base trait, writing their
/// [`VariantOf`](crate::VariantOf) impls. The body of each impl is an
/// unsized coercion, so a type that does not implement the base trait is a
/// compile error at the macro invocation.
///
/// ```ignore
/// variant_of!(dyn Filter: Identity, Shrink, Grow);
/// ```
#[macro_export]
macro_rules! variant_of {
    (dyn $base:path: $($variant:ty),+ $(,)?) => {
        $(
            impl $crate::VariantOf<dyn $base> for $variant {
                fn into_base(
                    variant: ::std::boxed::Box<Self>,
                ) -> ::std::boxed::Box<dyn $base> {
                    variant
                }
            }
        )+
    };
}
