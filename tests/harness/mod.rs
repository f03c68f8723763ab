//! Shared demo hierarchy for the integration suites.
//!
//! A small int-and-string "filter" family: `Identity` returns its inputs
//! unchanged, `Shrink` makes them smaller (decrement, lowercase), `Grow`
//! makes them bigger (increment, uppercase). These are plain consumers of
//! the public contract; nothing in here touches registry internals.
#![allow(dead_code)]

use fabriq::{Factory, RegistrationError, Tagged, TypeTag, buildable, delegate_tagged, variant_of};

pub trait Filter: Tagged {
    fn filter_int(&self, input: i64) -> i64;
    fn filter_str(&self, input: &str) -> String;
}
buildable!(dyn Filter);

#[derive(Default)]
pub struct Identity {
    tag: TypeTag,
}
delegate_tagged!(Identity { tag });
impl Filter for Identity {
    fn filter_int(&self, input: i64) -> i64 {
        input
    }

    fn filter_str(&self, input: &str) -> String {
        input.to_owned()
    }
}

#[derive(Default)]
pub struct Shrink {
    tag: TypeTag,
}
delegate_tagged!(Shrink { tag });
impl Filter for Shrink {
    fn filter_int(&self, input: i64) -> i64 {
        input - 1
    }

    fn filter_str(&self, input: &str) -> String {
        input.to_lowercase()
    }
}

#[derive(Default)]
pub struct Grow {
    tag: TypeTag,
}
delegate_tagged!(Grow { tag });
impl Filter for Grow {
    fn filter_int(&self, input: i64) -> i64 {
        input + 1
    }

    fn filter_str(&self, input: &str) -> String {
        input.to_uppercase()
    }
}

variant_of!(dyn Filter: Identity, Shrink, Grow);

/// Explicit startup registration for the demo family.
///
/// Names are prefixed so concurrently running tests sharing the
/// `dyn Filter` registry cannot collide. The returned handles keep the
/// registrations alive; dropping them unregisters.
pub fn register_filters(prefix: &str) -> Result<Vec<Factory<dyn Filter>>, RegistrationError> {
    Ok(vec![
        Factory::register::<Identity>(&format!("{prefix}.identity"))?,
        Factory::register::<Shrink>(&format!("{prefix}.shrink"))?,
        Factory::register::<Grow>(&format!("{prefix}.grow"))?,
    ])
}
