//! Integration tests for registry lifetime.
//!
//! Each test declares its own base trait, so the per-base-type statics are
//! private to the test and the parallel test runner cannot interleave
//! lifecycle transitions.

use fabriq::{Buildable, Factory, Tagged, TypeTag, buildable, delegate_tagged, variant_of};

#[test]
fn test_registry_activates_with_first_factory() {
    trait Gauge: Tagged {
        fn level(&self) -> u8;
    }
    buildable!(dyn Gauge);

    #[derive(Default)]
    struct Half {
        tag: TypeTag,
    }
    delegate_tagged!(Half { tag });
    impl Gauge for Half {
        fn level(&self) -> u8 {
            50
        }
    }
    variant_of!(dyn Gauge: Half);

    assert!(!<dyn Gauge>::registry().is_active());

    let factory = Factory::<dyn Gauge>::register::<Half>("half").unwrap();
    assert!(<dyn Gauge>::registry().is_active());
    assert_eq!(<dyn Gauge>::registry().len(), 1);
    assert_eq!(<dyn Gauge>::create("half").unwrap().level(), 50);

    drop(factory);
    assert!(!<dyn Gauge>::registry().is_active());
}

#[test]
fn test_registry_survives_until_last_factory_drops() {
    trait Gauge: Tagged {
        fn level(&self) -> u8;
    }
    buildable!(dyn Gauge);

    #[derive(Default)]
    struct Full {
        tag: TypeTag,
    }
    delegate_tagged!(Full { tag });
    impl Gauge for Full {
        fn level(&self) -> u8 {
            100
        }
    }
    variant_of!(dyn Gauge: Full);

    let first = Factory::<dyn Gauge>::register::<Full>("first").unwrap();
    let second = Factory::<dyn Gauge>::register::<Full>("second").unwrap();

    drop(first);
    assert!(<dyn Gauge>::registry().is_active());
    assert_eq!(<dyn Gauge>::create("second").unwrap().level(), 100);

    drop(second);
    assert!(!<dyn Gauge>::registry().is_active());
}

#[test]
fn test_fresh_round_after_teardown() {
    trait Gauge: Tagged {
        fn level(&self) -> u8;
    }
    buildable!(dyn Gauge);

    #[derive(Default)]
    struct Empty {
        tag: TypeTag,
    }
    delegate_tagged!(Empty { tag });
    impl Gauge for Empty {
        fn level(&self) -> u8 {
            0
        }
    }
    variant_of!(dyn Gauge: Empty);

    let factory = Factory::<dyn Gauge>::register::<Empty>("round-one").unwrap();
    drop(factory);

    // A second registration round starts from an empty map.
    let _factory = Factory::<dyn Gauge>::register::<Empty>("round-two").unwrap();
    assert!(<dyn Gauge>::create("round-one").is_none());
    assert!(<dyn Gauge>::create("round-two").is_some());
}

#[test]
fn test_guard_pins_registry_active() {
    trait Gauge: Tagged {
        fn level(&self) -> u8;
    }
    buildable!(dyn Gauge);

    #[derive(Default)]
    struct Idle {
        tag: TypeTag,
    }
    delegate_tagged!(Idle { tag });
    impl Gauge for Idle {
        fn level(&self) -> u8 {
            1
        }
    }
    variant_of!(dyn Gauge: Idle);

    let guard = <dyn Gauge>::registry().acquire();

    let factory = Factory::<dyn Gauge>::register::<Idle>("idle").unwrap();
    drop(factory);

    // The guard alone keeps the registry active; the name is simply gone.
    assert!(<dyn Gauge>::registry().is_active());
    assert!(<dyn Gauge>::create("idle").is_none());

    drop(guard);
    assert!(!<dyn Gauge>::registry().is_active());
}

#[test]
#[should_panic(expected = "used while uninitialized")]
fn test_create_without_any_factory_panics() {
    trait Gauge: Tagged {
        fn level(&self) -> u8;
    }
    buildable!(dyn Gauge);

    let _ = <dyn Gauge>::create("anything");
}
