use super::*;
use crate::attr::value::Length;

#[test]
fn current_prefers_animated_override() {
    let mut slot = Animated::new(Length::percent(-10.0));
    assert_eq!(*slot.current(), Length::percent(-10.0));
    assert!(!slot.is_animated());

    slot.set_animated(Length::number(4.0));
    assert_eq!(*slot.current(), Length::number(4.0));
    assert_eq!(*slot.base(), Length::percent(-10.0));
    assert!(slot.is_animated());
}

#[test]
fn clear_restores_base_value() {
    let mut slot = Animated::new(3);
    slot.set_animated(9);
    slot.clear_animated();
    assert_eq!(*slot.current(), 3);
    assert!(!slot.is_animated());
}

#[test]
fn set_base_keeps_override_active() {
    let mut slot = Animated::new(false);
    slot.set_animated(true);
    slot.set_base(false);
    assert!(*slot.current());
    assert!(!*slot.base());
}

static UNITS: &[&str] = &["", "userSpaceOnUse", "objectBoundingBox"];

#[test]
fn enumeration_maps_idents_to_indices() {
    let mut slot = AnimatedEnumeration::new(UNITS, 2);
    assert_eq!(slot.current_ident(), "objectBoundingBox");

    slot.set_base_ident("userSpaceOnUse").unwrap();
    assert_eq!(slot.base(), 1);
    assert_eq!(slot.base_ident(), "userSpaceOnUse");
}

#[test]
fn enumeration_rejects_unknown_idents() {
    let mut slot = AnimatedEnumeration::new(UNITS, 2);
    assert!(slot.set_base_ident("bogus").is_err());
    // The unknown sentinel is not addressable by name either.
    assert!(slot.set_base_ident("").is_err());
}

#[test]
fn enumeration_override_and_clear() {
    let mut slot = AnimatedEnumeration::new(UNITS, 2);
    slot.set_animated(1);
    assert_eq!(slot.current(), 1);
    assert_eq!(slot.base(), 2);
    slot.clear_animated();
    assert_eq!(slot.current(), 2);
}
