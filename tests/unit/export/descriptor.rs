use super::*;

use std::collections::BTreeMap;

#[test]
fn definition_set_deduplicates_by_identity() {
    let mut defs = DefinitionSet::new();
    assert!(defs.insert(ElementId(3)));
    assert!(defs.insert(ElementId(1)));
    assert!(!defs.insert(ElementId(3)));
    assert_eq!(defs.len(), 2);
}

#[test]
fn definition_set_preserves_first_seen_order() {
    let mut defs = DefinitionSet::new();
    defs.insert(ElementId(3));
    defs.insert(ElementId(1));
    defs.insert(ElementId(2));
    defs.insert(ElementId(1));
    assert_eq!(defs.as_slice(), &[ElementId(3), ElementId(1), ElementId(2)]);
}

#[test]
fn descriptor_serializes_to_stable_json() {
    let mut attrs = BTreeMap::new();
    attrs.insert("filter".to_owned(), "url(#blend)".to_owned());
    let desc = CompositeDescriptor::with_def(attrs, ElementId(0));

    let json = serde_json::to_value(&desc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "attributes": { "filter": "url(#blend)" },
            "def": 0,
        })
    );
}
