use super::*;

#[test]
fn create_element_hands_out_sequential_ids() {
    let mut doc = MemoryDocument::new();
    assert!(doc.is_empty());
    let a = doc.create_element("filter");
    let b = doc.create_element("image");
    assert_ne!(a, b);
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.element(a).unwrap().tag, "filter");
    assert_eq!(doc.element(b).unwrap().tag, "image");
}

#[test]
fn set_attribute_overwrites_by_name() {
    let mut doc = MemoryDocument::new();
    let el = doc.create_element("image");
    doc.set_attribute(el, "width", "10");
    doc.set_attribute(el, "width", "20");
    assert_eq!(
        doc.element(el).unwrap().attributes.get("width").map(String::as_str),
        Some("20")
    );
}

#[test]
fn append_child_preserves_insertion_order() {
    let mut doc = MemoryDocument::new();
    let defs = doc.create_element("defs");
    let a = doc.create_element("filter");
    let b = doc.create_element("filter");
    doc.append_child(defs, a);
    doc.append_child(defs, b);
    assert_eq!(doc.element(defs).unwrap().children, vec![a, b]);
}

#[test]
fn foreign_handles_resolve_to_none() {
    let doc = MemoryDocument::new();
    assert!(doc.element(ElementId(7)).is_none());
}
