use super::*;

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::export::document::MemoryDocument;

#[derive(Debug, PartialEq)]
struct Blend {
    mode: String,
}

impl Blend {
    fn new(mode: &str) -> Arc<dyn CustomComposite> {
        Arc::new(Self {
            mode: mode.to_owned(),
        })
    }
}

impl CustomComposite for Blend {
    fn name(&self) -> &str {
        &self.mode
    }
}

struct CountingHandler {
    calls: Cell<u32>,
    decline: Cell<bool>,
    with_def: bool,
}

impl CountingHandler {
    fn new(with_def: bool) -> Arc<Self> {
        Arc::new(Self {
            calls: Cell::new(0),
            decline: Cell::new(false),
            with_def,
        })
    }
}

impl ExtensionHandler for CountingHandler {
    fn handle_composite(
        &self,
        _composite: &dyn CustomComposite,
        doc: &mut dyn DocumentFactory,
    ) -> Option<Arc<CompositeDescriptor>> {
        self.calls.set(self.calls.get() + 1);
        if self.decline.get() {
            return None;
        }
        let mut attrs = BTreeMap::new();
        attrs.insert("filter".to_owned(), "url(#blend)".to_owned());
        let desc = if self.with_def {
            let def = doc.create_element("filter");
            CompositeDescriptor::with_def(attrs, def)
        } else {
            CompositeDescriptor::new(attrs)
        };
        Some(Arc::new(desc))
    }
}

fn converter(handler: &Arc<CountingHandler>) -> CustomCompositeConverter {
    let capability: Arc<dyn ExtensionHandler> = handler.clone();
    CustomCompositeConverter::new(Some(capability)).unwrap()
}

#[test]
fn missing_handler_fails_at_construction() {
    let err = CustomCompositeConverter::new(None).unwrap_err();
    assert!(matches!(err, InkwireError::InvalidConfiguration(_)));
}

#[test]
fn repeat_conversions_share_one_descriptor() {
    let handler = CountingHandler::new(false);
    let mut conv = converter(&handler);
    let mut doc = MemoryDocument::new();
    let blend = Blend::new("screen");

    let first = conv.convert(&blend, &mut doc).unwrap();
    let second = conv.convert(&blend, &mut doc).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(handler.calls.get(), 1);
}

#[test]
fn declined_conversions_are_not_cached() {
    let handler = CountingHandler::new(false);
    let mut conv = converter(&handler);
    let mut doc = MemoryDocument::new();
    let blend = Blend::new("screen");

    handler.decline.set(true);
    assert!(conv.convert(&blend, &mut doc).is_none());
    assert_eq!(handler.calls.get(), 1);

    // The handler is consulted again once it can convert.
    handler.decline.set(false);
    assert!(conv.convert(&blend, &mut doc).is_some());
    assert_eq!(handler.calls.get(), 2);
}

#[test]
fn structurally_equal_composites_convert_independently() {
    let handler = CountingHandler::new(false);
    let mut conv = converter(&handler);
    let mut doc = MemoryDocument::new();

    let a = Blend::new("screen");
    let b = Blend::new("screen");
    let desc_a = conv.convert(&a, &mut doc).unwrap();
    let desc_b = conv.convert(&b, &mut doc).unwrap();

    assert_eq!(handler.calls.get(), 2);
    assert!(!Arc::ptr_eq(&desc_a, &desc_b));
}

#[test]
fn distinct_defs_are_both_registered_in_first_seen_order() {
    let handler = CountingHandler::new(true);
    let mut conv = converter(&handler);
    let mut doc = MemoryDocument::new();

    let a = Blend::new("screen");
    let b = Blend::new("screen");
    let desc_a = conv.convert(&a, &mut doc).unwrap();
    let desc_b = conv.convert(&b, &mut doc).unwrap();

    // Attribute-wise identical descriptors still carry distinct defs.
    assert_eq!(desc_a.attributes, desc_b.attributes);
    assert_ne!(desc_a.def, desc_b.def);
    assert_eq!(
        conv.defs().as_slice(),
        &[desc_a.def.unwrap(), desc_b.def.unwrap()]
    );
}

#[test]
fn repeat_conversion_does_not_duplicate_defs() {
    let handler = CountingHandler::new(true);
    let mut conv = converter(&handler);
    let mut doc = MemoryDocument::new();
    let blend = Blend::new("screen");

    conv.convert(&blend, &mut doc).unwrap();
    conv.convert(&blend, &mut doc).unwrap();
    assert_eq!(conv.defs().len(), 1);
}
