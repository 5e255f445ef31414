use std::collections::{BTreeMap, HashSet};

use crate::export::document::ElementId;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Result of converting one runtime graphics object into SVG form.
///
/// Attribute/value pairs to apply to the consuming element, plus an optional
/// auxiliary definition element destined for a `<defs>` section. Descriptors
/// are immutable once produced and shared by reference across repeat
/// encounters of the same object.
pub struct CompositeDescriptor {
    /// Attributes in stable name order.
    pub attributes: BTreeMap<String, String>,
    /// Auxiliary definition element, if the conversion produced one.
    pub def: Option<ElementId>,
}

impl CompositeDescriptor {
    /// Descriptor with attributes only.
    pub fn new(attributes: BTreeMap<String, String>) -> Self {
        Self {
            attributes,
            def: None,
        }
    }

    /// Descriptor with attributes and a definition element.
    pub fn with_def(attributes: BTreeMap<String, String>, def: ElementId) -> Self {
        Self {
            attributes,
            def: Some(def),
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Session-scoped set of definition elements.
///
/// Deduplicated by element identity; iteration preserves first-insertion
/// order. Structurally equal definitions from distinct elements are kept
/// separate on purpose.
pub struct DefinitionSet {
    ordered: Vec<ElementId>,
    seen: HashSet<ElementId>,
}

impl DefinitionSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element; repeated identities are ignored.
    ///
    /// Returns whether the element was newly inserted.
    pub fn insert(&mut self, id: ElementId) -> bool {
        if self.seen.insert(id) {
            self.ordered.push(id);
            true
        } else {
            false
        }
    }

    /// Definition elements in first-seen order.
    pub fn as_slice(&self) -> &[ElementId] {
        &self.ordered
    }

    /// Number of distinct definition elements.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether no definition was registered.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/descriptor.rs"]
mod tests;
