use std::collections::BTreeMap;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
/// Opaque handle to an element node owned by a [`DocumentFactory`].
pub struct ElementId(pub u64);

/// Narrow document-tree capability the export layer consumes.
///
/// The toolkit never parses or serializes XML; embedders back this trait
/// with their own DOM. [`MemoryDocument`] is the bundled reference
/// implementation.
pub trait DocumentFactory {
    /// Create a new element with the given tag name.
    fn create_element(&mut self, tag: &str) -> ElementId;

    /// Set an attribute on an element.
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    /// Append `child` under `parent`.
    fn append_child(&mut self, parent: ElementId, child: ElementId);
}

#[derive(Clone, Debug)]
/// Element node stored by [`MemoryDocument`].
pub struct MemoryElement {
    /// Tag name.
    pub tag: String,
    /// Attributes in stable name order.
    pub attributes: BTreeMap<String, String>,
    /// Child element ids in insertion order.
    pub children: Vec<ElementId>,
}

#[derive(Clone, Debug, Default)]
/// Reference [`DocumentFactory`] backed by a flat element arena.
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
}

impl MemoryDocument {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Element node for a handle, if it belongs to this document.
    pub fn element(&self, id: ElementId) -> Option<&MemoryElement> {
        self.elements.get(id.0 as usize)
    }

    /// Number of elements created so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no element was created yet.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl DocumentFactory for MemoryDocument {
    fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.elements.len() as u64);
        self.elements.push(MemoryElement {
            tag: tag.to_owned(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        });
        id
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(element.0 as usize) {
            el.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if let Some(el) = self.elements.get_mut(parent.0 as usize) {
            el.children.push(child);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/document.rs"]
mod tests;
