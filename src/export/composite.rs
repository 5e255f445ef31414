use std::{collections::HashMap, sync::Arc};

use crate::{
    export::descriptor::{CompositeDescriptor, DefinitionSet},
    export::document::DocumentFactory,
    foundation::error::{InkwireError, InkwireResult},
};

/// Application-defined composite operator subject to custom conversion.
///
/// Identity, not structure, keys the conversion cache: two equal-looking
/// operator instances convert independently and never share a descriptor.
pub trait CustomComposite: std::fmt::Debug {
    /// Operator name for diagnostics.
    fn name(&self) -> &str;
}

/// Caller-supplied capability translating custom composite operators into
/// SVG descriptors.
///
/// The sole extension point for vendor-specific composite translation; the
/// embedding application must supply one.
pub trait ExtensionHandler {
    /// Produce the SVG descriptor for a composite, or decline with `None`.
    ///
    /// Any definition element the descriptor carries must be created through
    /// `doc`.
    fn handle_composite(
        &self,
        composite: &dyn CustomComposite,
        doc: &mut dyn DocumentFactory,
    ) -> Option<Arc<CompositeDescriptor>>;
}

/// Session-scoped converter for custom composite operators.
///
/// Conversion is handed to the extension handler; each distinct operator is
/// converted at most once per session and its descriptor reused on repeat
/// encounters. Sessions are single-threaded: callers must serialize access.
pub struct CustomCompositeConverter {
    handler: Arc<dyn ExtensionHandler>,
    // Cached entries keep the operator alive so identity keys stay unique.
    descriptors: HashMap<usize, (Arc<dyn CustomComposite>, Arc<CompositeDescriptor>)>,
    defs: DefinitionSet,
}

impl CustomCompositeConverter {
    /// New converter around a required extension handler.
    ///
    /// A missing handler is an [`InkwireError::InvalidConfiguration`] and
    /// fails here, never at first use.
    pub fn new(handler: Option<Arc<dyn ExtensionHandler>>) -> InkwireResult<Self> {
        let handler = handler
            .ok_or_else(|| InkwireError::configuration("extension handler must not be missing"))?;
        Ok(Self {
            handler,
            descriptors: HashMap::new(),
            defs: DefinitionSet::new(),
        })
    }

    #[tracing::instrument(skip_all, fields(composite = composite.name()))]
    /// Convert a composite, reusing the session descriptor on repeat
    /// encounters of the same instance.
    ///
    /// Returns `None` when the handler declines. Declines are not cached, so
    /// a later call re-attempts the conversion.
    pub fn convert(
        &mut self,
        composite: &Arc<dyn CustomComposite>,
        doc: &mut dyn DocumentFactory,
    ) -> Option<Arc<CompositeDescriptor>> {
        let key = identity_key(composite);
        if let Some((_, desc)) = self.descriptors.get(&key) {
            tracing::debug!("composite descriptor cache hit");
            return Some(Arc::clone(desc));
        }

        let desc = self.handler.handle_composite(composite.as_ref(), doc)?;
        if let Some(def) = desc.def {
            self.defs.insert(def);
        }
        self.descriptors
            .insert(key, (Arc::clone(composite), Arc::clone(&desc)));
        tracing::debug!("composite descriptor cached");
        Some(desc)
    }

    /// Definition elements registered so far, in first-seen order.
    pub fn defs(&self) -> &DefinitionSet {
        &self.defs
    }
}

impl std::fmt::Debug for CustomCompositeConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomCompositeConverter")
            .field("descriptors", &self.descriptors.len())
            .finish_non_exhaustive()
    }
}

fn identity_key(composite: &Arc<dyn CustomComposite>) -> usize {
    Arc::as_ptr(composite) as *const () as usize
}

#[cfg(test)]
#[path = "../../tests/unit/export/composite.rs"]
mod tests;
