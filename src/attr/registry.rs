use crate::attr::value::{PercentageAxis, SemanticType};
use crate::foundation::core::{XLINK_NAMESPACE, XML_NAMESPACE};

/// `externalResourcesRequired` attribute name.
pub const ATTR_EXTERNAL_RESOURCES_REQUIRED: &str = "externalResourcesRequired";

/// `xlink:href` local name.
pub const ATTR_HREF: &str = "href";

/// `xml:lang` local name.
pub const ATTR_XML_LANG: &str = "lang";

/// `xml:space` local name.
pub const ATTR_XML_SPACE: &str = "space";

#[derive(Clone, Copy, Debug)]
/// Static description of one attribute on an element type.
///
/// Created once in process-wide tables, immutable thereafter, shared by all
/// instances of the element type.
pub struct AttributeSpec {
    /// Namespace URI, `None` for attributes in no namespace.
    pub ns: Option<&'static str>,
    /// Local attribute name.
    pub local: &'static str,
    /// Semantic content type.
    pub semantic: SemanticType,
    /// Default XML literal used when the attribute is absent.
    pub default: Option<&'static str>,
    /// Whether the animation engine may target this attribute.
    pub animatable: bool,
    /// Percentage-interpretation axis for length values.
    pub axis: PercentageAxis,
}

#[derive(Debug)]
/// Named set of attribute specs for one element type.
pub struct AttributeTable {
    /// Table name for diagnostics.
    pub name: &'static str,
    /// Attribute specs.
    pub specs: &'static [AttributeSpec],
}

impl AttributeTable {
    /// Find the spec for a qualified name in this table alone.
    pub fn get(&self, ns: Option<&str>, local: &str) -> Option<&'static AttributeSpec> {
        self.specs
            .iter()
            .find(|spec| spec.ns == ns && spec.local == local)
    }
}

#[derive(Clone, Copy, Debug)]
/// Ordered chain of attribute tables, consulted most-specific-first.
///
/// Replaces a dispatch chain up a type hierarchy: an element type's own table
/// comes first and shared tables follow, so a more specific table overrides a
/// shared entry for the same name.
pub struct RegistryChain {
    tables: &'static [&'static AttributeTable],
}

impl RegistryChain {
    /// Chain over the given tables, most specific first.
    pub const fn new(tables: &'static [&'static AttributeTable]) -> Self {
        Self { tables }
    }

    /// First matching spec across the chain.
    pub fn lookup(&self, ns: Option<&str>, local: &str) -> Option<&'static AttributeSpec> {
        self.tables.iter().find_map(|table| table.get(ns, local))
    }

    /// Registered semantic type, [`SemanticType::Unknown`] for unregistered
    /// names.
    pub fn attribute_type(&self, ns: Option<&str>, local: &str) -> SemanticType {
        self.lookup(ns, local)
            .map(|spec| spec.semantic)
            .unwrap_or(SemanticType::Unknown)
    }

    /// Whether some table in the chain declares the name animatable.
    pub fn is_animatable(&self, ns: Option<&str>, local: &str) -> bool {
        self.lookup(ns, local)
            .map(|spec| spec.animatable)
            .unwrap_or(false)
    }

    /// Percentage-interpretation axis for the name.
    pub fn percentage_axis(&self, ns: Option<&str>, local: &str) -> PercentageAxis {
        self.lookup(ns, local)
            .map(|spec| spec.axis)
            .unwrap_or(PercentageAxis::None)
    }

    /// Default XML literal for the name, if one is registered.
    pub fn default_value(&self, ns: Option<&str>, local: &str) -> Option<&'static str> {
        self.lookup(ns, local).and_then(|spec| spec.default)
    }
}

/// Attributes shared by every element type; consulted after per-type tables.
pub static CORE_ATTRIBUTES: AttributeTable = AttributeTable {
    name: "core",
    specs: &[
        AttributeSpec {
            ns: None,
            local: ATTR_EXTERNAL_RESOURCES_REQUIRED,
            semantic: SemanticType::Boolean,
            default: Some("false"),
            animatable: true,
            axis: PercentageAxis::None,
        },
        AttributeSpec {
            ns: Some(XLINK_NAMESPACE),
            local: ATTR_HREF,
            semantic: SemanticType::Uri,
            default: None,
            animatable: false,
            axis: PercentageAxis::None,
        },
        AttributeSpec {
            ns: Some(XML_NAMESPACE),
            local: ATTR_XML_LANG,
            semantic: SemanticType::String,
            default: None,
            animatable: false,
            axis: PercentageAxis::None,
        },
        AttributeSpec {
            ns: Some(XML_NAMESPACE),
            local: ATTR_XML_SPACE,
            semantic: SemanticType::String,
            default: None,
            animatable: false,
            axis: PercentageAxis::None,
        },
    ],
};

#[cfg(test)]
#[path = "../../tests/unit/attr/registry.rs"]
mod tests;
