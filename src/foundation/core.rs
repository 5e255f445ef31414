use crate::foundation::error::{InkwireError, InkwireResult};

/// XLink namespace URI (`xlink:href` and friends).
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// XML namespace URI (`xml:lang`, `xml:space`).
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Namespace-declaration namespace URI (`xmlns:` attributes).
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
/// Qualified attribute name: optional namespace URI plus local name.
pub struct QName {
    /// Namespace URI, `None` for attributes in no namespace.
    pub ns: Option<String>,
    /// Local attribute name.
    pub local: String,
}

impl QName {
    /// Qualified name in an explicit namespace.
    pub fn new(ns: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            ns: Some(ns.into()),
            local: local.into(),
        }
    }

    /// Qualified name in no namespace (plain SVG attributes).
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            ns: None,
            local: local.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Viewport dimensions that percentage lengths resolve against.
pub struct Viewport {
    /// Viewport width in user units.
    pub width: f64,
    /// Viewport height in user units.
    pub height: f64,
}

impl Viewport {
    /// Viewport with validated dimensions.
    pub fn new(width: f64, height: f64) -> InkwireResult<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(InkwireError::validation(
                "Viewport dimensions must be finite and >= 0",
            ));
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
