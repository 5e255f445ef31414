//! Export layer: session-scoped converters from runtime graphics objects to
//! SVG attribute sets, definition elements, and external PNG assets.

pub mod composite;
pub mod descriptor;
pub mod document;
pub mod image;
