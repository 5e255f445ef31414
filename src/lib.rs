//! Inkwire is an SVG element model and export toolkit.
//!
//! Inkwire covers two sides of an SVG pipeline that usually live far apart:
//! the document side, where elements expose typed, animatable attributes,
//! and the export side, where runtime graphics state is translated into SVG
//! markup and external assets.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: per-element-type attribute registries
//!    ([`RegistryChain`]) declare semantic types, defaults, animatability,
//!    and percentage axes
//! 2. **Animate**: elements implement [`AnimationTarget`], letting an
//!    animation engine read underlying values and apply typed overrides
//! 3. **Convert**: a session-scoped [`CustomCompositeConverter`] turns each
//!    distinct composite operator into a [`CompositeDescriptor`] exactly
//!    once, via a caller-supplied [`ExtensionHandler`]
//! 4. **Emit**: a [`PngImageHandler`] writes raster assets next to the
//!    document and wires `xlink:href` on the consuming `<image>` element
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No XML in the core**: the document tree is reached through the
//!   narrow [`DocumentFactory`] capability; parsing and serialization stay
//!   with the embedder.
//! - **Identity-keyed caching**: structurally equal composite instances
//!   never share a descriptor; the cache keys on object identity.
//! - **Single-threaded sessions**: export state is scoped to one session
//!   with no internal locking; callers serialize access.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod attr;
mod element;
mod export;
mod foundation;

pub use attr::animated::{Animated, AnimatedEnumeration};
pub use attr::registry::{
    ATTR_EXTERNAL_RESOURCES_REQUIRED, ATTR_HREF, ATTR_XML_LANG, ATTR_XML_SPACE, AttributeSpec,
    AttributeTable, CORE_ATTRIBUTES, RegistryChain,
};
pub use attr::value::{
    AnimatableValue, Length, LengthUnit, NumberOptionalNumber, PercentageAxis, SemanticType,
};
pub use element::filter::{
    ATTR_FILTER_RES, ATTR_FILTER_UNITS, ATTR_HEIGHT, ATTR_PRIMITIVE_UNITS, ATTR_WIDTH, ATTR_X,
    ATTR_Y, FILTER_ATTRIBUTES, FILTER_REGISTRY, FILTER_TAG, FilterElement,
    UNITS_OBJECT_BOUNDING_BOX, UNITS_USER_SPACE_ON_USE, UNITS_VALUES,
};
pub use element::target::AnimationTarget;
pub use export::composite::{CustomComposite, CustomCompositeConverter, ExtensionHandler};
pub use export::descriptor::{CompositeDescriptor, DefinitionSet};
pub use export::document::{DocumentFactory, ElementId, MemoryDocument, MemoryElement};
pub use export::image::{ATTR_XLINK_HREF, IMAGE_TAG, ImageHandler, PngImageHandler};
pub use foundation::core::{
    QName, Viewport, XLINK_NAMESPACE, XML_NAMESPACE, XMLNS_NAMESPACE,
};
pub use foundation::error::{InkwireError, InkwireResult};
