use std::collections::{BTreeMap, HashMap};

use kurbo::Rect;

use crate::{
    attr::animated::{Animated, AnimatedEnumeration},
    attr::registry::{
        ATTR_EXTERNAL_RESOURCES_REQUIRED, ATTR_HREF, ATTR_XML_LANG, ATTR_XML_SPACE,
        AttributeSpec, AttributeTable, CORE_ATTRIBUTES, RegistryChain,
    },
    attr::value::{
        AnimatableValue, Length, NumberOptionalNumber, PercentageAxis, SemanticType,
    },
    element::target::AnimationTarget,
    foundation::core::{QName, Viewport, XLINK_NAMESPACE, XML_NAMESPACE, XMLNS_NAMESPACE},
    foundation::error::{InkwireError, InkwireResult},
};

/// `<filter>` tag name.
pub const FILTER_TAG: &str = "filter";

/// `filterUnits` attribute name.
pub const ATTR_FILTER_UNITS: &str = "filterUnits";
/// `primitiveUnits` attribute name.
pub const ATTR_PRIMITIVE_UNITS: &str = "primitiveUnits";
/// `x` attribute name.
pub const ATTR_X: &str = "x";
/// `y` attribute name.
pub const ATTR_Y: &str = "y";
/// `width` attribute name.
pub const ATTR_WIDTH: &str = "width";
/// `height` attribute name.
pub const ATTR_HEIGHT: &str = "height";
/// `filterRes` attribute name.
pub const ATTR_FILTER_RES: &str = "filterRes";

/// Idents for `filterUnits` / `primitiveUnits`; index 0 is the unknown
/// sentinel.
pub const UNITS_VALUES: &[&str] = &["", "userSpaceOnUse", "objectBoundingBox"];
/// Enumeration index for `userSpaceOnUse`.
pub const UNITS_USER_SPACE_ON_USE: u16 = 1;
/// Enumeration index for `objectBoundingBox`.
pub const UNITS_OBJECT_BOUNDING_BOX: u16 = 2;

const X_DEFAULT: Length = Length::percent(-10.0);
const Y_DEFAULT: Length = Length::percent(-10.0);
const WIDTH_DEFAULT: Length = Length::percent(120.0);
const HEIGHT_DEFAULT: Length = Length::percent(120.0);

// Internal keys for the two integers behind the single `filterRes` attribute.
const FILTER_RES_X_KEY: &str = "filterResX";
const FILTER_RES_Y_KEY: &str = "filterResY";

/// Per-type attribute table for `<filter>`.
pub static FILTER_ATTRIBUTES: AttributeTable = AttributeTable {
    name: "filter",
    specs: &[
        AttributeSpec {
            ns: None,
            local: ATTR_FILTER_UNITS,
            semantic: SemanticType::Ident,
            default: Some("objectBoundingBox"),
            animatable: true,
            axis: PercentageAxis::None,
        },
        AttributeSpec {
            ns: None,
            local: ATTR_PRIMITIVE_UNITS,
            semantic: SemanticType::Ident,
            default: Some("userSpaceOnUse"),
            animatable: true,
            axis: PercentageAxis::None,
        },
        AttributeSpec {
            ns: None,
            local: ATTR_X,
            semantic: SemanticType::Length,
            default: Some("-10%"),
            animatable: true,
            axis: PercentageAxis::ViewportWidth,
        },
        AttributeSpec {
            ns: None,
            local: ATTR_Y,
            semantic: SemanticType::Length,
            default: Some("-10%"),
            animatable: true,
            axis: PercentageAxis::ViewportHeight,
        },
        AttributeSpec {
            ns: None,
            local: ATTR_WIDTH,
            semantic: SemanticType::Length,
            default: Some("120%"),
            animatable: true,
            axis: PercentageAxis::ViewportWidth,
        },
        AttributeSpec {
            ns: None,
            local: ATTR_HEIGHT,
            semantic: SemanticType::Length,
            default: Some("120%"),
            animatable: true,
            axis: PercentageAxis::ViewportHeight,
        },
        AttributeSpec {
            ns: None,
            local: ATTR_FILTER_RES,
            semantic: SemanticType::NumberOptionalNumber,
            default: None,
            animatable: true,
            axis: PercentageAxis::None,
        },
    ],
};

/// Registry chain for `<filter>`: own table first, shared core table last.
pub static FILTER_REGISTRY: RegistryChain =
    RegistryChain::new(&[&FILTER_ATTRIBUTES, &CORE_ATTRIBUTES]);

// Namespace declarations and xlink defaults preset on every new element.
const ATTRIBUTE_INITIALIZER: &[(&str, &str, &str)] = &[
    (XMLNS_NAMESPACE, "xlink", XLINK_NAMESPACE),
    (XLINK_NAMESPACE, "type", "simple"),
    (XLINK_NAMESPACE, "show", "other"),
    (XLINK_NAMESPACE, "actuate", "onLoad"),
];

#[derive(Clone, Debug)]
/// DOM wrapper for the SVG `<filter>` element.
///
/// Attribute state is a sparse map of live slots created lazily on first
/// access; each slot holds a base value and an optional animated override.
/// Attribute metadata (types, defaults, animatability, percentage axes)
/// comes from [`FILTER_REGISTRY`].
pub struct FilterElement {
    lengths: HashMap<QName, Animated<Length>>,
    integers: HashMap<QName, Animated<i32>>,
    booleans: HashMap<QName, Animated<bool>>,
    enums: HashMap<QName, AnimatedEnumeration>,
    strings: HashMap<QName, Animated<String>>,
    plain: BTreeMap<QName, String>,
}

impl Default for FilterElement {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterElement {
    /// New `<filter>` element with initializer-preset XML attributes.
    pub fn new() -> Self {
        let mut plain = BTreeMap::new();
        for (ns, local, value) in ATTRIBUTE_INITIALIZER {
            plain.insert(QName::new(*ns, *local), (*value).to_owned());
        }
        Self {
            lengths: HashMap::new(),
            integers: HashMap::new(),
            booleans: HashMap::new(),
            enums: HashMap::new(),
            strings: HashMap::new(),
            plain,
        }
    }

    /// Element local name (the SVG tag).
    pub fn local_name(&self) -> &'static str {
        FILTER_TAG
    }

    /// `filterUnits` attribute (default `objectBoundingBox`).
    pub fn filter_units(&mut self) -> &mut AnimatedEnumeration {
        self.enums
            .entry(QName::local(ATTR_FILTER_UNITS))
            .or_insert_with(|| AnimatedEnumeration::new(UNITS_VALUES, UNITS_OBJECT_BOUNDING_BOX))
    }

    /// `primitiveUnits` attribute (default `userSpaceOnUse`).
    pub fn primitive_units(&mut self) -> &mut AnimatedEnumeration {
        self.enums
            .entry(QName::local(ATTR_PRIMITIVE_UNITS))
            .or_insert_with(|| AnimatedEnumeration::new(UNITS_VALUES, UNITS_USER_SPACE_ON_USE))
    }

    /// `x` attribute (default `-10%`).
    pub fn x(&mut self) -> &mut Animated<Length> {
        self.length_slot(ATTR_X, X_DEFAULT)
    }

    /// `y` attribute (default `-10%`).
    pub fn y(&mut self) -> &mut Animated<Length> {
        self.length_slot(ATTR_Y, Y_DEFAULT)
    }

    /// `width` attribute (default `120%`).
    pub fn width(&mut self) -> &mut Animated<Length> {
        self.length_slot(ATTR_WIDTH, WIDTH_DEFAULT)
    }

    /// `height` attribute (default `120%`).
    pub fn height(&mut self) -> &mut Animated<Length> {
        self.length_slot(ATTR_HEIGHT, HEIGHT_DEFAULT)
    }

    /// Horizontal half of the `filterRes` attribute.
    pub fn filter_res_x(&mut self) -> &mut Animated<i32> {
        self.integer_slot(FILTER_RES_X_KEY)
    }

    /// Vertical half of the `filterRes` attribute.
    pub fn filter_res_y(&mut self) -> &mut Animated<i32> {
        self.integer_slot(FILTER_RES_Y_KEY)
    }

    /// Set the `filterRes` base value (both halves).
    pub fn set_filter_res(&mut self, res_x: i32, res_y: i32) {
        self.filter_res_x().set_base(res_x);
        self.filter_res_y().set_base(res_y);
    }

    /// `xlink:href` attribute.
    pub fn href(&mut self) -> &mut Animated<String> {
        self.strings
            .entry(QName::new(XLINK_NAMESPACE, ATTR_HREF))
            .or_insert_with(|| Animated::new(String::new()))
    }

    /// `externalResourcesRequired` attribute (default `false`).
    pub fn external_resources_required(&mut self) -> &mut Animated<bool> {
        self.booleans
            .entry(QName::local(ATTR_EXTERNAL_RESOURCES_REQUIRED))
            .or_insert_with(|| Animated::new(false))
    }

    /// `xml:lang` attribute value, if set.
    pub fn xml_lang(&self) -> Option<&str> {
        self.plain
            .get(&QName::new(XML_NAMESPACE, ATTR_XML_LANG))
            .map(String::as_str)
    }

    /// Set the `xml:lang` attribute value.
    pub fn set_xml_lang(&mut self, lang: &str) {
        self.plain
            .insert(QName::new(XML_NAMESPACE, ATTR_XML_LANG), lang.to_owned());
    }

    /// `xml:space` attribute value, if set.
    pub fn xml_space(&self) -> Option<&str> {
        self.plain
            .get(&QName::new(XML_NAMESPACE, ATTR_XML_SPACE))
            .map(String::as_str)
    }

    /// Set the `xml:space` attribute value.
    pub fn set_xml_space(&mut self, space: &str) {
        self.plain
            .insert(QName::new(XML_NAMESPACE, ATTR_XML_SPACE), space.to_owned());
    }

    /// Set an attribute from its XML literal, parsed by registered type.
    ///
    /// Unregistered names are stored verbatim as plain attributes, matching
    /// DOM `setAttribute` semantics.
    pub fn set_attribute(&mut self, ns: Option<&str>, local: &str, value: &str) -> InkwireResult<()> {
        match FILTER_REGISTRY.attribute_type(ns, local) {
            SemanticType::Length => {
                let length = Length::parse(value)?;
                self.lengths
                    .entry(qname(ns, local))
                    .or_insert_with(|| Animated::new(length))
                    .set_base(length);
            }
            SemanticType::Ident => {
                let slot = match local {
                    ATTR_FILTER_UNITS => self.filter_units(),
                    ATTR_PRIMITIVE_UNITS => self.primitive_units(),
                    _ => {
                        return Err(InkwireError::unsupported(format!(
                            "ident attribute '{local}' on <filter>"
                        )));
                    }
                };
                slot.set_base_ident(value)?;
            }
            SemanticType::Boolean => {
                let parsed = parse_boolean(value)?;
                self.booleans
                    .entry(qname(ns, local))
                    .or_insert_with(|| Animated::new(parsed))
                    .set_base(parsed);
            }
            SemanticType::Integer => {
                let parsed: i32 = value.trim().parse().map_err(|_| {
                    InkwireError::validation(format!("invalid integer literal '{value}'"))
                })?;
                self.integers
                    .entry(qname(ns, local))
                    .or_insert_with(|| Animated::new(parsed))
                    .set_base(parsed);
            }
            SemanticType::NumberOptionalNumber => {
                let parsed = NumberOptionalNumber::parse(value)?;
                let res_x = parsed.number.round() as i32;
                let res_y = parsed.second().round() as i32;
                self.set_filter_res(res_x, res_y);
            }
            SemanticType::Uri => {
                let owned = value.to_owned();
                self.strings
                    .entry(qname(ns, local))
                    .or_insert_with(|| Animated::new(owned.clone()))
                    .set_base(owned);
            }
            SemanticType::String | SemanticType::Unknown => {
                self.plain.insert(qname(ns, local), value.to_owned());
            }
        }
        Ok(())
    }

    /// Current base attribute literal: set value, else registry default.
    pub fn get_attribute(&self, ns: Option<&str>, local: &str) -> Option<String> {
        let key = qname(ns, local);
        let set_value = match FILTER_REGISTRY.attribute_type(ns, local) {
            SemanticType::Length => self.lengths.get(&key).map(|a| a.base().to_string()),
            SemanticType::Ident => self.enums.get(&key).map(|e| e.base_ident().to_owned()),
            SemanticType::Boolean => self.booleans.get(&key).map(|a| a.base().to_string()),
            SemanticType::Integer => self.integers.get(&key).map(|a| a.base().to_string()),
            SemanticType::NumberOptionalNumber => self.filter_res_literal(),
            SemanticType::Uri => self.strings.get(&key).map(|a| a.base().clone()),
            SemanticType::String | SemanticType::Unknown => self.plain.get(&key).cloned(),
        };
        set_value.or_else(|| {
            FILTER_REGISTRY
                .default_value(ns, local)
                .map(str::to_owned)
        })
    }

    /// Resolve the filter effects region for a target element.
    ///
    /// With `objectBoundingBox` units (the default) x/y/width/height are
    /// fractions of `bbox`; with `userSpaceOnUse` they are user-space values
    /// whose percentages resolve against the viewport axis registered for
    /// each attribute. Animated overrides take effect.
    pub fn filter_region(&self, bbox: Rect, viewport: Viewport) -> Rect {
        let units = self
            .enums
            .get(&QName::local(ATTR_FILTER_UNITS))
            .map(AnimatedEnumeration::current)
            .unwrap_or(UNITS_OBJECT_BOUNDING_BOX);

        let x = self.current_length(ATTR_X, X_DEFAULT);
        let y = self.current_length(ATTR_Y, Y_DEFAULT);
        let width = self.current_length(ATTR_WIDTH, WIDTH_DEFAULT);
        let height = self.current_length(ATTR_HEIGHT, HEIGHT_DEFAULT);

        if units == UNITS_USER_SPACE_ON_USE {
            let x0 = x.resolve(viewport.width);
            let y0 = y.resolve(viewport.height);
            let w = width.resolve(viewport.width);
            let h = height.resolve(viewport.height);
            Rect::new(x0, y0, x0 + w, y0 + h)
        } else {
            let x0 = bbox.x0 + x.fraction() * bbox.width();
            let y0 = bbox.y0 + y.fraction() * bbox.height();
            let w = width.fraction() * bbox.width();
            let h = height.fraction() * bbox.height();
            Rect::new(x0, y0, x0 + w, y0 + h)
        }
    }

    fn length_slot(&mut self, local: &'static str, default: Length) -> &mut Animated<Length> {
        self.lengths
            .entry(QName::local(local))
            .or_insert_with(|| Animated::new(default))
    }

    fn integer_slot(&mut self, key: &'static str) -> &mut Animated<i32> {
        self.integers
            .entry(QName::local(key))
            .or_insert_with(|| Animated::new(0))
    }

    fn current_length(&self, local: &str, default: Length) -> Length {
        self.lengths
            .get(&QName::local(local))
            .map(|a| *a.current())
            .unwrap_or(default)
    }

    fn base_length(&self, local: &str, default: Length) -> Length {
        self.lengths
            .get(&QName::local(local))
            .map(|a| *a.base())
            .unwrap_or(default)
    }

    fn base_integer(&self, key: &str) -> i32 {
        self.integers
            .get(&QName::local(key))
            .map(|a| *a.base())
            .unwrap_or(0)
    }

    fn base_enum(&self, local: &str, default: u16) -> u16 {
        self.enums
            .get(&QName::local(local))
            .map(AnimatedEnumeration::base)
            .unwrap_or(default)
    }

    fn filter_res_literal(&self) -> Option<String> {
        let x_key = QName::local(FILTER_RES_X_KEY);
        let y_key = QName::local(FILTER_RES_Y_KEY);
        if !self.integers.contains_key(&x_key) && !self.integers.contains_key(&y_key) {
            return None;
        }
        Some(format!(
            "{} {}",
            self.base_integer(FILTER_RES_X_KEY),
            self.base_integer(FILTER_RES_Y_KEY)
        ))
    }
}

impl AnimationTarget for FilterElement {
    fn attribute_type(&self, ns: Option<&str>, local: &str) -> SemanticType {
        FILTER_REGISTRY.attribute_type(ns, local)
    }

    fn is_attribute_animatable(&self, ns: Option<&str>, local: &str) -> bool {
        FILTER_REGISTRY.is_animatable(ns, local)
    }

    fn percentage_interpretation(&self, ns: Option<&str>, local: &str) -> PercentageAxis {
        FILTER_REGISTRY.percentage_axis(ns, local)
    }

    fn underlying_value(&self, ns: Option<&str>, local: &str) -> InkwireResult<AnimatableValue> {
        if ns.is_none() {
            match local {
                ATTR_EXTERNAL_RESOURCES_REQUIRED => {
                    let base = self
                        .booleans
                        .get(&QName::local(local))
                        .map(|a| *a.base())
                        .unwrap_or(false);
                    return Ok(AnimatableValue::Boolean(base));
                }
                ATTR_FILTER_UNITS => {
                    return Ok(AnimatableValue::Enumeration(
                        self.base_enum(local, UNITS_OBJECT_BOUNDING_BOX),
                    ));
                }
                ATTR_PRIMITIVE_UNITS => {
                    return Ok(AnimatableValue::Enumeration(
                        self.base_enum(local, UNITS_USER_SPACE_ON_USE),
                    ));
                }
                ATTR_X | ATTR_Y | ATTR_WIDTH | ATTR_HEIGHT => {
                    let default = match local {
                        ATTR_X => X_DEFAULT,
                        ATTR_Y => Y_DEFAULT,
                        ATTR_WIDTH => WIDTH_DEFAULT,
                        _ => HEIGHT_DEFAULT,
                    };
                    return Ok(AnimatableValue::Length {
                        length: self.base_length(local, default),
                        axis: FILTER_REGISTRY.percentage_axis(ns, local),
                    });
                }
                ATTR_FILTER_RES => {
                    return Ok(AnimatableValue::NumberOptionalNumber(
                        NumberOptionalNumber::with_optional(
                            self.base_integer(FILTER_RES_X_KEY) as f32,
                            self.base_integer(FILTER_RES_Y_KEY) as f32,
                        ),
                    ));
                }
                _ => {}
            }
        }
        Err(InkwireError::unsupported(format!(
            "underlying value of attribute '{local}' on <{FILTER_TAG}>"
        )))
    }

    #[tracing::instrument(skip(self, value))]
    fn update_attribute_value(
        &mut self,
        ns: Option<&str>,
        local: &str,
        value: Option<AnimatableValue>,
    ) -> InkwireResult<()> {
        if ns.is_none() {
            match local {
                ATTR_EXTERNAL_RESOURCES_REQUIRED => {
                    return update_boolean(self.external_resources_required(), value);
                }
                ATTR_FILTER_UNITS => return update_enumeration(self.filter_units(), value),
                ATTR_PRIMITIVE_UNITS => return update_enumeration(self.primitive_units(), value),
                ATTR_X => return update_length(self.x(), value),
                ATTR_Y => return update_length(self.y(), value),
                ATTR_WIDTH => return update_length(self.width(), value),
                ATTR_HEIGHT => return update_length(self.height(), value),
                ATTR_FILTER_RES => {
                    match value {
                        None => {
                            self.filter_res_x().clear_animated();
                            self.filter_res_y().clear_animated();
                        }
                        Some(AnimatableValue::NumberOptionalNumber(v)) => {
                            // A missing second number duplicates the first
                            // into both halves.
                            self.filter_res_x().set_animated(v.number.round() as i32);
                            self.filter_res_y().set_animated(v.second().round() as i32);
                        }
                        Some(other) => return Err(type_mismatch("number-optional-number", &other)),
                    }
                    return Ok(());
                }
                _ => {}
            }
        }
        Err(InkwireError::unsupported(format!(
            "animation of attribute '{local}' on <{FILTER_TAG}>"
        )))
    }
}

fn qname(ns: Option<&str>, local: &str) -> QName {
    match ns {
        Some(ns) => QName::new(ns, local),
        None => QName::local(local),
    }
}

fn parse_boolean(value: &str) -> InkwireResult<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(InkwireError::validation(format!(
            "invalid boolean literal '{other}'"
        ))),
    }
}

fn update_length(slot: &mut Animated<Length>, value: Option<AnimatableValue>) -> InkwireResult<()> {
    match value {
        None => slot.clear_animated(),
        Some(AnimatableValue::Length { length, .. }) => slot.set_animated(length),
        Some(other) => return Err(type_mismatch("length", &other)),
    }
    Ok(())
}

fn update_boolean(slot: &mut Animated<bool>, value: Option<AnimatableValue>) -> InkwireResult<()> {
    match value {
        None => slot.clear_animated(),
        Some(AnimatableValue::Boolean(b)) => slot.set_animated(b),
        Some(other) => return Err(type_mismatch("boolean", &other)),
    }
    Ok(())
}

fn update_enumeration(
    slot: &mut AnimatedEnumeration,
    value: Option<AnimatableValue>,
) -> InkwireResult<()> {
    match value {
        None => slot.clear_animated(),
        Some(AnimatableValue::Enumeration(index)) => slot.set_animated(index),
        Some(other) => return Err(type_mismatch("enumeration", &other)),
    }
    Ok(())
}

fn type_mismatch(expected: &str, got: &AnimatableValue) -> InkwireError {
    InkwireError::validation(format!(
        "expected {expected} animation value, got {got:?}"
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/element/filter.rs"]
mod tests;
