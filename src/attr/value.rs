use crate::foundation::error::{InkwireError, InkwireResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Unit of a length attribute value.
pub enum LengthUnit {
    /// Unitless user-space number.
    #[default]
    Number,
    /// Pixel length (identical to user units in this toolkit).
    Px,
    /// Percentage of the governing axis extent.
    Percent,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A length attribute value: magnitude plus unit.
pub struct Length {
    /// Numeric magnitude.
    pub value: f32,
    /// Unit the magnitude is expressed in.
    pub unit: LengthUnit,
}

impl Length {
    /// Unitless user-space length.
    pub const fn number(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Number,
        }
    }

    /// Pixel length.
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    /// Percentage length.
    pub const fn percent(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Percent,
        }
    }

    /// Parse an SVG length literal (`"5"`, `"5px"`, `"-10%"`).
    pub fn parse(s: &str) -> InkwireResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InkwireError::validation("length literal must be non-empty"));
        }
        let (num, unit) = if let Some(rest) = s.strip_suffix('%') {
            (rest, LengthUnit::Percent)
        } else if let Some(rest) = s.strip_suffix("px") {
            (rest, LengthUnit::Px)
        } else {
            (s, LengthUnit::Number)
        };
        let value: f32 = num
            .trim()
            .parse()
            .map_err(|_| InkwireError::validation(format!("invalid length literal '{s}'")))?;
        if !value.is_finite() {
            return Err(InkwireError::validation(format!(
                "length literal '{s}' must be finite"
            )));
        }
        Ok(Self { value, unit })
    }

    /// Resolve against the extent of the governing percentage axis.
    pub fn resolve(self, axis_extent: f64) -> f64 {
        match self.unit {
            LengthUnit::Number | LengthUnit::Px => f64::from(self.value),
            LengthUnit::Percent => f64::from(self.value) / 100.0 * axis_extent,
        }
    }

    /// Value as an object-bounding-box fraction (percentages divide by 100,
    /// plain numbers are already fractions).
    pub fn fraction(self) -> f64 {
        match self.unit {
            LengthUnit::Number | LengthUnit::Px => f64::from(self.value),
            LengthUnit::Percent => f64::from(self.value) / 100.0,
        }
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.unit {
            LengthUnit::Number => write!(f, "{}", self.value),
            LengthUnit::Px => write!(f, "{}px", self.value),
            LengthUnit::Percent => write!(f, "{}%", self.value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// `<number-optional-number>` attribute value (`"5"` or `"5 6"`).
pub struct NumberOptionalNumber {
    /// First (primary) number.
    pub number: f32,
    /// Optional second number.
    pub optional: Option<f32>,
}

impl NumberOptionalNumber {
    /// Single-number value.
    pub const fn new(number: f32) -> Self {
        Self {
            number,
            optional: None,
        }
    }

    /// Two-number value.
    pub const fn with_optional(number: f32, optional: f32) -> Self {
        Self {
            number,
            optional: Some(optional),
        }
    }

    /// Second component, falling back to the first when absent
    /// (single-value shorthand).
    pub fn second(self) -> f32 {
        self.optional.unwrap_or(self.number)
    }

    /// Parse a `<number-optional-number>` literal.
    pub fn parse(s: &str) -> InkwireResult<Self> {
        let mut parts = s.split_whitespace();
        let first = parts
            .next()
            .ok_or_else(|| InkwireError::validation("number-optional-number must be non-empty"))?;
        let number: f32 = first.parse().map_err(|_| {
            InkwireError::validation(format!("invalid number-optional-number '{s}'"))
        })?;
        let optional = match parts.next() {
            None => None,
            Some(second) => Some(second.parse::<f32>().map_err(|_| {
                InkwireError::validation(format!("invalid number-optional-number '{s}'"))
            })?),
        };
        if parts.next().is_some() {
            return Err(InkwireError::validation(format!(
                "number-optional-number '{s}' has too many components"
            )));
        }
        Ok(Self { number, optional })
    }
}

impl std::fmt::Display for NumberOptionalNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.optional {
            None => write!(f, "{}", self.number),
            Some(optional) => write!(f, "{} {}", self.number, optional),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Semantic content type of a registered attribute.
pub enum SemanticType {
    /// Keyword ident from a fixed per-attribute list.
    Ident,
    /// Length with optional unit.
    Length,
    /// Whole number.
    Integer,
    /// `true` / `false`.
    Boolean,
    /// One or two whitespace-separated numbers.
    NumberOptionalNumber,
    /// Reference to an external or in-document resource.
    Uri,
    /// Free-form string.
    String,
    /// Sentinel for names no registry table knows about; never animatable.
    Unknown,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Which viewport dimension a percentage value resolves against.
///
/// Opaque payload for everything except length resolution.
pub enum PercentageAxis {
    /// Attribute does not carry percentages.
    #[default]
    None,
    /// Percentages resolve against the viewport width.
    ViewportWidth,
    /// Percentages resolve against the viewport height.
    ViewportHeight,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Type-tagged animation value exchanged with the animation engine.
pub enum AnimatableValue {
    /// Boolean attribute value.
    Boolean(bool),
    /// Integer attribute value.
    Integer(i32),
    /// Length attribute value with its percentage axis.
    Length {
        /// The length itself.
        length: Length,
        /// Axis its percentages resolve against.
        axis: PercentageAxis,
    },
    /// One or two numbers sharing a single XML attribute.
    NumberOptionalNumber(NumberOptionalNumber),
    /// Enumeration index into the attribute's ident list.
    Enumeration(u16),
    /// String attribute value.
    String(String),
}

#[cfg(test)]
#[path = "../../tests/unit/attr/value.rs"]
mod tests;
