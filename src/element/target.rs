use crate::attr::value::{AnimatableValue, PercentageAxis, SemanticType};
use crate::foundation::error::InkwireResult;

/// Element-side contract consumed by the animation engine.
///
/// The engine queries attribute metadata through the element's registry
/// chain, reads base values as type-tagged [`AnimatableValue`]s, and writes
/// interpolated values back. Operations against attribute names the element
/// does not register fail with
/// [`InkwireError::UnsupportedOperation`](crate::InkwireError::UnsupportedOperation);
/// callers must treat that as fatal for the call, not retryable.
pub trait AnimationTarget {
    /// Registered semantic type of an attribute,
    /// [`SemanticType::Unknown`] for unregistered names.
    fn attribute_type(&self, ns: Option<&str>, local: &str) -> SemanticType;

    /// Whether the animation engine may target the attribute.
    fn is_attribute_animatable(&self, ns: Option<&str>, local: &str) -> bool;

    /// Axis a percentage value on the attribute resolves against.
    ///
    /// Consulted by length resolution; otherwise opaque payload.
    fn percentage_interpretation(&self, ns: Option<&str>, local: &str) -> PercentageAxis;

    /// Current base (non-animated) value as a type-tagged animation value.
    ///
    /// Composite attributes bundle their sub-values into one structured
    /// value.
    fn underlying_value(&self, ns: Option<&str>, local: &str) -> InkwireResult<AnimatableValue>;

    /// Apply (`Some`) or end (`None`) an animated override.
    ///
    /// Ending an animation restores the attribute's base value.
    fn update_attribute_value(
        &mut self,
        ns: Option<&str>,
        local: &str,
        value: Option<AnimatableValue>,
    ) -> InkwireResult<()>;
}
