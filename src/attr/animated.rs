use crate::foundation::error::{InkwireError, InkwireResult};

#[derive(Clone, Debug, PartialEq)]
/// Live attribute slot: static base value plus optional animated override.
///
/// Slots are created lazily on first access and live for the lifetime of the
/// owning element.
pub struct Animated<T> {
    base: T,
    animated: Option<T>,
}

impl<T: Clone> Animated<T> {
    /// Slot with the given base value and no animation override.
    pub fn new(base: T) -> Self {
        Self {
            base,
            animated: None,
        }
    }

    /// Current value: animated override when present, base otherwise.
    pub fn current(&self) -> &T {
        self.animated.as_ref().unwrap_or(&self.base)
    }

    /// Base (non-animated) value.
    pub fn base(&self) -> &T {
        &self.base
    }

    /// Replace the base value (the attribute-set path).
    pub fn set_base(&mut self, value: T) {
        self.base = value;
    }

    /// Apply an animated override.
    pub fn set_animated(&mut self, value: T) {
        self.animated = Some(value);
    }

    /// Drop the animated override, restoring the base value.
    pub fn clear_animated(&mut self) {
        self.animated = None;
    }

    /// Whether an animated override is active.
    pub fn is_animated(&self) -> bool {
        self.animated.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Animated enumeration slot: index into a static ident list.
///
/// Index 0 is reserved for the unknown sentinel.
pub struct AnimatedEnumeration {
    values: &'static [&'static str],
    inner: Animated<u16>,
}

impl AnimatedEnumeration {
    /// Slot over `values` with the given base index.
    pub fn new(values: &'static [&'static str], base: u16) -> Self {
        Self {
            values,
            inner: Animated::new(base),
        }
    }

    /// Recognized idents for this attribute.
    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }

    /// Current index: animated override when present, base otherwise.
    pub fn current(&self) -> u16 {
        *self.inner.current()
    }

    /// Base (non-animated) index.
    pub fn base(&self) -> u16 {
        *self.inner.base()
    }

    /// Ident for the current index, empty for the unknown sentinel.
    pub fn current_ident(&self) -> &'static str {
        self.values.get(usize::from(self.current())).unwrap_or(&"")
    }

    /// Ident for the base index, empty for the unknown sentinel.
    pub fn base_ident(&self) -> &'static str {
        self.values.get(usize::from(self.base())).unwrap_or(&"")
    }

    /// Replace the base index.
    pub fn set_base(&mut self, index: u16) {
        self.inner.set_base(index);
    }

    /// Replace the base index by ident.
    pub fn set_base_ident(&mut self, ident: &str) -> InkwireResult<()> {
        // Index 0 is the unknown sentinel and is not addressable by name.
        let index = self
            .values
            .iter()
            .position(|v| *v == ident)
            .filter(|&i| i != 0)
            .ok_or_else(|| {
                InkwireError::validation(format!("unknown enumeration value '{ident}'"))
            })?;
        self.inner.set_base(index as u16);
        Ok(())
    }

    /// Apply an animated override.
    pub fn set_animated(&mut self, index: u16) {
        self.inner.set_animated(index);
    }

    /// Drop the animated override, restoring the base index.
    pub fn clear_animated(&mut self) {
        self.inner.clear_animated();
    }

    /// Whether an animated override is active.
    pub fn is_animated(&self) -> bool {
        self.inner.is_animated()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/attr/animated.rs"]
mod tests;
