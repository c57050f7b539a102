//! Color values assigned to paint-like element properties.
//!
//! Colors enter the façade either as named constants ([`Rgba::GREEN`]) or as
//! `(r, g, b)` tuples coerced against a `Color` property descriptor.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque color from numeric components in the 0-255 range.
    ///
    /// Components are rounded and saturated rather than rejected: values
    /// outside 0-255 are clamped and NaN becomes 0, so `(95.4, 300.0, -2.0)`
    /// becomes `(95, 255, 0)`.
    #[must_use]
    pub fn from_components(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(channel(r), channel(g), channel(b))
    }
}

fn channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}
