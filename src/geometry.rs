//! Geometric value types produced by tuple coercion.
//!
//! A `(a, b)` tuple becomes one of these depending on the expected type of the
//! property it is assigned to.

/// A width/height pair, used for plot sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension2D {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Dimension2D {
    /// Create a new dimension.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A 2D point with double-precision coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An inclusive value range. `start` may exceed `end` for inverted axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range {
    /// First bound.
    pub start: f64,
    /// Second bound.
    pub end: f64,
}

impl Range {
    /// Create a new range.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}
