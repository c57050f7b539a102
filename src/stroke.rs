//! Line stroke values.

use crate::error::{Error, Result};

/// Width and optional dash pattern used to draw lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    width: f32,
    dash: Option<Vec<f32>>,
}

impl Stroke {
    /// Create a stroke.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] if the width is negative or not
    /// finite, or if the dash pattern is empty, contains a negative or
    /// non-finite entry, or is all zeros.
    pub fn new(width: f32, dash: Option<&[f32]>) -> Result<Self> {
        if !width.is_finite() || width < 0.0 {
            return Err(Error::invalid_arguments("Stroke", format!("(width={width})")));
        }
        if let Some(pattern) = dash {
            let bad_entry = pattern.iter().any(|d| !d.is_finite() || *d < 0.0);
            let all_zero = pattern.iter().all(|d| *d == 0.0);
            if pattern.is_empty() || bad_entry || all_zero {
                return Err(Error::invalid_arguments("Stroke", format!("(dash={pattern:?})")));
            }
        }
        Ok(Self {
            width,
            dash: dash.map(<[f32]>::to_vec),
        })
    }

    /// A solid stroke of the given width.
    ///
    /// # Errors
    ///
    /// Same as [`Stroke::new`].
    pub fn solid(width: f32) -> Result<Self> {
        Self::new(width, None)
    }

    /// Line width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Dash pattern, alternating opaque and transparent lengths.
    #[must_use]
    pub fn dash(&self) -> Option<&[f32]> {
        self.dash.as_deref()
    }

    /// Whether the stroke draws a dashed line.
    #[must_use]
    pub fn is_dashed(&self) -> bool {
        self.dash.is_some()
    }
}
