//! Numeric data handed to graph factories.
//!
//! Plain number sequences supplied by callers are normalised into typed
//! [`NumericBuffer`]s before they reach the factory. The element type is picked
//! by a one-character tag (`'d'` for 64-bit float, `'i'` for 32-bit int, ...)
//! or defaults to [`ElementType::F64`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Element type of a numeric buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Signed 8-bit integer (`'b'`).
    I8,
    /// Signed 16-bit integer (`'h'`).
    I16,
    /// Signed 32-bit integer (`'i'`).
    I32,
    /// Signed 64-bit integer (`'l'`).
    I64,
    /// 32-bit float (`'f'`).
    F32,
    /// 64-bit float (`'d'`).
    #[default]
    F64,
}

impl ElementType {
    /// All element types.
    pub const ALL: [ElementType; 6] = [
        ElementType::I8,
        ElementType::I16,
        ElementType::I32,
        ElementType::I64,
        ElementType::F32,
        ElementType::F64,
    ];

    /// The one-character type code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            ElementType::I8 => 'b',
            ElementType::I16 => 'h',
            ElementType::I32 => 'i',
            ElementType::I64 => 'l',
            ElementType::F32 => 'f',
            ElementType::F64 => 'd',
        }
    }

    /// Look up an element type by its one-character code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Parse a type tag string. Only single-character codes are tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let mut chars = tag.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_code(c),
            _ => None,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::I8 => "i8",
            ElementType::I16 => "i16",
            ElementType::I32 => "i32",
            ElementType::I64 => "i64",
            ElementType::F32 => "f32",
            ElementType::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// A typed numeric buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericBuffer {
    /// 8-bit integers.
    I8(Vec<i8>),
    /// 16-bit integers.
    I16(Vec<i16>),
    /// 32-bit integers.
    I32(Vec<i32>),
    /// 64-bit integers.
    I64(Vec<i64>),
    /// 32-bit floats.
    F32(Vec<f32>),
    /// 64-bit floats.
    F64(Vec<f64>),
}

impl NumericBuffer {
    /// Convert plain values into a buffer of the given element type.
    ///
    /// Integer conversions saturate and truncate toward zero.
    #[must_use]
    pub fn from_values(values: &[f64], ty: ElementType) -> Self {
        match ty {
            ElementType::I8 => Self::I8(values.iter().map(|&v| v as i8).collect()),
            ElementType::I16 => Self::I16(values.iter().map(|&v| v as i16).collect()),
            ElementType::I32 => Self::I32(values.iter().map(|&v| v as i32).collect()),
            ElementType::I64 => Self::I64(values.iter().map(|&v| v as i64).collect()),
            ElementType::F32 => Self::F32(values.iter().map(|&v| v as f32).collect()),
            ElementType::F64 => Self::F64(values.to_vec()),
        }
    }

    /// Element type of the buffer.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::I8(_) => ElementType::I8,
            Self::I16(_) => ElementType::I16,
            Self::I32(_) => ElementType::I32,
            Self::I64(_) => ElementType::I64,
            Self::F32(_) => ElementType::F32,
            Self::F64(_) => ElementType::F64,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::I8(v) => v.len(),
            Self::I16(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::I64(v) => v.len(),
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
        }
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get one element widened to f64.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<f64> {
        match self {
            Self::I8(v) => v.get(i).map(|&x| f64::from(x)),
            Self::I16(v) => v.get(i).map(|&x| f64::from(x)),
            Self::I32(v) => v.get(i).map(|&x| f64::from(x)),
            Self::I64(v) => v.get(i).map(|&x| x as f64),
            Self::F32(v) => v.get(i).map(|&x| f64::from(x)),
            Self::F64(v) => v.get(i).copied(),
        }
    }

    /// All elements widened to f64.
    #[must_use]
    pub fn to_f64_vec(&self) -> Vec<f64> {
        (0..self.len()).filter_map(|i| self.get(i)).collect()
    }
}

/// Paired x/y series of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPair {
    x: NumericBuffer,
    y: NumericBuffer,
}

impl ArrayPair {
    /// Pair two buffers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if the lengths differ.
    pub fn new(x: NumericBuffer, y: NumericBuffer) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::DataLengthMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Pair two plain f64 series.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if the lengths differ.
    pub fn from_f64(x: &[f64], y: &[f64]) -> Result<Self> {
        Self::new(
            NumericBuffer::from_values(x, ElementType::F64),
            NumericBuffer::from_values(y, ElementType::F64),
        )
    }

    /// X values.
    #[must_use]
    pub fn x(&self) -> &NumericBuffer {
        &self.x
    }

    /// Y values.
    #[must_use]
    pub fn y(&self) -> &NumericBuffer {
        &self.y
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the pair holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// A single image band stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericGrid {
    width: usize,
    height: usize,
    data: NumericBuffer,
}

impl NumericGrid {
    /// Wrap a flat buffer as a `width` x `height` grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] if `width * height` overflows and
    /// [`Error::DataLengthMismatch`] if `data.len() != width * height`.
    pub fn new(data: NumericBuffer, width: usize, height: usize) -> Result<Self> {
        let expected = width.checked_mul(height).ok_or_else(|| {
            Error::invalid_arguments("NumericGrid", format!("({width}, {height})"))
        })?;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid from rows of plain values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if the rows are ragged.
    pub fn from_rows(rows: &[Vec<f64>], ty: ElementType) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let mut flat = Vec::with_capacity(width * rows.len());
        for row in rows {
            if row.len() != width {
                return Err(Error::DataLengthMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }
        Self::new(NumericBuffer::from_values(&flat, ty), width, rows.len())
    }

    /// Grid width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Underlying row-major buffer.
    #[must_use]
    pub fn data(&self) -> &NumericBuffer {
        &self.data
    }

    /// Value at column `x`, row `y`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    /// Whether two grids have the same dimensions.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }
}
