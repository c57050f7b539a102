//! Positional argument shapes accepted by the graph and annotation builders.
//!
//! Callers pass positional arguments as a slice of [`Value`]s. Each builder
//! resolves the slice once, by pattern, into one of the tagged shapes below;
//! an unsupported arity or type combination is reported as
//! [`Error::InvalidArguments`] with the observed type signature.
//!
//! Plain sequences are converted to typed buffers using an explicit
//! one-character type tag when the caller supplies one, and the configured
//! default element type otherwise.

use std::rc::Rc;

use crate::data::{ArrayPair, ElementType, NumericBuffer, NumericGrid};
use crate::element::{ElementHandle, ElementKind};
use crate::error::{Error, Result};
use crate::value::{signature, Value};

/// Optional error bars of an XY graph, one buffer per side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XyErrors {
    /// Lower x errors.
    pub x_low: Option<NumericBuffer>,
    /// Upper x errors.
    pub x_high: Option<NumericBuffer>,
    /// Lower y errors.
    pub y_low: Option<NumericBuffer>,
    /// Upper y errors.
    pub y_high: Option<NumericBuffer>,
}

/// Data source of a new XY graph.
#[derive(Debug, Clone)]
pub enum XyGraphSource {
    /// Separate x and y buffers, optionally with error buffers.
    Arrays {
        /// X values.
        x: NumericBuffer,
        /// Y values.
        y: NumericBuffer,
        /// Error bars.
        errors: Option<XyErrors>,
        /// Graph name shown in the legend.
        name: Option<String>,
    },
    /// Paired series, optionally with paired x and y errors.
    Pairs {
        /// Data points.
        xy: ArrayPair,
        /// X errors (low, high) and y errors (low, high) as pairs.
        errors: Option<(ArrayPair, ArrayPair)>,
        /// Graph name shown in the legend.
        name: Option<String>,
    },
    /// Data shared with an existing XY graph.
    Existing(ElementHandle),
}

impl XyGraphSource {
    /// Resolve positional arguments.
    ///
    /// Supported shapes (`s` is a sequence, tuple or buffer; error sequences
    /// may be `Null`):
    ///
    /// - `(Pair)`, `(Pair, name)`, `(Pair, Pair, Pair)`, `(Pair, Pair, Pair, name)`
    /// - `(XYGraph)`
    /// - `(s, s)`, `(s, s, tag|name)`
    /// - `(s, s, s, s, s, s)`, `(s, s, s, s, s, s, tag|name)`
    ///
    /// A trailing text of exactly one type-code character (`b h i l f d`) is a
    /// type tag; any other text is the graph name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] for unsupported shapes and
    /// [`Error::DataLengthMismatch`] when series lengths disagree.
    pub fn resolve(args: &[Value], default_type: ElementType) -> Result<Self> {
        let invalid = || Error::invalid_arguments(ElementKind::XyGraph, signature(args));
        let tag_or_name = |text: &str| match ElementType::from_tag(text) {
            Some(ty) => (ty, None),
            None => (default_type, Some(text.to_string())),
        };

        match args {
            [Value::Element(graph)] if graph.kind() == ElementKind::XyGraph => {
                Ok(XyGraphSource::Existing(Rc::clone(graph)))
            }
            [Value::Pair(xy)] => Ok(Self::pairs(xy, None, None)),
            [Value::Pair(xy), Value::Text(name)] => Ok(Self::pairs(xy, None, Some(name))),
            [Value::Pair(xy), Value::Pair(ex), Value::Pair(ey)] => {
                Self::check_pair_errors(xy, ex, ey)?;
                Ok(Self::pairs(xy, Some((ex, ey)), None))
            }
            [Value::Pair(xy), Value::Pair(ex), Value::Pair(ey), Value::Text(name)] => {
                Self::check_pair_errors(xy, ex, ey)?;
                Ok(Self::pairs(xy, Some((ex, ey)), Some(name)))
            }
            [x, y] => Self::arrays(x, y, None, default_type, None).ok_or_else(invalid)?,
            [x, y, Value::Text(text)] => {
                let (ty, name) = tag_or_name(text);
                Self::arrays(x, y, None, ty, name).ok_or_else(invalid)?
            }
            [x, y, xl, xh, yl, yh] => {
                Self::arrays(x, y, Some([xl, xh, yl, yh]), default_type, None).ok_or_else(invalid)?
            }
            [x, y, xl, xh, yl, yh, Value::Text(text)] => {
                let (ty, name) = tag_or_name(text);
                Self::arrays(x, y, Some([xl, xh, yl, yh]), ty, name).ok_or_else(invalid)?
            }
            _ => Err(invalid()),
        }
    }

    /// Number of data points.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            XyGraphSource::Arrays { x, .. } => Some(x.len()),
            XyGraphSource::Pairs { xy, .. } => Some(xy.len()),
            XyGraphSource::Existing(_) => None,
        }
    }

    /// Graph name, if one was given positionally.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            XyGraphSource::Arrays { name, .. } | XyGraphSource::Pairs { name, .. } => {
                name.as_deref()
            }
            XyGraphSource::Existing(_) => None,
        }
    }

    fn pairs(
        xy: &ArrayPair,
        errors: Option<(&ArrayPair, &ArrayPair)>,
        name: Option<&String>,
    ) -> Self {
        XyGraphSource::Pairs {
            xy: xy.clone(),
            errors: errors.map(|(ex, ey)| (ex.clone(), ey.clone())),
            name: name.cloned(),
        }
    }

    fn check_pair_errors(xy: &ArrayPair, ex: &ArrayPair, ey: &ArrayPair) -> Result<()> {
        for pair in [ex, ey] {
            check_len(xy.len(), pair.len())?;
        }
        Ok(())
    }

    /// `None` when an argument has the wrong shape; `Some(Err)` when the
    /// shapes fit but the lengths disagree.
    fn arrays(
        x: &Value,
        y: &Value,
        errors: Option<[&Value; 4]>,
        ty: ElementType,
        name: Option<String>,
    ) -> Option<Result<Self>> {
        let x = series(x, ty)?;
        let y = series(y, ty)?;
        let errors = match errors {
            Some([xl, xh, yl, yh]) => Some(XyErrors {
                x_low: optional_series(xl, ty)?,
                x_high: optional_series(xh, ty)?,
                y_low: optional_series(yl, ty)?,
                y_high: optional_series(yh, ty)?,
            }),
            None => None,
        };

        let lengths = std::iter::once(&y)
            .chain(errors.iter().flat_map(|e| {
                [&e.x_low, &e.x_high, &e.y_low, &e.y_high]
                    .into_iter()
                    .flatten()
            }))
            .try_for_each(|b| check_len(x.len(), b.len()));
        if let Err(e) = lengths {
            return Some(Err(e));
        }

        Some(Ok(XyGraphSource::Arrays { x, y, errors, name }))
    }
}

/// A single-band image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource(pub NumericGrid);

impl ImageSource {
    /// Resolve positional arguments: `(Grid)` or `(s, width, height [, tag])`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] for unsupported shapes or
    /// dimensions whose product overflows, and [`Error::DataLengthMismatch`]
    /// when `len != width * height`.
    pub fn resolve(args: &[Value], default_type: ElementType) -> Result<Self> {
        let invalid = || Error::invalid_arguments(ElementKind::ImageGraph, signature(args));
        let band = match args {
            [Value::Grid(grid)] => grid.clone(),
            [data, w, h] => raw_band(data, w, h, default_type).ok_or_else(invalid)??,
            [data, w, h, Value::Text(tag)] => {
                let ty = ElementType::from_tag(tag).ok_or_else(invalid)?;
                raw_band(data, w, h, ty).ok_or_else(invalid)??
            }
            _ => return Err(invalid()),
        };
        Ok(ImageSource(band))
    }
}

/// A three-band RGB image; all bands have the same dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImageSource {
    /// Red band.
    pub red: NumericGrid,
    /// Green band.
    pub green: NumericGrid,
    /// Blue band.
    pub blue: NumericGrid,
}

impl RgbImageSource {
    /// Resolve positional arguments: `(Grid, Grid, Grid)` or
    /// `(s, s, s, width, height)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] for unsupported shapes or bands of
    /// different dimensions, and [`Error::DataLengthMismatch`] when a raw band
    /// does not hold `width * height` values.
    pub fn resolve(args: &[Value], default_type: ElementType) -> Result<Self> {
        let invalid = || Error::invalid_arguments(ElementKind::RgbImageGraph, signature(args));
        let (red, green, blue) = match args {
            [Value::Grid(r), Value::Grid(g), Value::Grid(b)] => (r.clone(), g.clone(), b.clone()),
            [r, g, b, w, h] => (
                raw_band(r, w, h, default_type).ok_or_else(invalid)??,
                raw_band(g, w, h, default_type).ok_or_else(invalid)??,
                raw_band(b, w, h, default_type).ok_or_else(invalid)??,
            ),
            _ => return Err(invalid()),
        };
        if !(red.same_shape(&green) && red.same_shape(&blue)) {
            return Err(invalid());
        }
        Ok(RgbImageSource { red, green, blue })
    }
}

/// Position, symbol shape and text of a symbol annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSpec {
    /// X value.
    pub x: f64,
    /// Y value.
    pub y: f64,
    /// Symbol shape constant, e.g. `FTRIANGLE`.
    pub shape: Option<String>,
    /// Annotation text.
    pub text: Option<String>,
}

impl SymbolSpec {
    /// Resolve positional arguments: `(x, y)`, `(x, y, text)`,
    /// `(x, y, shape)` or `(x, y, shape, text)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] for unsupported shapes.
    pub fn resolve(args: &[Value]) -> Result<Self> {
        let invalid = || Error::invalid_arguments(ElementKind::SymbolAnnotation, signature(args));
        let (x, y, rest) = match args {
            [x, y, rest @ ..] => (
                x.as_f64().ok_or_else(invalid)?,
                y.as_f64().ok_or_else(invalid)?,
                rest,
            ),
            _ => return Err(invalid()),
        };
        let (shape, text) = match rest {
            [] => (None, None),
            [Value::Text(text)] => (None, Some(text.clone())),
            [Value::Constant(shape)] => (Some(shape.clone()), None),
            [Value::Constant(shape), Value::Text(text)] => {
                (Some(shape.clone()), Some(text.clone()))
            }
            _ => return Err(invalid()),
        };
        Ok(SymbolSpec { x, y, shape, text })
    }
}

/// Check that every layer argument is a graph element.
///
/// # Errors
///
/// Returns [`Error::InvalidArguments`] naming the first offending argument.
pub fn resolve_graphs(args: &[Value]) -> Result<Vec<ElementHandle>> {
    args.iter()
        .map(|arg| match arg {
            Value::Element(e) if e.kind().is_graph() => Ok(Rc::clone(e)),
            _ => Err(Error::invalid_arguments(ElementKind::Layer, signature(args))),
        })
        .collect()
}

fn series(v: &Value, ty: ElementType) -> Option<NumericBuffer> {
    match v {
        Value::Sequence(values) | Value::Tuple(values) => {
            Some(NumericBuffer::from_values(values, ty))
        }
        Value::Buffer(buf) => Some(buf.clone()),
        _ => None,
    }
}

fn optional_series(v: &Value, ty: ElementType) -> Option<Option<NumericBuffer>> {
    match v {
        Value::Null => Some(None),
        other => series(other, ty).map(Some),
    }
}

fn raw_band(data: &Value, w: &Value, h: &Value, ty: ElementType) -> Option<Result<NumericGrid>> {
    let (Value::Int(w), Value::Int(h)) = (w, h) else {
        return None;
    };
    let w = usize::try_from(*w).ok()?;
    let h = usize::try_from(*h).ok()?;
    w.checked_mul(h)?;
    Some(NumericGrid::new(series(data, ty)?, w, h))
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DataLengthMismatch { expected, actual })
    }
}
