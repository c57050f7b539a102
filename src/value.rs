//! Loosely typed argument values and tuple coercion.
//!
//! Builders receive positional [`Value`]s (data, counts, text) and
//! [`NamedArgs`] (visual properties). Before a named value is assigned, it is
//! coerced against the expected type of the property it resolved to: a
//! 2-tuple becomes a [`Dimension2D`], [`Point2D`] or [`Range`], a 3-tuple
//! becomes an opaque [`Rgba`]. Everything else passes through unchanged.

use std::rc::Rc;

use crate::color::Rgba;
use crate::data::{ArrayPair, NumericBuffer, NumericGrid};
use crate::element::ElementHandle;
use crate::geometry::{Dimension2D, Point2D, Range};
use crate::registry::ExpectedType;
use crate::stroke::Stroke;

/// A value passed to a builder, either positionally or by name.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text.
    Text(String),
    /// Fixed-size numeric tuple, subject to coercion.
    Tuple(Vec<f64>),
    /// Plain numeric sequence, converted to a buffer by graph builders.
    Sequence(Vec<f64>),
    /// Typed numeric buffer.
    Buffer(NumericBuffer),
    /// Single image band.
    Grid(NumericGrid),
    /// Paired x/y series.
    Pair(ArrayPair),
    /// Engine enum constant by name, e.g. `OUTWARD` or `LOGARITHMIC`.
    Constant(String),
    /// Line stroke.
    Stroke(Stroke),
    /// Width/height pair.
    Dimension(Dimension2D),
    /// Point.
    Point(Point2D),
    /// Inclusive range.
    Range(Range),
    /// Color.
    Color(Rgba),
    /// Reference to another element.
    Element(ElementHandle),
}

impl Value {
    /// An engine enum constant.
    #[must_use]
    pub fn constant(name: &str) -> Self {
        Value::Constant(name.to_string())
    }

    /// A plain numeric sequence.
    #[must_use]
    pub fn sequence(values: &[f64]) -> Self {
        Value::Sequence(values.to_vec())
    }

    /// Name of the value's shape, used in argument signatures. Element
    /// references report their kind.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Text(_) => "Text",
            Value::Tuple(_) => "Tuple",
            Value::Sequence(_) => "Sequence",
            Value::Buffer(_) => "Buffer",
            Value::Grid(_) => "Grid",
            Value::Pair(_) => "Pair",
            Value::Constant(_) => "Constant",
            Value::Stroke(_) => "Stroke",
            Value::Dimension(_) => "Dimension2D",
            Value::Point(_) => "Point2D",
            Value::Range(_) => "Range",
            Value::Color(_) => "Color",
            Value::Element(e) => e.kind().name(),
        }
    }

    /// Numeric value of an `Int` or `Float`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

/// Render an argument list as a type signature, e.g. `(Sequence, Text)`.
#[must_use]
pub fn signature(args: &[Value]) -> String {
    let names: Vec<&str> = args.iter().map(Value::type_name).collect();
    format!("({})", names.join(", "))
}

/// Coerce a value against the expected type of the property it targets.
///
/// Only tuples are converted. A tuple whose arity does not fit the expected
/// type is returned unchanged, as is every non-tuple value.
///
/// Color components are saturated, not validated: each is rounded and clamped
/// to 0-255 and NaN becomes 0, so `(300, -5, NaN)` yields opaque `(255, 0, 0)`
/// instead of an error.
#[must_use]
pub fn coerce(value: Value, expected: ExpectedType) -> Value {
    let converted = match &value {
        Value::Tuple(t) => match (expected, t.as_slice()) {
            (ExpectedType::Dimension2D, &[w, h]) => Some(Value::Dimension(Dimension2D::new(w, h))),
            (ExpectedType::Point2D, &[x, y]) => Some(Value::Point(Point2D::new(x, y))),
            (ExpectedType::Range, &[start, end]) => Some(Value::Range(Range::new(start, end))),
            (ExpectedType::Color, &[r, g, b]) => Some(Value::Color(Rgba::from_components(r, g, b))),
            _ => None,
        },
        _ => None,
    };
    converted.unwrap_or(value)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) | (Value::Constant(a), Value::Constant(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) | (Value::Sequence(a), Value::Sequence(b)) => a == b,
            (Value::Buffer(a), Value::Buffer(b)) => a == b,
            (Value::Grid(a), Value::Grid(b)) => a == b,
            (Value::Pair(a), Value::Pair(b)) => a == b,
            (Value::Stroke(a), Value::Stroke(b)) => a == b,
            (Value::Dimension(a), Value::Dimension(b)) => a == b,
            (Value::Point(a), Value::Point(b)) => a == b,
            (Value::Range(a), Value::Range(b)) => a == b,
            (Value::Color(a), Value::Color(b)) => a == b,
            (Value::Element(a), Value::Element(b)) => {
                Rc::as_ptr(a).cast::<()>() == Rc::as_ptr(b).cast::<()>()
            }
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<(f64, f64)> for Value {
    fn from((a, b): (f64, f64)) -> Self {
        Value::Tuple(vec![a, b])
    }
}

impl From<(f64, f64, f64)> for Value {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Value::Tuple(vec![a, b, c])
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Sequence(v)
    }
}

impl From<NumericBuffer> for Value {
    fn from(v: NumericBuffer) -> Self {
        Value::Buffer(v)
    }
}

impl From<NumericGrid> for Value {
    fn from(v: NumericGrid) -> Self {
        Value::Grid(v)
    }
}

impl From<ArrayPair> for Value {
    fn from(v: ArrayPair) -> Self {
        Value::Pair(v)
    }
}

impl From<Stroke> for Value {
    fn from(v: Stroke) -> Self {
        Value::Stroke(v)
    }
}

impl From<Rgba> for Value {
    fn from(v: Rgba) -> Self {
        Value::Color(v)
    }
}

impl From<Range> for Value {
    fn from(v: Range) -> Self {
        Value::Range(v)
    }
}

impl From<Point2D> for Value {
    fn from(v: Point2D) -> Self {
        Value::Point(v)
    }
}

impl From<Dimension2D> for Value {
    fn from(v: Dimension2D) -> Self {
        Value::Dimension(v)
    }
}

impl From<ElementHandle> for Value {
    fn from(v: ElementHandle) -> Self {
        Value::Element(v)
    }
}

impl From<&ElementHandle> for Value {
    fn from(v: &ElementHandle) -> Self {
        Value::Element(Rc::clone(v))
    }
}

/// Named configuration arguments for one builder call, in caller order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedArgs {
    entries: Vec<(String, Value)>,
}

impl NamedArgs {
    /// Create an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, replacing an earlier one of the same name.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add an argument, replacing an earlier one of the same name.
    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Look up an argument by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Iterate over the arguments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build [`NamedArgs`] with keyword syntax.
///
/// ```rust
/// use plot_facade::named_args;
/// use plot_facade::value::Value;
///
/// let args = named_args! { range = (0.8, 2.2), tickSide = Value::constant("OUTWARD") };
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! named_args {
    () => {
        $crate::value::NamedArgs::new()
    };
    ($($name:tt = $value:expr),+ $(,)?) => {
        $crate::value::NamedArgs::new()$(.with(stringify!($name), $value))+
    };
}
