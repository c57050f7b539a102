//! Element handles and the engine interfaces the façade consumes.
//!
//! The plotting engine is reached only through these traits: an
//! [`ElementFactory`] creates elements, an [`Element`] exposes settable named
//! properties and its sub-objects. The façade never constructs element
//! instances itself.

mod kind;

pub use kind::{ElementKind, ParseKindError};

use std::fmt;
use std::rc::Rc;

use crate::args::{ImageSource, RgbImageSource, SymbolSpec, XyGraphSource};
use crate::error::Result;
use crate::stroke::Stroke;
use crate::value::Value;

/// Shared reference to an engine-managed element.
pub type ElementHandle = Rc<dyn Element>;

/// Role of a sub-object reachable from an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubTarget {
    /// The tick manager of an axis.
    TickManager,
    /// The axis transform of a tick manager or colorbar.
    AxisTransform,
    /// The inner axis of a colorbar.
    InnerAxis,
    /// The outer axis of a colorbar.
    OuterAxis,
    /// The legend of a plot.
    Legend,
}

/// Anything named properties can be assigned to.
///
/// Objects that are not engine elements implement only this trait and are
/// configured by plain, unvalidated assignment.
pub trait PropertyTarget {
    /// Assign a property.
    ///
    /// # Errors
    ///
    /// Returns an error if the target rejects the assignment.
    fn set_property(&self, name: &str, value: Value) -> Result<()>;

    /// The element kind, for targets that are engine elements.
    ///
    /// Element implementations return `Some(self.kind())`.
    fn element_kind(&self) -> Option<ElementKind> {
        None
    }
}

/// An engine-managed, mutable plot element.
pub trait Element: PropertyTarget + fmt::Debug {
    /// Kind of the element.
    fn kind(&self) -> ElementKind;

    /// A sub-object playing the given role, if the element has one.
    fn sub_target(&self, role: SubTarget) -> Option<ElementHandle>;

    /// Attach a child element (a graph to a layer).
    ///
    /// # Errors
    ///
    /// Returns an error if the element does not accept the child.
    fn attach(&self, child: &ElementHandle) -> Result<()>;

    /// Current value of a property, if it has been assigned.
    fn property(&self, name: &str) -> Option<Value>;

    /// Attached children, in attachment order.
    fn children(&self) -> Vec<ElementHandle> {
        Vec::new()
    }
}

/// Creates engine elements.
pub trait ElementFactory {
    /// Create a top-level plot.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_plot(&self) -> Result<ElementHandle>;

    /// Create a plot to be nested in another plot.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_subplot(&self) -> Result<ElementHandle>;

    /// Create a title with the given text.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_title(&self, text: &str) -> Result<ElementHandle>;

    /// Create `n` parallel axes sharing one axis geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the elements.
    fn create_axes(&self, n: usize) -> Result<Vec<ElementHandle>>;

    /// Create an empty layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_layer(&self) -> Result<ElementHandle>;

    /// Create an XY graph.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_xy_graph(&self, source: XyGraphSource) -> Result<ElementHandle>;

    /// Create a single-band image graph.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_image_graph(&self, source: ImageSource) -> Result<ElementHandle>;

    /// Create an RGB image graph.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_rgb_image_graph(&self, source: RgbImageSource) -> Result<ElementHandle>;

    /// Create a colorbar.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_colorbar(&self) -> Result<ElementHandle>;

    /// Create a horizontal line annotation at `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_hline_annotation(&self, y: f64) -> Result<ElementHandle>;

    /// Create a vertical line annotation at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_vline_annotation(&self, x: f64) -> Result<ElementHandle>;

    /// Create a horizontal strip annotation between `start` and `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_hstrip_annotation(&self, start: f64, end: f64) -> Result<ElementHandle>;

    /// Create a vertical strip annotation between `start` and `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_vstrip_annotation(&self, start: f64, end: f64) -> Result<ElementHandle>;

    /// Create a rectangle annotation.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_rectangle_annotation(
        &self,
        x1: f64,
        x2: f64,
        y1: f64,
        y2: f64,
    ) -> Result<ElementHandle>;

    /// Create a symbol annotation.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the element.
    fn create_symbol_annotation(&self, spec: SymbolSpec) -> Result<ElementHandle>;

    /// Create a stroke value.
    ///
    /// # Errors
    ///
    /// Returns an error if the width or dash pattern is invalid.
    fn create_stroke(&self, width: f32, dash: Option<&[f32]>) -> Result<Stroke> {
        Stroke::new(width, dash)
    }
}
