//! Declarative builder façade.
//!
//! Every builder takes its structural arguments positionally and its visual
//! properties as [`NamedArgs`]. Named arguments are routed over the kind's
//! ordered target levels (the element itself first, then sub-objects such as
//! an axis's tick manager), coerced to the expected type of the matching
//! property, and assigned in caller order.
//!
//! ```rust
//! use plot_facade::prelude::*;
//!
//! let facade = Facade::new(SceneFactory::new());
//! let axes = facade
//!     .axes(2, &named_args! { tickSide = Value::constant("OUTWARD"), range = (0.0, 5.0) })
//!     .unwrap();
//! assert_eq!(axes.len(), 2);
//! assert_eq!(axes[1].property("tickSide"), Some(Value::constant("OUTWARD")));
//! ```

mod dispatch;

use std::rc::Rc;
use std::sync::Arc;

use crate::args::{resolve_graphs, ImageSource, RgbImageSource, SymbolSpec, XyGraphSource};
use crate::config::FacadeConfig;
use crate::element::{ElementFactory, ElementHandle, ElementKind, PropertyTarget, SubTarget};
use crate::error::{Error, Result};
use crate::registry::PropertyRegistry;
use crate::stroke::Stroke;
use crate::value::{NamedArgs, Value};

use dispatch::Plan;

const AXES_LEVELS: [ElementKind; 3] = [
    ElementKind::AxisGroup,
    ElementKind::TickManager,
    ElementKind::AxisTransform,
];
const COLORBAR_LEVELS: [ElementKind; 4] = [
    ElementKind::Colorbar,
    ElementKind::ColorbarAxis,
    ElementKind::TickManager,
    ElementKind::AxisTransform,
];

/// Builds and configures plot elements through an [`ElementFactory`].
#[derive(Debug)]
pub struct Facade<F: ElementFactory> {
    factory: F,
    registry: Arc<PropertyRegistry>,
    config: FacadeConfig,
}

impl<F: ElementFactory> Facade<F> {
    /// Create a façade over the global registry and default configuration.
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            registry: PropertyRegistry::global(),
            config: FacadeConfig::default(),
        }
    }

    /// Create a façade with a configuration.
    ///
    /// Configured extra properties get a private registry; otherwise the
    /// global registry is used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] if the configuration does not validate.
    pub fn with_config(factory: F, config: FacadeConfig) -> Result<Self> {
        config.validate()?;
        let registry = if config.properties.is_empty() {
            PropertyRegistry::global()
        } else {
            Arc::new(PropertyRegistry::new(config.metadata()?))
        };
        Ok(Self {
            factory,
            registry,
            config,
        })
    }

    /// Create a façade over an explicit registry.
    #[must_use]
    pub fn with_registry(factory: F, registry: Arc<PropertyRegistry>) -> Self {
        Self {
            factory,
            registry,
            config: FacadeConfig::default(),
        }
    }

    /// The element factory.
    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// The property registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<PropertyRegistry> {
        &self.registry
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }

    // ========================================================================
    // Containers
    // ========================================================================

    /// Create a plot.
    ///
    /// Only plot properties are accepted; the legend is configured through
    /// its own handle, `plot.sub_target(SubTarget::Legend)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] for a name the plot does not
    /// accept, or an engine error.
    pub fn plot(&self, named: &NamedArgs) -> Result<ElementHandle> {
        self.build(ElementKind::Plot, named, F::create_plot)
    }

    /// Create a subplot.
    ///
    /// # Errors
    ///
    /// Same as [`Facade::plot`].
    pub fn subplot(&self, named: &NamedArgs) -> Result<ElementHandle> {
        self.build(ElementKind::Subplot, named, F::create_subplot)
    }

    /// Create a title.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] or an engine error.
    pub fn title(&self, text: &str, named: &NamedArgs) -> Result<ElementHandle> {
        self.build(ElementKind::Title, named, |f| f.create_title(text))
    }

    /// Create a layer holding `graphs`, attached in order.
    ///
    /// Named arguments are applied before the graphs are attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] if an argument is not a graph; in
    /// that case no layer is created.
    pub fn layer(&self, graphs: &[Value], named: &NamedArgs) -> Result<ElementHandle> {
        let graphs = resolve_graphs(graphs)?;
        let layer = self.build(ElementKind::Layer, named, |f| f.create_layer())?;
        for graph in &graphs {
            layer.attach(graph)?;
        }
        tracing::debug!(graphs = graphs.len(), "attached graphs to layer");
        Ok(layer)
    }

    // ========================================================================
    // Axes
    // ========================================================================

    /// Create `n` axes sharing one axis geometry.
    ///
    /// Axis properties apply to every axis; tick manager and axis transform
    /// properties apply to the first axis's tick manager and its transform.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] when `n` is zero,
    /// [`Error::UnknownProperty`] for a name no level accepts, or an engine
    /// error.
    pub fn axes(&self, n: usize, named: &NamedArgs) -> Result<Vec<ElementHandle>> {
        if n == 0 {
            return Err(Error::invalid_arguments(ElementKind::AxisGroup, "(0)"));
        }
        let plan = Plan::resolve(&self.registry, ElementKind::AxisGroup, &AXES_LEVELS, named)?;
        let axes = self.factory.create_axes(n)?;
        if axes.len() != n {
            return Err(Error::Engine(format!("requested {n} axes, engine created {}", axes.len())));
        }
        tracing::debug!(kind = %ElementKind::AxisGroup, count = n, "created elements");

        let mut tick_manager = Vec::new();
        let mut transform = Vec::new();
        if plan.touches(1) || plan.touches(2) {
            let tm = sub_target(&axes[0], SubTarget::TickManager)?;
            if plan.touches(2) {
                transform.push(sub_target(&tm, SubTarget::AxisTransform)?);
            }
            tick_manager.push(tm);
        }
        plan.apply(&[axes.clone(), tick_manager, transform])?;
        Ok(axes)
    }

    /// Create a single axis.
    ///
    /// # Errors
    ///
    /// Same as [`Facade::axes`].
    pub fn axis(&self, named: &NamedArgs) -> Result<ElementHandle> {
        let mut axes = self.axes(1, named)?;
        axes.pop().ok_or_else(|| Error::Engine("engine created no axis".to_string()))
    }

    // ========================================================================
    // Graphs
    // ========================================================================

    /// Create an XY graph. See [`XyGraphSource::resolve`] for the accepted
    /// positional shapes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] or [`Error::DataLengthMismatch`]
    /// for bad positional arguments, [`Error::UnknownProperty`] for bad names.
    pub fn xy_graph(&self, args: &[Value], named: &NamedArgs) -> Result<ElementHandle> {
        let source = XyGraphSource::resolve(args, self.config.default_element_type)?;
        self.build(ElementKind::XyGraph, named, |f| f.create_xy_graph(source))
    }

    /// Create a single-band image graph.
    ///
    /// # Errors
    ///
    /// As [`Facade::xy_graph`].
    pub fn image_graph(&self, args: &[Value], named: &NamedArgs) -> Result<ElementHandle> {
        let source = ImageSource::resolve(args, self.config.default_element_type)?;
        self.build(ElementKind::ImageGraph, named, |f| f.create_image_graph(source))
    }

    /// Create an RGB image graph.
    ///
    /// # Errors
    ///
    /// As [`Facade::xy_graph`].
    pub fn rgb_image_graph(&self, args: &[Value], named: &NamedArgs) -> Result<ElementHandle> {
        let source = RgbImageSource::resolve(args, self.config.default_element_type)?;
        self.build(ElementKind::RgbImageGraph, named, |f| f.create_rgb_image_graph(source))
    }

    /// Create a colorbar.
    ///
    /// Names are tried on the colorbar, then on both its inner and outer
    /// axis, then on the inner axis's tick manager, then on the colorbar's
    /// axis transform.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] or an engine error.
    pub fn colorbar(&self, named: &NamedArgs) -> Result<ElementHandle> {
        let plan = Plan::resolve(&self.registry, ElementKind::Colorbar, &COLORBAR_LEVELS, named)?;
        let colorbar = Self::created(ElementKind::Colorbar, self.factory.create_colorbar()?);

        let mut axes = Vec::new();
        let mut tick_manager = Vec::new();
        if plan.touches(1) || plan.touches(2) {
            let inner = sub_target(&colorbar, SubTarget::InnerAxis)?;
            if plan.touches(2) {
                tick_manager.push(sub_target(&inner, SubTarget::TickManager)?);
            }
            if plan.touches(1) {
                axes.push(inner);
                axes.push(sub_target(&colorbar, SubTarget::OuterAxis)?);
            }
        }
        let transform = if plan.touches(3) {
            vec![sub_target(&colorbar, SubTarget::AxisTransform)?]
        } else {
            Vec::new()
        };
        plan.apply(&[vec![Rc::clone(&colorbar)], axes, tick_manager, transform])?;
        Ok(colorbar)
    }

    // ========================================================================
    // Annotations
    // ========================================================================

    /// Create a horizontal line annotation at `y`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] or an engine error.
    pub fn hline_annotation(&self, y: f64, named: &NamedArgs) -> Result<ElementHandle> {
        self.build(ElementKind::HLineAnnotation, named, |f| f.create_hline_annotation(y))
    }

    /// Create a vertical line annotation at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] or an engine error.
    pub fn vline_annotation(&self, x: f64, named: &NamedArgs) -> Result<ElementHandle> {
        self.build(ElementKind::VLineAnnotation, named, |f| f.create_vline_annotation(x))
    }

    /// Create a horizontal strip annotation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] or an engine error.
    pub fn hstrip_annotation(
        &self,
        start: f64,
        end: f64,
        named: &NamedArgs,
    ) -> Result<ElementHandle> {
        self.build(ElementKind::HStripAnnotation, named, |f| {
            f.create_hstrip_annotation(start, end)
        })
    }

    /// Create a vertical strip annotation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] or an engine error.
    pub fn vstrip_annotation(
        &self,
        start: f64,
        end: f64,
        named: &NamedArgs,
    ) -> Result<ElementHandle> {
        self.build(ElementKind::VStripAnnotation, named, |f| {
            f.create_vstrip_annotation(start, end)
        })
    }

    /// Create a rectangle annotation spanning `x1..x2` and `y1..y2`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] or an engine error.
    pub fn rectangle_annotation(
        &self,
        x1: f64,
        x2: f64,
        y1: f64,
        y2: f64,
        named: &NamedArgs,
    ) -> Result<ElementHandle> {
        self.build(ElementKind::RectangleAnnotation, named, |f| {
            f.create_rectangle_annotation(x1, x2, y1, y2)
        })
    }

    /// Create a symbol annotation from `(x, y [, shape] [, text])`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] for bad positional arguments,
    /// [`Error::UnknownProperty`] for bad names.
    pub fn symbol_annotation(&self, args: &[Value], named: &NamedArgs) -> Result<ElementHandle> {
        let spec = SymbolSpec::resolve(args)?;
        self.build(ElementKind::SymbolAnnotation, named, |f| f.create_symbol_annotation(spec))
    }

    // ========================================================================
    // Values and generic configuration
    // ========================================================================

    /// Create a stroke. No property lookup is involved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] for a negative or non-finite width
    /// or an invalid dash pattern.
    pub fn stroke(&self, width: f32, dash: Option<&[f32]>) -> Result<Stroke> {
        self.factory.create_stroke(width, dash)
    }

    /// Assign named properties on an existing target.
    ///
    /// Engine elements are validated and coerced against their own kind;
    /// other targets receive plain assignments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] for an element that does not accept
    /// a name (nothing is assigned), or whatever the target's
    /// [`PropertyTarget::set_property`] returns.
    pub fn configure<T>(&self, target: &T, named: &NamedArgs) -> Result<()>
    where
        T: PropertyTarget + ?Sized,
    {
        match target.element_kind() {
            Some(kind) => Plan::resolve(&self.registry, kind, &[kind], named)?.apply_to(target),
            None => named
                .iter()
                .try_for_each(|(name, value)| target.set_property(name, value.clone())),
        }
    }

    fn build(
        &self,
        kind: ElementKind,
        named: &NamedArgs,
        create: impl FnOnce(&F) -> Result<ElementHandle>,
    ) -> Result<ElementHandle> {
        let plan = Plan::resolve(&self.registry, kind, &[kind], named)?;
        let handle = Self::created(kind, create(&self.factory)?);
        plan.apply(&[vec![Rc::clone(&handle)]])?;
        Ok(handle)
    }

    fn created(kind: ElementKind, handle: ElementHandle) -> ElementHandle {
        tracing::debug!(%kind, "created element");
        handle
    }
}

fn sub_target(handle: &ElementHandle, role: SubTarget) -> Result<ElementHandle> {
    handle
        .sub_target(role)
        .ok_or_else(|| Error::Engine(format!("{} has no {role:?}", handle.kind())))
}
