//! In-memory reference engine.
//!
//! [`SceneFactory`] implements [`ElementFactory`] with retained
//! [`SceneElement`]s: properties are recorded, graphs are attached to layers,
//! and sub-objects are wired the way the plotting engine wires them. Axes
//! created together share one tick manager, every tick manager owns an axis
//! transform, a colorbar owns an inner and an outer axis sharing one tick
//! manager and transform, and every plot owns a legend. Nothing is rendered.

mod element;

pub use element::SceneElement;

use crate::args::{ImageSource, RgbImageSource, SymbolSpec, XyGraphSource};
use crate::color::Rgba;
use crate::data::ArrayPair;
use crate::element::{ElementFactory, ElementHandle, ElementKind, SubTarget};
use crate::error::Result;
use crate::geometry::{Dimension2D, Point2D, Range};
use crate::value::Value;

/// Default container size of a new plot.
pub const DEFAULT_CONTAINER_SIZE: Dimension2D = Dimension2D::new(640.0, 480.0);

/// Factory of [`SceneElement`]s.
#[derive(Debug, Clone, Copy)]
pub struct SceneFactory {
    shared_tick_manager: bool,
}

impl Default for SceneFactory {
    fn default() -> Self {
        Self {
            shared_tick_manager: true,
        }
    }
}

impl SceneFactory {
    /// Create a factory whose axes groups share one tick manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the axes of one group share a tick manager.
    #[must_use]
    pub fn shared_tick_manager(mut self, shared: bool) -> Self {
        self.shared_tick_manager = shared;
        self
    }

    fn tick_manager() -> ElementHandle {
        let transform = SceneElement::new(ElementKind::AxisTransform).into_handle();
        SceneElement::new(ElementKind::TickManager)
            .with_sub(SubTarget::AxisTransform, &transform)
            .into_handle()
    }

    fn plot_like(kind: ElementKind) -> ElementHandle {
        let legend = SceneElement::new(ElementKind::Legend)
            .with_property("enabled", true)
            .into_handle();
        SceneElement::new(kind)
            .with_property("color", Rgba::BLACK)
            .with_sub(SubTarget::Legend, &legend)
            .into_handle()
    }

    fn graph(kind: ElementKind, data: Value) -> ElementHandle {
        SceneElement::new(kind).with_property("data", data).into_handle()
    }
}

impl ElementFactory for SceneFactory {
    fn create_plot(&self) -> Result<ElementHandle> {
        let plot = Self::plot_like(ElementKind::Plot);
        plot.set_property("containerSize", Value::Dimension(DEFAULT_CONTAINER_SIZE))?;
        Ok(plot)
    }

    fn create_subplot(&self) -> Result<ElementHandle> {
        Ok(Self::plot_like(ElementKind::Subplot))
    }

    fn create_title(&self, text: &str) -> Result<ElementHandle> {
        Ok(SceneElement::new(ElementKind::Title)
            .with_property("text", text)
            .into_handle())
    }

    fn create_axes(&self, n: usize) -> Result<Vec<ElementHandle>> {
        let shared = Self::tick_manager();
        let axes = (0..n)
            .map(|i| {
                let tm = if self.shared_tick_manager || i == 0 {
                    shared.clone()
                } else {
                    Self::tick_manager()
                };
                let side = if i % 2 == 1 { "POSITIVE_SIDE" } else { "NEGATIVE_SIDE" };
                SceneElement::new(ElementKind::AxisGroup)
                    .with_property("position", Value::constant(side))
                    .with_sub(SubTarget::TickManager, &tm)
                    .into_handle()
            })
            .collect();
        Ok(axes)
    }

    fn create_layer(&self) -> Result<ElementHandle> {
        Ok(SceneElement::new(ElementKind::Layer).into_handle())
    }

    fn create_xy_graph(&self, source: XyGraphSource) -> Result<ElementHandle> {
        let graph = match source {
            XyGraphSource::Existing(other) => {
                Self::graph(ElementKind::XyGraph, other.property("data").unwrap_or(Value::Null))
            }
            XyGraphSource::Pairs { xy, errors, name } => {
                let graph = Self::graph(ElementKind::XyGraph, Value::Pair(xy));
                if let Some((ex, ey)) = errors {
                    graph.set_property("xErrors", Value::Pair(ex))?;
                    graph.set_property("yErrors", Value::Pair(ey))?;
                }
                if let Some(name) = name {
                    graph.set_property("name", Value::Text(name))?;
                }
                graph
            }
            XyGraphSource::Arrays { x, y, errors, name } => {
                let graph = Self::graph(ElementKind::XyGraph, Value::Pair(ArrayPair::new(x, y)?));
                if let Some(errors) = errors {
                    let bands = [
                        ("xErrorLow", errors.x_low),
                        ("xErrorHigh", errors.x_high),
                        ("yErrorLow", errors.y_low),
                        ("yErrorHigh", errors.y_high),
                    ];
                    for (prop, band) in bands.into_iter().filter_map(|(p, b)| b.map(|b| (p, b))) {
                        graph.set_property(prop, Value::Buffer(band))?;
                    }
                }
                if let Some(name) = name {
                    graph.set_property("name", Value::Text(name))?;
                }
                graph
            }
        };
        Ok(graph)
    }

    fn create_image_graph(&self, source: ImageSource) -> Result<ElementHandle> {
        Ok(Self::graph(ElementKind::ImageGraph, Value::Grid(source.0)))
    }

    fn create_rgb_image_graph(&self, source: RgbImageSource) -> Result<ElementHandle> {
        let graph = Self::graph(ElementKind::RgbImageGraph, Value::Grid(source.red));
        graph.set_property("green", Value::Grid(source.green))?;
        graph.set_property("blue", Value::Grid(source.blue))?;
        Ok(graph)
    }

    fn create_colorbar(&self) -> Result<ElementHandle> {
        let tm = Self::tick_manager();
        let transform = tm.sub_target(SubTarget::AxisTransform);
        let inner = SceneElement::new(ElementKind::ColorbarAxis)
            .with_sub(SubTarget::TickManager, &tm)
            .into_handle();
        let outer = SceneElement::new(ElementKind::ColorbarAxis)
            .with_sub(SubTarget::TickManager, &tm)
            .into_handle();
        let mut colorbar = SceneElement::new(ElementKind::Colorbar)
            .with_sub(SubTarget::InnerAxis, &inner)
            .with_sub(SubTarget::OuterAxis, &outer);
        if let Some(transform) = transform {
            colorbar = colorbar.with_sub(SubTarget::AxisTransform, &transform);
        }
        Ok(colorbar.into_handle())
    }

    fn create_hline_annotation(&self, y: f64) -> Result<ElementHandle> {
        Ok(SceneElement::new(ElementKind::HLineAnnotation)
            .with_property("value", y)
            .into_handle())
    }

    fn create_vline_annotation(&self, x: f64) -> Result<ElementHandle> {
        Ok(SceneElement::new(ElementKind::VLineAnnotation)
            .with_property("value", x)
            .into_handle())
    }

    fn create_hstrip_annotation(&self, start: f64, end: f64) -> Result<ElementHandle> {
        Ok(SceneElement::new(ElementKind::HStripAnnotation)
            .with_property("valueRange", Range::new(start, end))
            .into_handle())
    }

    fn create_vstrip_annotation(&self, start: f64, end: f64) -> Result<ElementHandle> {
        Ok(SceneElement::new(ElementKind::VStripAnnotation)
            .with_property("valueRange", Range::new(start, end))
            .into_handle())
    }

    fn create_rectangle_annotation(
        &self,
        x1: f64,
        x2: f64,
        y1: f64,
        y2: f64,
    ) -> Result<ElementHandle> {
        Ok(SceneElement::new(ElementKind::RectangleAnnotation)
            .with_property("xValueRange", Range::new(x1, x2))
            .with_property("yValueRange", Range::new(y1, y2))
            .into_handle())
    }

    fn create_symbol_annotation(&self, spec: SymbolSpec) -> Result<ElementHandle> {
        let mut symbol = SceneElement::new(ElementKind::SymbolAnnotation)
            .with_property("valuePoint", Point2D::new(spec.x, spec.y));
        if let Some(shape) = spec.shape {
            symbol = symbol.with_property("symbolShape", Value::Constant(shape));
        }
        if let Some(text) = spec.text {
            symbol = symbol.with_property("text", text);
        }
        Ok(symbol.into_handle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_plot_defaults() {
        let plot = SceneFactory::new().create_plot().unwrap();
        assert_eq!(
            plot.property("containerSize"),
            Some(Value::Dimension(DEFAULT_CONTAINER_SIZE))
        );
        assert_eq!(plot.property("color"), Some(Value::Color(Rgba::BLACK)));
        assert!(plot.sub_target(SubTarget::Legend).is_some());
    }

    #[test]
    fn test_axes_share_tick_manager_by_default() {
        let axes = SceneFactory::new().create_axes(3).unwrap();
        let first = axes[0].sub_target(SubTarget::TickManager).unwrap();
        let third = axes[2].sub_target(SubTarget::TickManager).unwrap();
        assert!(Rc::ptr_eq(&first, &third));
        assert_eq!(axes[1].property("position"), Some(Value::constant("POSITIVE_SIDE")));
        assert_eq!(axes[2].property("position"), Some(Value::constant("NEGATIVE_SIDE")));
    }

    #[test]
    fn test_independent_tick_managers() {
        let axes = SceneFactory::new()
            .shared_tick_manager(false)
            .create_axes(2)
            .unwrap();
        let first = axes[0].sub_target(SubTarget::TickManager).unwrap();
        let second = axes[1].sub_target(SubTarget::TickManager).unwrap();
        assert!(!Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_colorbar_wiring() {
        let colorbar = SceneFactory::new().create_colorbar().unwrap();
        let inner = colorbar.sub_target(SubTarget::InnerAxis).unwrap();
        let outer = colorbar.sub_target(SubTarget::OuterAxis).unwrap();
        let tm = inner.sub_target(SubTarget::TickManager).unwrap();
        assert!(Rc::ptr_eq(&tm, &outer.sub_target(SubTarget::TickManager).unwrap()));
        assert!(Rc::ptr_eq(
            &tm.sub_target(SubTarget::AxisTransform).unwrap(),
            &colorbar.sub_target(SubTarget::AxisTransform).unwrap()
        ));
    }

    #[test]
    fn test_existing_graph_data_is_shared() {
        let factory = SceneFactory::new();
        let xy = ArrayPair::from_f64(&[1.0], &[2.0]).unwrap();
        let first = factory
            .create_xy_graph(XyGraphSource::Pairs {
                xy: xy.clone(),
                errors: None,
                name: Some("first".to_string()),
            })
            .unwrap();
        let copy = factory
            .create_xy_graph(XyGraphSource::Existing(Rc::clone(&first)))
            .unwrap();
        assert_eq!(copy.property("data"), Some(Value::Pair(xy)));
        assert_eq!(copy.property("name"), None);
    }

    #[test]
    fn test_symbol_annotation_properties() {
        let symbol = SceneFactory::new()
            .create_symbol_annotation(SymbolSpec {
                x: 1.0,
                y: 2.0,
                shape: Some("FTRIANGLE".to_string()),
                text: None,
            })
            .unwrap();
        assert_eq!(symbol.property("valuePoint"), Some(Value::Point(Point2D::new(1.0, 2.0))));
        assert_eq!(symbol.property("symbolShape"), Some(Value::constant("FTRIANGLE")));
        assert_eq!(symbol.property("text"), None);
    }
}
