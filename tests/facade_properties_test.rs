//! Façade Behaviour Tests
//!
//! End-to-end claims about builders running against the in-memory scene
//! engine: registry lookups, property routing, coercion, rejection of unknown
//! names, layer composition and colorbar broadcasting.
//!
//! Run: cargo test --test facade_properties_test

#![allow(clippy::unwrap_used)]

use std::rc::Rc;
use std::sync::Arc;

use approx::assert_relative_eq;
use proptest::prelude::*;

use plot_facade::prelude::*;

fn facade() -> Facade<SceneFactory> {
    Facade::new(SceneFactory::new())
}

fn range_of(handle: &ElementHandle) -> Range {
    match handle.property("range") {
        Some(Value::Range(r)) => r,
        other => panic!("expected a range, got {other:?}"),
    }
}

fn tick_manager(axis: &ElementHandle) -> ElementHandle {
    axis.sub_target(SubTarget::TickManager).unwrap()
}

// ============================================================================
// Registry
// ============================================================================

/// Claim 1: every built-in kind has a non-empty, stable property set
#[test]
fn claim_01_registry_lookup_nonempty_and_idempotent() {
    let registry = PropertyRegistry::global();
    for kind in ElementKind::ALL {
        let first = registry.properties_of(kind).unwrap();
        let again = registry.properties_of(kind).unwrap();
        assert!(!first.is_empty(), "{kind} has no writable properties");
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(*first, *again);
    }
}

// ============================================================================
// Unknown names
// ============================================================================

/// Claim 2: an unknown name fails the call and assigns nothing
#[test]
fn claim_02_unknown_name_assigns_nothing() {
    let f = facade();
    let axis = f.axis(&NamedArgs::new()).unwrap();

    let err = f
        .configure(
            &*axis,
            &named_args! { tickSide = Value::constant("OUTWARD"), tickSize = 4.0 },
        )
        .unwrap_err();

    assert_eq!(
        err,
        Error::UnknownProperty {
            kind: ElementKind::AxisGroup,
            name: "tickSize".to_string()
        }
    );
    assert_eq!(axis.property("tickSide"), None);
}

#[test]
fn claim_02_unknown_name_on_multi_level_builder() {
    let err = facade()
        .axes(
            2,
            &named_args! { range = (0.0, 1.0), labelVisible = false, bogus = 1 },
        )
        .unwrap_err();
    assert!(matches!(err, Error::UnknownProperty { kind: ElementKind::AxisGroup, .. }));
    assert_eq!(err.to_string(), "Axis has no attribute bogus");
}

// ============================================================================
// Axes
// ============================================================================

/// Claim 3: a range tuple on a single axis becomes the tick manager's range
#[test]
fn claim_03_axis_range_reaches_tick_manager() {
    let axes = facade().axes(1, &named_args! { range = (0.8, 2.2) }).unwrap();
    assert_eq!(axes.len(), 1);

    let range = range_of(&tick_manager(&axes[0]));
    assert_relative_eq!(range.start, 0.8);
    assert_relative_eq!(range.end, 2.2);
    assert_eq!(axes[0].property("range"), None);
}

/// Claim 4: axis properties broadcast, tick manager properties do not
#[test]
fn claim_04_axes_broadcast_and_first_axis_tick_manager() {
    let f = Facade::new(SceneFactory::new().shared_tick_manager(false));
    let axes = f
        .axes(
            2,
            &named_args! { tickSide = Value::constant("OUTWARD"), range = (0.0, 5.0) },
        )
        .unwrap();

    for axis in &axes {
        assert_eq!(axis.property("tickSide"), Some(Value::constant("OUTWARD")));
    }
    assert_eq!(range_of(&tick_manager(&axes[0])), Range::new(0.0, 5.0));
    assert_eq!(tick_manager(&axes[1]).property("range"), None);
}

#[test]
fn claim_04_shared_tick_manager_sees_range_from_every_axis() {
    let axes = facade().axes(3, &named_args! { range = (0.0, 5.0) }).unwrap();
    for axis in &axes {
        assert_eq!(range_of(&tick_manager(axis)), Range::new(0.0, 5.0));
    }
    assert_eq!(axes[1].property("position"), Some(Value::constant("POSITIVE_SIDE")));
}

#[test]
fn claim_04_transform_properties_reach_first_axis_only() {
    let f = Facade::new(SceneFactory::new().shared_tick_manager(false));
    let axes = f
        .axes(2, &named_args! { type = Value::constant("LOGARITHMIC") })
        .unwrap();
    let transform = |axis: &ElementHandle| {
        tick_manager(axis)
            .sub_target(SubTarget::AxisTransform)
            .unwrap()
    };
    assert_eq!(
        transform(&axes[0]).property("type"),
        Some(Value::constant("LOGARITHMIC"))
    );
    assert_eq!(transform(&axes[1]).property("type"), None);
}

// ============================================================================
// Layers
// ============================================================================

/// Claim 5: layers hold exactly the given graphs in order
#[test]
fn claim_05_layer_holds_graphs_in_order() {
    let f = facade();
    let a = f
        .xy_graph(
            &[Value::sequence(&[1.0, 2.0]), Value::sequence(&[3.0, 4.0])],
            &named_args! { name = "a" },
        )
        .unwrap();
    let b = f
        .xy_graph(
            &[Value::sequence(&[1.0]), Value::sequence(&[2.0]), Value::from("b")],
            &NamedArgs::new(),
        )
        .unwrap();

    let layer = f
        .layer(&[Value::from(&a), Value::from(&b)], &NamedArgs::new())
        .unwrap();
    let children = layer.children();
    assert_eq!(children.len(), 2);
    assert!(Rc::ptr_eq(&children[0], &a));
    assert!(Rc::ptr_eq(&children[1], &b));
    assert_eq!(children[1].property("name"), Some(Value::from("b")));
}

#[test]
fn claim_05_layer_rejects_non_graph() {
    let err = facade().layer(&[Value::Int(42)], &NamedArgs::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidArguments { .. }));

    let f = facade();
    let title = f.title("t", &NamedArgs::new()).unwrap();
    assert!(f.layer(&[Value::from(&title)], &NamedArgs::new()).is_err());
}

// ============================================================================
// Colorbar
// ============================================================================

/// Claim 6: colorbar axis properties reach both the inner and outer axis
#[test]
fn claim_06_colorbar_broadcasts_to_both_axes() {
    let colorbar = facade()
        .colorbar(&named_args! { tickVisible = 0, barWidth = 12.0, range = (0.0, 1.0) })
        .unwrap();

    let inner = colorbar.sub_target(SubTarget::InnerAxis).unwrap();
    let outer = colorbar.sub_target(SubTarget::OuterAxis).unwrap();
    assert_eq!(inner.property("tickVisible"), Some(Value::Int(0)));
    assert_eq!(outer.property("tickVisible"), Some(Value::Int(0)));
    assert_eq!(colorbar.property("barWidth"), Some(Value::Float(12.0)));
    assert_eq!(range_of(&tick_manager(&inner)), Range::new(0.0, 1.0));
}

#[test]
fn colorbar_transform_properties() {
    let colorbar = facade()
        .colorbar(&named_args! { inverted = true })
        .unwrap();
    let transform = colorbar.sub_target(SubTarget::AxisTransform).unwrap();
    assert_eq!(transform.property("inverted"), Some(Value::Bool(true)));
}

// ============================================================================
// Graphs, annotations and configuration
// ============================================================================

#[test]
fn image_graph_with_typed_band() {
    let graph = facade()
        .image_graph(
            &[
                Value::sequence(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]),
                Value::Int(3),
                Value::Int(2),
                Value::from("f"),
            ],
            &named_args! { zOrder = 2 },
        )
        .unwrap();
    match graph.property("data") {
        Some(Value::Grid(grid)) => {
            assert_eq!((grid.width(), grid.height()), (3, 2));
            assert_eq!(grid.data().element_type(), ElementType::F32);
        }
        other => panic!("unexpected data {other:?}"),
    }
}

#[test]
fn image_graph_bad_shape_reports_signature() {
    let err = facade()
        .image_graph(&[Value::sequence(&[1.0]), Value::from("x")], &NamedArgs::new())
        .unwrap_err();
    assert_eq!(err.to_string(), "illegal arguments for ImageGraph: (Sequence, Text)");
}

#[test]
fn annotations_coerce_ranges_and_colors() {
    let f = facade();
    let strip = f
        .hstrip_annotation(0.8, 1.2, &named_args! { fillPaint = (255.0, 200.0, 200.0) })
        .unwrap();
    assert_eq!(strip.property("valueRange"), Some(Value::Range(Range::new(0.8, 1.2))));
    assert_eq!(
        strip.property("fillPaint"),
        Some(Value::Color(Rgba::rgb(255, 200, 200)))
    );

    let dashed = f.stroke(1.0, Some(&[4.0, 4.0])).unwrap();
    let line = f
        .hline_annotation(1.0, &named_args! { stroke = dashed.clone() })
        .unwrap();
    assert_eq!(line.property("stroke"), Some(Value::Stroke(dashed)));

    let rect = f
        .rectangle_annotation(0.0, 1.0, 2.0, 3.0, &named_args! { xValueRange = (0.5, 1.5) })
        .unwrap();
    assert_eq!(rect.property("xValueRange"), Some(Value::Range(Range::new(0.5, 1.5))));
    assert_eq!(rect.property("yValueRange"), Some(Value::Range(Range::new(2.0, 3.0))));
}

#[test]
fn symbol_annotation_with_shape_and_text() {
    let symbol = facade()
        .symbol_annotation(
            &[
                Value::Float(1.0),
                Value::Float(2.0),
                Value::constant("FTRIANGLE"),
                Value::from("peak"),
            ],
            &named_args! { symbolSize = 8.0 },
        )
        .unwrap();
    assert_eq!(symbol.property("text"), Some(Value::from("peak")));
    assert_eq!(symbol.property("symbolSize"), Some(Value::Float(8.0)));
}

#[test]
fn configured_properties_extend_registry() {
    let yaml = "default_element_type: i32\n\
                properties:\n  XYGraph:\n    - { name: lineWidth, type: scalar }\n";
    let config = FacadeConfig::parse(yaml).unwrap();
    let f = Facade::with_config(SceneFactory::new(), config).unwrap();
    let graph = f
        .xy_graph(
            &[Value::sequence(&[1.5, 2.5]), Value::sequence(&[3.0, 4.0])],
            &named_args! { lineWidth = 2.0 },
        )
        .unwrap();
    assert_eq!(graph.property("lineWidth"), Some(Value::Float(2.0)));
    match graph.property("data") {
        Some(Value::Pair(pair)) => assert_eq!(pair.x().element_type(), ElementType::I32),
        other => panic!("unexpected data {other:?}"),
    }

    assert!(facade()
        .xy_graph(
            &[Value::sequence(&[1.0]), Value::sequence(&[2.0])],
            &named_args! { lineWidth = 2.0 },
        )
        .is_err());
}

#[test]
fn rgb_image_graph_through_facade() {
    let band = |v: f64| Value::sequence(&[v; 6]);
    let graph = facade()
        .rgb_image_graph(
            &[band(1.0), band(2.0), band(3.0), Value::Int(2), Value::Int(3)],
            &named_args! { zOrder = 1 },
        )
        .unwrap();
    assert_eq!(graph.kind(), ElementKind::RgbImageGraph);
    assert_eq!(graph.property("zOrder"), Some(Value::Int(1)));
    match (graph.property("data"), graph.property("blue")) {
        (Some(Value::Grid(red)), Some(Value::Grid(blue))) => {
            assert_eq!((red.width(), red.height()), (2, 3));
            assert_eq!(blue.get(1, 2), Some(3.0));
        }
        other => panic!("unexpected bands {other:?}"),
    }
}

#[test]
fn image_dimensions_that_overflow_are_rejected() {
    let f = facade();
    let err = f
        .image_graph(
            &[Value::sequence(&[1.0]), Value::Int(i64::MAX), Value::Int(4)],
            &NamedArgs::new(),
        )
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "illegal arguments for ImageGraph: (Sequence, Int, Int)"
    );

    let band = Value::sequence(&[1.0]);
    let err = f
        .rgb_image_graph(
            &[band.clone(), band.clone(), band, Value::Int(i64::MAX), Value::Int(4)],
            &NamedArgs::new(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArguments { ref kind, .. } if kind == "RGBImageGraph"));
}

#[test]
fn subplot_takes_plot_properties_only() {
    let f = facade();
    let subplot = f
        .subplot(&named_args! { preferredContentSize = (400.0, 100.0) })
        .unwrap();
    assert_eq!(subplot.kind(), ElementKind::Subplot);
    assert_eq!(
        subplot.property("preferredContentSize"),
        Some(Value::Dimension(Dimension2D::new(400.0, 100.0)))
    );

    let err = f.subplot(&named_args! { borderVisible = 0 }).unwrap_err();
    assert_eq!(err.to_string(), "Subplot has no attribute borderVisible");
}

#[test]
fn vertical_annotations() {
    let f = facade();
    let line = f.vline_annotation(2.5, &named_args! { zOrder = 3 }).unwrap();
    assert_eq!(line.kind(), ElementKind::VLineAnnotation);
    assert_eq!(line.property("value"), Some(Value::Float(2.5)));
    assert_eq!(line.property("zOrder"), Some(Value::Int(3)));

    let strip = f
        .vstrip_annotation(1.0, 4.0, &named_args! { fillPaint = (200.0, 200.0, 255.0) })
        .unwrap();
    assert_eq!(strip.property("valueRange"), Some(Value::Range(Range::new(1.0, 4.0))));
    assert_eq!(
        strip.property("fillPaint"),
        Some(Value::Color(Rgba::rgb(200, 200, 255)))
    );

    assert!(f
        .vstrip_annotation(1.0, 4.0, &named_args! { value = 2.0 })
        .is_err());
}

#[test]
fn earlier_handles_survive_a_failed_call() {
    let f = facade();
    let axis = f
        .axis(&named_args! { tickSide = Value::constant("OUTWARD"), range = (0.0, 2.0) })
        .unwrap();
    let graph = f
        .xy_graph(
            &[Value::sequence(&[1.0]), Value::sequence(&[2.0])],
            &named_args! { name = "kept" },
        )
        .unwrap();

    assert!(f.axes(2, &named_args! { range = (5.0, 6.0), bogus = 1 }).is_err());
    assert!(f
        .configure(&*axis, &named_args! { tickSide = Value::constant("INWARD"), bogus = 1 })
        .is_err());
    assert!(f.layer(&[Value::from(&graph), Value::Int(1)], &NamedArgs::new()).is_err());

    assert_eq!(axis.property("tickSide"), Some(Value::constant("OUTWARD")));
    assert_eq!(range_of(&tick_manager(&axis)), Range::new(0.0, 2.0));
    assert_eq!(graph.property("name"), Some(Value::from("kept")));

    f.configure(&*axis, &named_args! { labelVisible = false }).unwrap();
    assert_eq!(axis.property("labelVisible"), Some(Value::Bool(false)));
    let layer = f.layer(&[Value::from(&graph)], &NamedArgs::new()).unwrap();
    assert!(Rc::ptr_eq(&layer.children()[0], &graph));
}

// ============================================================================
// Keyword sets from published figure scripts
// ============================================================================

#[test]
fn histogram_figure_keywords_are_accepted() {
    let f = facade();
    let plot = f
        .plot(&named_args! { sizeMode = Value::constant("AutoPackSizeMode") })
        .unwrap();
    let hsp = f
        .subplot(&named_args! { preferredContentSize = (400.0, 100.0) })
        .unwrap();
    assert_eq!(plot.kind(), ElementKind::Plot);

    let x_axes = f
        .axes(
            2,
            &named_args! { transform = Value::constant("LOGARITHMIC"), range = (0.1, 6.0) },
        )
        .unwrap();
    assert_eq!(range_of(&tick_manager(&x_axes[0])), Range::new(0.1, 6.0));
    f.axes(2, &named_args! { range = (0.0, 34.0), labelFormat = "%.0f" })
        .unwrap();

    let z: Vec<f64> = (0..21).map(|i| f64::from(i) * 0.25).collect();
    let counts: Vec<f64> = z.iter().map(|v| (v * 3.0).floor()).collect();
    let gray = Value::Color(Rgba::rgb(128, 128, 128));
    let graph = f
        .xy_graph(
            &[Value::sequence(&z), Value::sequence(&counts)],
            &named_args! {
                chartType = Value::constant("HISTOGRAM_EDGE"),
                fillEnabled = 1,
                fillPaint = gray.clone(),
                name = "Detected in both bands",
            },
        )
        .unwrap();
    assert_eq!(graph.property("fillPaint"), Some(gray));

    let legend = hsp.sub_target(SubTarget::Legend).unwrap();
    f.configure(
        &*legend,
        &named_args! {
            position = Value::Null,
            location = (390.0, 90.0),
            columns = 1,
            HAlign = Value::constant("RIGHT"),
            VAlign = Value::constant("TOP"),
            fontScale = 0.9,
            borderVisible = 0,
        },
    )
    .unwrap();
    assert_eq!(legend.property("HAlign"), Some(Value::constant("RIGHT")));
    assert_eq!(legend.property("VAlign"), Some(Value::constant("TOP")));
    assert_eq!(legend.property("columns"), Some(Value::Int(1)));
}

#[test]
fn correlation_figure_legend_keywords_are_accepted() {
    let f = facade();
    let usp = f.subplot(&NamedArgs::new()).unwrap();
    let legend = usp.sub_target(SubTarget::Legend).unwrap();
    f.configure(
        &*legend,
        &named_args! {
            position = Value::Null,
            columns = 1,
            location = (-10.0, 250.0),
            HAlign = Value::constant("LEFT"),
            VAlign = Value::constant("TOP"),
            borderVisible = 0,
            fontSize = 12,
        },
    )
    .unwrap();
    assert_eq!(legend.property("fontSize"), Some(Value::Int(12)));

    let title = f
        .title("z", &named_args! { HAlign = Value::constant("CENTER"), gapFactor = 0.5 })
        .unwrap();
    assert_eq!(title.property("HAlign"), Some(Value::constant("CENTER")));
    assert!(f
        .title("z", &named_args! { hAlign = Value::constant("CENTER") })
        .is_err());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Names outside every routing level are always rejected, and the target
    /// keeps its prior state.
    #[test]
    fn prop_unknown_names_never_mutate(suffix in "[a-z]{1,12}", width in 0.0f64..10.0) {
        let name = format!("zz{suffix}");
        let f = facade();
        let legend = f.plot(&NamedArgs::new()).unwrap().sub_target(SubTarget::Legend).unwrap();
        let before = legend.property("enabled");

        let args = NamedArgs::new()
            .with("enabled", false)
            .with("columns", width)
            .with(&name, width);
        let result = f.configure(&*legend, &args);

        let is_unknown = matches!(result, Err(Error::UnknownProperty { .. }));
        prop_assert!(is_unknown);
        prop_assert_eq!(legend.property("enabled"), before);
        prop_assert_eq!(legend.property("columns"), None);
    }

    /// Range tuples on axes always land on the first tick manager unchanged.
    #[test]
    fn prop_axis_range_round_trips(start in -1e6f64..1e6, end in -1e6f64..1e6, n in 1usize..5) {
        let axes = facade().axes(n, &named_args! { range = (start, end) }).unwrap();
        prop_assert_eq!(axes.len(), n);
        let range = range_of(&tick_manager(&axes[0]));
        prop_assert_eq!(range.start, start);
        prop_assert_eq!(range.end, end);
    }
}
