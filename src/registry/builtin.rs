//! Built-in property table for the standard element kinds.

use super::ExpectedType::{self, Color, Dimension2D, Opaque, Point2D, Range, Scalar};
use super::{Metadata, PropertyDescriptor};
use crate::element::ElementKind;

type Table = &'static [(&'static str, ExpectedType)];

/// Properties shared by every visible component.
const COMPONENT: Table = &[
    ("cacheable", Scalar),
    ("color", Color),
    ("font", Opaque),
    ("fontName", Scalar),
    ("fontScale", Scalar),
    ("fontSize", Scalar),
    ("fontStyle", Scalar),
    ("selectable", Scalar),
    ("visible", Scalar),
    ("zOrder", Scalar),
];

const PLOT: Table = &[
    ("containerSize", Dimension2D),
    ("layoutDirector", Opaque),
    ("location", Point2D),
    ("preferredContentSize", Dimension2D),
    ("scale", Scalar),
    ("size", Dimension2D),
    ("sizeMode", Opaque),
];

// Alignment names keep their leading capitals (`setHAlign` -> `HAlign`).
const TITLE: Table = &[
    ("text", Scalar),
    ("gapFactor", Scalar),
    ("HAlign", Opaque),
    ("VAlign", Opaque),
    ("location", Point2D),
    ("movable", Scalar),
    ("position", Opaque),
];

// Axis-level display properties, common to plot axes and colorbar axes.
const AXIS_DISPLAY: Table = &[
    ("labelColor", Color),
    ("labelOrientation", Opaque),
    ("labelSide", Opaque),
    ("labelVisible", Scalar),
    ("minorTickHeight", Scalar),
    ("tickHeight", Scalar),
    ("tickSide", Opaque),
    ("tickVisible", Scalar),
    ("titleVisible", Scalar),
];

const PLOT_AXIS: Table = &[
    ("gridLines", Scalar),
    ("minorGridLines", Scalar),
    ("position", Opaque),
    ("tickManager", Opaque),
];

const TICK_MANAGER: Table = &[
    ("autoLabelFormat", Scalar),
    ("autoMinorTicks", Scalar),
    ("autoReduceTickNumber", Scalar),
    ("autoTickInterval", Scalar),
    ("autoTickValues", Scalar),
    ("axisTransform", Opaque),
    ("fixedLabelStrings", Opaque),
    ("fixedMinorTickValues", Opaque),
    ("fixedTickValues", Opaque),
    ("labelFormat", Scalar),
    ("labelInterval", Scalar),
    ("labelTextFormat", Opaque),
    ("minorTickNumber", Scalar),
    ("range", Range),
    ("tickInterval", Scalar),
    ("tickNumber", Scalar),
    ("tickOffset", Scalar),
    ("tickTransform", Opaque),
];

const AXIS_TRANSFORM: Table = &[
    ("autoMargin", Scalar),
    ("coreRange", Range),
    ("inverted", Scalar),
    ("lockGroup", Opaque),
    ("marginFactor", Scalar),
    ("range", Range),
    ("transform", Opaque),
    ("type", Opaque),
];

const LAYER: Table = &[("xAxisTransform", Opaque), ("yAxisTransform", Opaque)];

const XY_GRAPH: Table = &[
    ("chartType", Opaque),
    ("data", Opaque),
    ("errorbarCapSize", Scalar),
    ("fillClosureType", Opaque),
    ("fillEnabled", Scalar),
    ("fillPaint", Color),
    ("lineStroke", Opaque),
    ("lineVisible", Scalar),
    ("name", Scalar),
    ("symbolColor", Color),
    ("symbolShape", Opaque),
    ("symbolSize", Scalar),
    ("symbolVisible", Scalar),
];

const IMAGE_GRAPH: Table = &[("data", Opaque), ("mapping", Opaque)];

const COLORBAR: Table = &[
    ("barWidth", Scalar),
    ("borderLineWidth", Scalar),
    ("gap", Scalar),
    ("imageMapping", Opaque),
    ("position", Opaque),
];

const LINE_ANNOTATION: Table = &[("stroke", Opaque), ("value", Scalar)];

const STRIP_ANNOTATION: Table = &[("fillPaint", Color), ("valueRange", Range)];

const RECTANGLE_ANNOTATION: Table = &[
    ("fillPaint", Color),
    ("xValueRange", Range),
    ("yValueRange", Range),
];

const SYMBOL_ANNOTATION: Table = &[
    ("angle", Scalar),
    ("HAlign", Opaque),
    ("VAlign", Opaque),
    ("text", Scalar),
    ("valuePoint", Point2D),
    ("symbolScale", Scalar),
    ("symbolShape", Opaque),
    ("symbolSize", Scalar),
    ("textGap", Scalar),
    ("textOffsetFactorX", Scalar),
    ("textOffsetFactorY", Scalar),
];

const LEGEND: Table = &[
    ("borderVisible", Scalar),
    ("columns", Scalar),
    ("enabled", Scalar),
    ("HAlign", Opaque),
    ("location", Point2D),
    ("movable", Scalar),
    ("position", Opaque),
    ("rowSpacingFactor", Scalar),
    ("VAlign", Opaque),
];

fn tables(kind: ElementKind) -> &'static [Table] {
    match kind {
        ElementKind::Plot | ElementKind::Subplot => &[PLOT],
        ElementKind::Title => &[TITLE],
        ElementKind::AxisGroup => &[AXIS_DISPLAY, PLOT_AXIS],
        ElementKind::ColorbarAxis => &[AXIS_DISPLAY],
        ElementKind::TickManager => &[TICK_MANAGER],
        ElementKind::AxisTransform => &[AXIS_TRANSFORM],
        ElementKind::Layer => &[LAYER],
        ElementKind::XyGraph => &[XY_GRAPH],
        ElementKind::ImageGraph | ElementKind::RgbImageGraph => &[IMAGE_GRAPH],
        ElementKind::Colorbar => &[COLORBAR],
        ElementKind::HLineAnnotation | ElementKind::VLineAnnotation => &[LINE_ANNOTATION],
        ElementKind::HStripAnnotation | ElementKind::VStripAnnotation => &[STRIP_ANNOTATION],
        ElementKind::RectangleAnnotation => &[RECTANGLE_ANNOTATION],
        ElementKind::SymbolAnnotation => &[SYMBOL_ANNOTATION],
        ElementKind::Legend => &[LEGEND],
    }
}

/// Metadata for the standard element kinds of the plotting engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMetadata;

impl Metadata for BuiltinMetadata {
    fn writable_properties_of(&self, kind: ElementKind) -> Option<Vec<PropertyDescriptor>> {
        let base: Table = if kind.is_component() { COMPONENT } else { &[] };
        let descriptors = base
            .iter()
            .chain(tables(kind).iter().flat_map(|t| t.iter()))
            .map(|&(name, ty)| PropertyDescriptor::new(name, ty))
            .collect();
        Some(descriptors)
    }
}
