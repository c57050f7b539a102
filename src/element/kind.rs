//! Element kinds known to the façade.

use std::fmt;
use std::str::FromStr;

/// The kind of a plot element. Each kind owns one entry in the property
/// registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    /// Top-level plot.
    Plot,
    /// Plot nested inside another plot.
    Subplot,
    /// Plot title.
    Title,
    /// A single axis of an axis group.
    AxisGroup,
    /// Layer holding graphs.
    Layer,
    /// XY line/symbol graph.
    XyGraph,
    /// Single-band image graph.
    ImageGraph,
    /// Three-band RGB image graph.
    RgbImageGraph,
    /// Colorbar.
    Colorbar,
    /// Inner or outer axis of a colorbar.
    ColorbarAxis,
    /// Tick manager shared by parallel axes.
    TickManager,
    /// Value transform shared by parallel axes.
    AxisTransform,
    /// Horizontal line annotation.
    HLineAnnotation,
    /// Vertical line annotation.
    VLineAnnotation,
    /// Horizontal strip annotation.
    HStripAnnotation,
    /// Vertical strip annotation.
    VStripAnnotation,
    /// Rectangle annotation.
    RectangleAnnotation,
    /// Symbol annotation with optional text.
    SymbolAnnotation,
    /// Plot legend.
    Legend,
}

impl ElementKind {
    /// All element kinds.
    pub const ALL: [ElementKind; 19] = [
        ElementKind::Plot,
        ElementKind::Subplot,
        ElementKind::Title,
        ElementKind::AxisGroup,
        ElementKind::Layer,
        ElementKind::XyGraph,
        ElementKind::ImageGraph,
        ElementKind::RgbImageGraph,
        ElementKind::Colorbar,
        ElementKind::ColorbarAxis,
        ElementKind::TickManager,
        ElementKind::AxisTransform,
        ElementKind::HLineAnnotation,
        ElementKind::VLineAnnotation,
        ElementKind::HStripAnnotation,
        ElementKind::VStripAnnotation,
        ElementKind::RectangleAnnotation,
        ElementKind::SymbolAnnotation,
        ElementKind::Legend,
    ];

    /// The engine's interface name for the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::Plot => "Plot",
            ElementKind::Subplot => "Subplot",
            ElementKind::Title => "Title",
            ElementKind::AxisGroup => "Axis",
            ElementKind::Layer => "Layer",
            ElementKind::XyGraph => "XYGraph",
            ElementKind::ImageGraph => "ImageGraph",
            ElementKind::RgbImageGraph => "RGBImageGraph",
            ElementKind::Colorbar => "Colorbar",
            ElementKind::ColorbarAxis => "ColorbarAxis",
            ElementKind::TickManager => "AxisTickManager",
            ElementKind::AxisTransform => "AxisTransform",
            ElementKind::HLineAnnotation => "HLineAnnotation",
            ElementKind::VLineAnnotation => "VLineAnnotation",
            ElementKind::HStripAnnotation => "HStripAnnotation",
            ElementKind::VStripAnnotation => "VStripAnnotation",
            ElementKind::RectangleAnnotation => "RectangleAnnotation",
            ElementKind::SymbolAnnotation => "SymbolAnnotation",
            ElementKind::Legend => "Legend",
        }
    }

    /// Whether elements of this kind can be added to a layer.
    #[must_use]
    pub const fn is_graph(self) -> bool {
        matches!(
            self,
            ElementKind::XyGraph | ElementKind::ImageGraph | ElementKind::RgbImageGraph
        )
    }

    /// Whether the kind is a visible component (as opposed to an axis
    /// geometry helper such as a tick manager or transform).
    #[must_use]
    pub const fn is_component(self) -> bool {
        !matches!(self, ElementKind::TickManager | ElementKind::AxisTransform)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognised kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element kind: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for ElementKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AxisGroup" | "PlotAxis" => return Ok(ElementKind::AxisGroup),
            "TickManager" => return Ok(ElementKind::TickManager),
            _ => {}
        }
        ElementKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}
