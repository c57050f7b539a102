//! # Plot-Facade
//!
//! Declarative, keyword-configured construction of 2D scientific plot elements.
//!
//! Elements (plots, axes, layers, graphs, colorbars, annotations) are created
//! through an engine-supplied [`element::ElementFactory`]. Each builder takes its
//! structural arguments positionally and its visual properties by name; named
//! arguments are checked against the writable properties of the element and
//! of its sub-objects, coerced (`(a, b)` tuples become sizes, points or ranges,
//! `(r, g, b)` tuples become colors) and assigned in order.
//!
//! ## Quick Start
//!
//! ```rust
//! use plot_facade::prelude::*;
//!
//! let facade = Facade::new(SceneFactory::new());
//!
//! let graph = facade
//!     .xy_graph(
//!         &[Value::sequence(&[1.0, 2.0, 3.0]), Value::sequence(&[2.0, 4.0, 1.0])],
//!         &named_args! { color = (95.0, 207.0, 125.0), symbolVisible = true },
//!     )
//!     .unwrap();
//! let layer = facade.layer(&[Value::from(&graph)], &named_args! {}).unwrap();
//! let axis = facade.axis(&named_args! { range = (0.8, 2.2) }).unwrap();
//!
//! assert_eq!(layer.children().len(), 1);
//! assert_eq!(graph.property("color"), Some(Value::Color(Rgba::rgb(95, 207, 125))));
//! # let _ = axis;
//! ```
//!
//! ## Property routing
//!
//! Some builders configure several objects at once. `axes` tries each name on
//! every axis of the group, then on the first axis's tick manager, then on
//! that tick manager's axis transform. `colorbar` tries the colorbar, its
//! inner and outer axis, the inner axis's tick manager and the colorbar's
//! transform. A name no level accepts fails the whole
//! call before anything is assigned. A plot's legend is configured through its
//! own handle.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Value Modules
// ============================================================================

/// Color values.
pub mod color;

/// Sizes, points and ranges.
pub mod geometry;

/// Typed numeric buffers, array pairs and image bands.
pub mod data;

/// Line strokes.
pub mod stroke;

/// Loosely typed argument values and coercion.
pub mod value;

// ============================================================================
// Engine Interfaces
// ============================================================================

/// Element kinds, handles and the factory trait.
pub mod element;

/// Writable-property metadata and its cache.
pub mod registry;

/// Positional argument shapes.
pub mod args;

// ============================================================================
// Façade
// ============================================================================

/// Builders and property dispatch.
pub mod facade;

/// YAML configuration.
pub mod config;

/// In-memory reference engine.
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for plot-facade operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use plot_facade::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::FacadeConfig;
    pub use crate::data::{ArrayPair, ElementType, NumericBuffer, NumericGrid};
    pub use crate::element::{
        Element, ElementFactory, ElementHandle, ElementKind, PropertyTarget, SubTarget,
    };
    pub use crate::error::{Error, Result};
    pub use crate::facade::Facade;
    pub use crate::geometry::{Dimension2D, Point2D, Range};
    pub use crate::named_args;
    pub use crate::registry::{ExpectedType, PropertyRegistry};
    pub use crate::scene::SceneFactory;
    pub use crate::stroke::Stroke;
    pub use crate::value::{NamedArgs, Value};
}
