//! Property registry: which properties are writable on each element kind.
//!
//! A [`Metadata`] source answers "what can be written on a `kind`?". The
//! [`PropertyRegistry`] asks it once per kind and keeps the answer for the
//! lifetime of the registry; entries are written at most once and never
//! mutated afterwards, so readers can share the registry freely.
//!
//! ```rust
//! use plot_facade::element::ElementKind;
//! use plot_facade::registry::{ExpectedType, PropertyRegistry};
//!
//! let registry = PropertyRegistry::global();
//! let props = registry.properties_of(ElementKind::TickManager).unwrap();
//! assert_eq!(props.get("range"), Some(ExpectedType::Range));
//! ```

mod builtin;

pub use builtin::BuiltinMetadata;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::element::ElementKind;
use crate::error::{Error, Result};

/// The value type a writable property expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedType {
    /// Numbers, flags and text.
    Scalar,
    /// Width/height pair.
    Dimension2D,
    /// X/y point.
    Point2D,
    /// Inclusive low/high range.
    Range,
    /// RGB(A) color or paint.
    Color,
    /// Any engine object.
    Opaque,
}

/// One writable property of an element kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name.
    pub name: String,
    /// Expected value type.
    #[serde(rename = "type")]
    pub expected_type: ExpectedType,
}

impl PropertyDescriptor {
    /// Create a descriptor.
    #[must_use]
    pub fn new(name: &str, expected_type: ExpectedType) -> Self {
        Self {
            name: name.to_string(),
            expected_type,
        }
    }
}

/// The writable properties of one element kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    props: BTreeMap<String, ExpectedType>,
}

impl PropertySet {
    /// Expected type of a property, if it is writable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ExpectedType> {
        self.props.get(name).copied()
    }

    /// Whether a property is writable.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    /// Number of writable properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterate over the descriptors, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = PropertyDescriptor> + '_ {
        self.props
            .iter()
            .map(|(name, ty)| PropertyDescriptor::new(name, *ty))
    }
}

impl FromIterator<PropertyDescriptor> for PropertySet {
    fn from_iter<I: IntoIterator<Item = PropertyDescriptor>>(iter: I) -> Self {
        Self {
            props: iter
                .into_iter()
                .map(|d| (d.name, d.expected_type))
                .collect(),
        }
    }
}

/// Source of writable-property metadata.
pub trait Metadata: Send + Sync {
    /// Writable properties of `kind`, or `None` if the kind is unknown to
    /// this source.
    fn writable_properties_of(&self, kind: ElementKind) -> Option<Vec<PropertyDescriptor>>;
}

/// Caching lookup of writable properties per element kind.
pub struct PropertyRegistry {
    metadata: Box<dyn Metadata>,
    cache: RwLock<HashMap<ElementKind, Arc<PropertySet>>>,
}

impl fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self.cache.read().unwrap_or_else(PoisonError::into_inner).len();
        f.debug_struct("PropertyRegistry")
            .field("cached_kinds", &cached)
            .finish_non_exhaustive()
    }
}

impl PropertyRegistry {
    /// Create a registry over a metadata source.
    #[must_use]
    pub fn new(metadata: impl Metadata + 'static) -> Self {
        Self {
            metadata: Box::new(metadata),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry over [`BuiltinMetadata`].
    ///
    /// Initialised on first use and never torn down.
    #[must_use]
    pub fn global() -> Arc<PropertyRegistry> {
        static GLOBAL: OnceLock<Arc<PropertyRegistry>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(PropertyRegistry::new(BuiltinMetadata))))
    }

    /// Writable properties of `kind`.
    ///
    /// Repeated calls return the same cached set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] if the metadata has no entry for `kind`.
    pub fn properties_of(&self, kind: ElementKind) -> Result<Arc<PropertySet>> {
        if let Some(set) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
        {
            return Ok(Arc::clone(set));
        }

        let descriptors = self
            .metadata
            .writable_properties_of(kind)
            .ok_or(Error::UnknownKind(kind))?;
        let set: PropertySet = descriptors.into_iter().collect();
        tracing::trace!(%kind, properties = set.len(), "caching property metadata");

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(cache.entry(kind).or_insert_with(|| Arc::new(set))))
    }

    /// Number of kinds looked up so far.
    #[must_use]
    pub fn cached_kinds(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
