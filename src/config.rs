//! Façade configuration.
//!
//! Loaded from YAML with defaults for every field:
//!
//! ```yaml
//! version: 1
//! default_element_type: f64
//! properties:
//!   XYGraph:
//!     - { name: lineWidth, type: scalar }
//!   Legend:
//!     - { name: background, type: color }
//! ```
//!
//! `properties` adds writable properties on top of the built-in table, for
//! engines that expose more than the standard element interfaces.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::data::ElementType;
use crate::element::ElementKind;
use crate::error::{Error, Result};
use crate::registry::{BuiltinMetadata, Metadata, PropertyDescriptor};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacadeConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Element type used when graph data arrives as plain sequences without a
    /// type tag.
    #[serde(default)]
    pub default_element_type: ElementType,

    /// Extra writable properties per element kind name.
    #[serde(default)]
    pub properties: BTreeMap<String, Vec<PropertyDescriptor>>,
}

fn default_version() -> u32 {
    1
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            default_element_type: ElementType::default(),
            properties: BTreeMap::new(),
        }
    }
}

impl FacadeConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::ConfigInvalid`] if the content is well-formed but invalid.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default façade configuration");
            Self::default()
        })
    }

    /// Checks the version and property kind names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(Error::ConfigInvalid {
                key: "version".to_string(),
                message: format!("unsupported version {}", self.version),
            });
        }
        self.extra_properties().map(|_| ())
    }

    /// Metadata combining the built-in table with the configured properties.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] for an unknown kind name.
    pub fn metadata(&self) -> Result<ConfiguredMetadata> {
        Ok(ConfiguredMetadata {
            extra: self.extra_properties()?,
        })
    }

    fn extra_properties(&self) -> Result<HashMap<ElementKind, Vec<PropertyDescriptor>>> {
        self.properties
            .iter()
            .map(|(name, props)| {
                let kind = name.parse::<ElementKind>().map_err(|e| Error::ConfigInvalid {
                    key: format!("properties.{name}"),
                    message: e.to_string(),
                })?;
                Ok((kind, props.clone()))
            })
            .collect()
    }
}

/// Built-in metadata extended with configured properties.
///
/// A configured property with a built-in name overrides its expected type.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredMetadata {
    extra: HashMap<ElementKind, Vec<PropertyDescriptor>>,
}

impl Metadata for ConfiguredMetadata {
    fn writable_properties_of(&self, kind: ElementKind) -> Option<Vec<PropertyDescriptor>> {
        let mut props = BuiltinMetadata.writable_properties_of(kind)?;
        for extra in self.extra.get(&kind).into_iter().flatten() {
            props.retain(|p| p.name != extra.name);
            props.push(extra.clone());
        }
        Some(props)
    }
}
