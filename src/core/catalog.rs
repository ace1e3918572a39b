//! Library catalog loading.
//!
//! A catalog is the upstream library index: a JSON document that is either
//! a bare array of library records or an object with a `libraries` field
//! holding that array. Records for the same library name may appear many
//! times, once per published version.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// One catalog entry: a library name at one version, with optional
/// architecture tags and an optional declared header list.
///
/// Unrecognized index fields are retained in `extra` so shard files
/// round-trip every field the upstream catalog carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryDescriptor {
    /// Library name, matched by exact string equality.
    pub name: String,

    /// Version string; must parse as a semantic version when selected.
    pub version: String,

    /// Architectures this release supports. Absent means undeclared,
    /// which never matches a non-empty architecture filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architectures: Option<Vec<String>>,

    /// Headers the library declares as its public include surface.
    /// When non-empty these are trusted verbatim and discovery is skipped.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provides_includes: Vec<String>,

    /// Remaining index fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LibraryDescriptor {
    /// Create a bare descriptor with just a name and version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        LibraryDescriptor {
            name: name.into(),
            version: version.into(),
            architectures: None,
            provides_includes: Vec::new(),
            extra: Map::new(),
        }
    }

    /// The `name@version` form the package manager installs.
    pub fn install_spec(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    /// Directory name the package manager installs this library under:
    /// the library name with spaces replaced by underscores.
    pub fn install_dir_name(&self) -> String {
        self.name.replace(' ', "_")
    }
}

/// Errors loading a catalog. All of these are fatal configuration errors:
/// a malformed catalog must not silently produce wrong results.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog must be a JSON array or an object with a `libraries` field")]
    InvalidShape,
}

/// Parse a catalog document: either a bare array of descriptors or an
/// object wrapping the array in a `libraries` field.
pub fn parse_catalog(text: &str) -> Result<Vec<LibraryDescriptor>, CatalogError> {
    let value: Value = serde_json::from_str(text)?;

    let list = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut fields) => match fields.remove("libraries") {
            Some(list @ Value::Array(_)) => list,
            _ => return Err(CatalogError::InvalidShape),
        },
        _ => return Err(CatalogError::InvalidShape),
    };

    Ok(serde_json::from_value(list)?)
}

/// Load a catalog from a file.
pub fn load_catalog(path: &Path) -> Result<Vec<LibraryDescriptor>, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&text)
}
