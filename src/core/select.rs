//! Version selection over a raw catalog.
//!
//! A catalog lists every published release of every library. Testing wants
//! exactly one release per library: the latest semantic version among the
//! releases that match the requested architectures.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use semver::Version;
use thiserror::Error;

use crate::core::catalog::LibraryDescriptor;

/// Errors during version selection. Any of these aborts the whole
/// selection: a malformed catalog must not silently shrink the test set.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("library `{name}` has unparseable version `{version}`")]
    InvalidVersion {
        name: String,
        version: String,
        #[source]
        source: semver::Error,
    },
}

/// Does this release qualify under the architecture filter?
///
/// An empty filter matches everything. A release with no declared
/// architectures never matches a non-empty filter.
fn arch_matches(lib: &LibraryDescriptor, arch_filter: &[String]) -> bool {
    if arch_filter.is_empty() {
        return true;
    }
    match &lib.architectures {
        None => false,
        Some(archs) => archs.iter().any(|a| arch_filter.contains(a)),
    }
}

/// Reduce a catalog to one descriptor per library name: the release with
/// the greatest semantic version among those matching `arch_filter`.
///
/// Names are grouped by exact string equality. The output preserves the
/// order in which names first appear in the catalog, so a fixed input
/// yields a fixed selection order for downstream sharding. Two releases
/// with equal versions resolve to the later one in catalog order.
pub fn select_latest(
    catalog: &[LibraryDescriptor],
    arch_filter: &[String],
) -> Result<Vec<LibraryDescriptor>, SelectError> {
    let mut order: Vec<&str> = Vec::new();
    let mut best: HashMap<&str, (Version, &LibraryDescriptor)> = HashMap::new();

    for lib in catalog {
        if !arch_matches(lib, arch_filter) {
            continue;
        }

        let version =
            Version::parse(&lib.version).map_err(|source| SelectError::InvalidVersion {
                name: lib.name.clone(),
                version: lib.version.clone(),
                source,
            })?;

        match best.entry(lib.name.as_str()) {
            Entry::Vacant(entry) => {
                order.push(&lib.name);
                entry.insert((version, lib));
            }
            Entry::Occupied(mut entry) => {
                if version >= entry.get().0 {
                    entry.insert((version, lib));
                }
            }
        }
    }

    Ok(order
        .into_iter()
        .map(|name| best[name].1.clone())
        .collect())
}
