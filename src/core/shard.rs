//! Partitioning a selection for parallel workers.
//!
//! The selected library list is split into contiguous, near-equal slices,
//! one per CI worker. A job matrix document tells the external scheduler
//! how many workers to fan out.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Job matrix published for the CI scheduler: one entry per shard index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatrix {
    pub include: Vec<JobIndex>,
}

/// A single matrix entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobIndex {
    pub index: usize,
}

/// Build the job matrix for `parallelism` workers, indexed `0..parallelism`.
pub fn job_matrix(parallelism: usize) -> JobMatrix {
    JobMatrix {
        include: (0..parallelism).map(|index| JobIndex { index }).collect(),
    }
}

/// How many items each shard holds: `ceil(total / parallelism)`.
pub fn shard_size(total: usize, parallelism: usize) -> usize {
    total.div_ceil(parallelism)
}

/// Split `items` into exactly `parallelism` contiguous shards.
///
/// Shard `i` is the slice `[i*size, (i+1)*size)` clipped to the list
/// bounds, so trailing shards are empty when `parallelism` exceeds the
/// item count. Concatenating the shards in index order reconstructs
/// `items` exactly.
///
/// Callers must validate `parallelism >= 1`; the partitioning itself is
/// deterministic for a fixed input order.
pub fn shard<T: Clone>(items: &[T], parallelism: usize) -> Vec<Vec<T>> {
    let size = shard_size(items.len(), parallelism);
    (0..parallelism)
        .map(|i| {
            let start = (i * size).min(items.len());
            let end = ((i + 1) * size).min(items.len());
            items[start..end].to_vec()
        })
        .collect()
}

/// Name the shard artifact for `index` by inserting the zero-based index
/// before the extension of `base`: `libs.json` becomes `libs0.json`.
pub fn shard_path(base: &Path, index: usize) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{}{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}{}", stem, index),
    };
    base.with_file_name(name)
}
