//! Catalog scheduling: selection, sharding, and shard artifacts.
//!
//! Reads the raw catalog, keeps the latest qualifying version of each
//! library, and writes the selection as one artifact (no sharding) or as
//! `parallelism` numbered shard files plus a job matrix for the CI
//! scheduler to fan out.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::catalog::LibraryDescriptor;
use crate::core::select::select_latest;
use crate::core::shard::{job_matrix, shard, shard_path, shard_size, JobMatrix};
use crate::util::fs::write_string;

/// Options for the schedule step.
#[derive(Debug, Clone)]
pub struct ScheduleOptions {
    /// Number of parallel workers to split the selection across.
    pub parallelism: usize,

    /// Architectures to include; empty means no filtering.
    pub architectures: Vec<String>,

    /// Base path of the selection artifact(s). With `parallelism > 1`
    /// the zero-based shard index is inserted before the extension.
    pub output: PathBuf,
}

/// What the schedule step produced.
#[derive(Debug, Clone)]
pub struct ScheduleResult {
    /// Descriptors in the raw catalog.
    pub total: usize,

    /// Descriptors after filtering and version selection.
    pub selected: usize,

    /// Per-worker shard size.
    pub per_job: usize,

    /// Files written, in shard-index order.
    pub outputs: Vec<PathBuf>,

    /// Job matrix for the external scheduler.
    pub matrix: JobMatrix,
}

/// Run selection and sharding over a loaded catalog, writing the shard
/// artifact(s).
///
/// `parallelism == 1` writes the whole selection as the single unnumbered
/// output file, distinguishing "no sharding" from "sharding into one
/// part" for downstream consumers.
pub fn schedule(
    catalog: &[LibraryDescriptor],
    opts: &ScheduleOptions,
) -> Result<ScheduleResult> {
    if opts.parallelism < 1 {
        bail!("parallelism must be at least 1, got {}", opts.parallelism);
    }

    let selected = select_latest(catalog, &opts.architectures)?;
    let per_job = shard_size(selected.len(), opts.parallelism);

    tracing::info!(
        "Parallel: {}, libraries total: {}, libraries filtered: {}, per job: {}",
        opts.parallelism,
        catalog.len(),
        selected.len(),
        per_job
    );

    let mut outputs = Vec::new();
    if opts.parallelism == 1 {
        write_libraries(&opts.output, &selected)?;
        outputs.push(opts.output.clone());
    } else {
        for (index, part) in shard(&selected, opts.parallelism).iter().enumerate() {
            let path = shard_path(&opts.output, index);
            write_libraries(&path, part)?;
            outputs.push(path);
        }
    }

    Ok(ScheduleResult {
        total: catalog.len(),
        selected: selected.len(),
        per_job,
        outputs,
        matrix: job_matrix(opts.parallelism),
    })
}

fn write_libraries(path: &Path, libraries: &[LibraryDescriptor]) -> Result<()> {
    let text = serde_json::to_string(libraries).context("failed to serialize library list")?;
    write_string(path, &text)
}
