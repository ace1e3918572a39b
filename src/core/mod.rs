//! Core data structures for libvet.
//!
//! This module contains the foundational types of the pipeline:
//! - Catalog records (`LibraryDescriptor`) and catalog loading
//! - Version selection over a raw catalog
//! - Sharding of a selection for parallel workers
//! - The test report model and its classification

pub mod catalog;
pub mod classify;
pub mod report;
pub mod select;
pub mod shard;

pub use catalog::{load_catalog, parse_catalog, CatalogError, LibraryDescriptor};
pub use classify::{classify, ClassifiedSuite, SuiteStatus};
pub use report::{CaseOutcome, TestCase, TestReport, TestSuite};
pub use select::{select_latest, SelectError};
pub use shard::{job_matrix, shard, shard_path, JobMatrix};
