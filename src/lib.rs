//! libvet - batch install-and-compile verification for Arduino library
//! catalogs.
//!
//! This crate provides the core pipeline: version selection over a raw
//! catalog, sharding for CI fan-out, the per-library install/compile
//! state machine, and report classification and rendering.

pub mod core;
pub mod ops;
pub mod toolchain;
pub mod util;

/// Test utilities and mocks for libvet unit tests.
///
/// This module is only available when compiling tests. It provides a
/// scripted in-memory toolchain and descriptor fixtures.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    catalog::LibraryDescriptor,
    classify::{ClassifiedSuite, SuiteStatus},
    report::{CaseOutcome, TestCase, TestReport, TestSuite},
};

pub use crate::toolchain::{ArduinoCli, ToolOutput, Toolchain};
