//! The external toolchain seam.
//!
//! The package manager is an opaque collaborator: it installs libraries
//! and compiles sketches, and we trust only its exit status and captured
//! output. The trait keeps the check pipeline testable without spawning
//! processes.

pub mod arduino;
pub mod sketch;

use std::path::Path;

use anyhow::Result;

pub use arduino::{ArduinoCli, DEFAULT_BOARD};
pub use sketch::write_test_sketch;

/// Result of one toolchain invocation.
///
/// `success: false` is an ordinary stage failure; an `Err` from a trait
/// method means the tool could not be invoked at all and is handled as an
/// unexpected error at the library boundary.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub success: bool,
    pub output: String,
}

impl ToolOutput {
    pub fn ok(output: impl Into<String>) -> Self {
        ToolOutput {
            success: true,
            output: output.into(),
        }
    }

    pub fn failed(output: impl Into<String>) -> Self {
        ToolOutput {
            success: false,
            output: output.into(),
        }
    }
}

/// External package-manager operations the check pipeline depends on.
pub trait Toolchain {
    /// Install `name@version` into the configured library directory.
    fn install(&self, name: &str, version: &str) -> Result<ToolOutput>;

    /// Compile the sketch in `sketch_dir` for the given board.
    fn compile(&self, sketch_dir: &Path, board: &str) -> Result<ToolOutput>;
}
