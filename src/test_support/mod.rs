//! Test utilities and mocks for libvet unit tests.
//!
//! This module is only compiled for tests. It provides a scripted
//! in-memory toolchain so the check pipeline can be exercised without
//! spawning processes, plus small descriptor fixtures.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{bail, Result};

use crate::core::catalog::LibraryDescriptor;
use crate::toolchain::{ToolOutput, Toolchain};

/// A `Toolchain` with scripted outcomes.
///
/// By default every install and compile succeeds with empty output.
/// Individual libraries can be scripted to fail their install (ordinary
/// failure) or to error (unexpected failure), and compilation can be made
/// to fail globally. Invocations are recorded for assertions.
#[derive(Debug, Default)]
pub struct ScriptedToolchain {
    install_failures: HashMap<String, String>,
    install_errors: HashSet<String>,
    compile_failure: Option<String>,
    install_log: RefCell<Vec<String>>,
    compile_count: Cell<usize>,
}

impl ScriptedToolchain {
    /// A toolchain where everything succeeds.
    pub fn new() -> Self {
        ScriptedToolchain::default()
    }

    /// Script `name`'s install to exit non-zero with the given output.
    pub fn failing_install(mut self, name: impl Into<String>, output: impl Into<String>) -> Self {
        self.install_failures.insert(name.into(), output.into());
        self
    }

    /// Script `name`'s install to fail unexpectedly (an `Err`, as if the
    /// tool could not be spawned).
    pub fn erroring_install_for(mut self, name: impl Into<String>) -> Self {
        self.install_errors.insert(name.into());
        self
    }

    /// Script every compile to exit non-zero with the given output.
    pub fn failing_compile(mut self, output: impl Into<String>) -> Self {
        self.compile_failure = Some(output.into());
        self
    }

    /// Install specs seen so far, in order.
    pub fn install_log(&self) -> Vec<String> {
        self.install_log.borrow().clone()
    }

    /// Number of compile invocations seen so far.
    pub fn compile_calls(&self) -> usize {
        self.compile_count.get()
    }
}

impl Toolchain for ScriptedToolchain {
    fn install(&self, name: &str, version: &str) -> Result<ToolOutput> {
        self.install_log
            .borrow_mut()
            .push(format!("{name}@{version}"));

        if self.install_errors.contains(name) {
            bail!("scripted toolchain error for `{name}`");
        }
        match self.install_failures.get(name) {
            Some(output) => Ok(ToolOutput::failed(output.clone())),
            None => Ok(ToolOutput::ok("")),
        }
    }

    fn compile(&self, _sketch_dir: &Path, _board: &str) -> Result<ToolOutput> {
        self.compile_count.set(self.compile_count.get() + 1);

        match &self.compile_failure {
            Some(output) => Ok(ToolOutput::failed(output.clone())),
            None => Ok(ToolOutput::ok("")),
        }
    }
}

/// A descriptor with architecture tags.
pub fn descriptor_with_archs(name: &str, version: &str, archs: &[&str]) -> LibraryDescriptor {
    let mut d = LibraryDescriptor::new(name, version);
    d.architectures = Some(archs.iter().map(|a| a.to_string()).collect());
    d
}

/// A descriptor with a declared header list.
pub fn descriptor_with_includes(name: &str, version: &str, headers: &[&str]) -> LibraryDescriptor {
    let mut d = LibraryDescriptor::new(name, version);
    d.provides_includes = headers.iter().map(|h| h.to_string()).collect();
    d
}
