//! `arduino-cli` toolchain implementation.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::toolchain::{ToolOutput, Toolchain};
use crate::util::process::ProcessBuilder;

/// Board FQBN compile checks target unless configured otherwise.
pub const DEFAULT_BOARD: &str = "esp32:esp32:esp32";

/// The real toolchain: shells out to `arduino-cli`.
#[derive(Debug, Clone)]
pub struct ArduinoCli {
    program: PathBuf,
    config_file: Option<PathBuf>,
}

impl ArduinoCli {
    /// Use an explicit `arduino-cli` binary.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        ArduinoCli {
            program: program.into(),
            config_file: None,
        }
    }

    /// Locate `arduino-cli` on PATH.
    pub fn from_path() -> Result<Self> {
        match which::which("arduino-cli") {
            Ok(program) => Ok(ArduinoCli::new(program)),
            Err(_) => bail!("arduino-cli not found on PATH"),
        }
    }

    /// Forward an arduino-cli configuration file to every invocation.
    pub fn with_config_file(mut self, config_file: Option<PathBuf>) -> Self {
        self.config_file = config_file;
        self
    }

    fn command(&self) -> ProcessBuilder {
        let mut cmd = ProcessBuilder::new(&self.program);
        if let Some(ref config_file) = self.config_file {
            cmd = cmd.arg("--config-file").arg(config_file);
        }
        cmd
    }

    fn run(&self, cmd: ProcessBuilder) -> Result<ToolOutput> {
        tracing::debug!("running `{}`", cmd.display_command());
        let out = cmd.run_captured()?;
        Ok(ToolOutput {
            success: out.success,
            output: out.output,
        })
    }
}

impl Toolchain for ArduinoCli {
    fn install(&self, name: &str, version: &str) -> Result<ToolOutput> {
        let cmd = self
            .command()
            .arg("lib")
            .arg("install")
            .arg(format!("{name}@{version}"));
        self.run(cmd)
    }

    fn compile(&self, sketch_dir: &Path, board: &str) -> Result<ToolOutput> {
        let cmd = self
            .command()
            .arg("compile")
            .arg("-b")
            .arg(board)
            .arg(sketch_dir);
        self.run(cmd)
    }
}
