//! `libvet check` command

use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::cli::CheckArgs;
use libvet::core::catalog::load_catalog;
use libvet::ops::check::{check_libraries, CheckOptions};
use libvet::toolchain::{ArduinoCli, DEFAULT_BOARD};
use libvet::util::config::{global_config_path, load_config, project_config_path, Config};

pub fn execute(args: CheckArgs) -> Result<()> {
    let config = load_merged_config();

    let libraries = load_catalog(&args.input)?;

    let toolchain = match args.cli.or(config.toolchain.cli) {
        Some(path) => ArduinoCli::new(path),
        None => ArduinoCli::from_path()?,
    }
    .with_config_file(args.config_file.or(config.toolchain.config_file));

    let library_dir = args
        .library_dir
        .or(config.paths.library_dir)
        .context("no library directory: pass --library-dir or set paths.library_dir in config")?;

    let board = args
        .board
        .or(config.toolchain.board)
        .unwrap_or_else(|| DEFAULT_BOARD.to_string());

    // The guard keeps the temporary directory alive for the whole run
    // when no explicit scratch location was given.
    let (_scratch_guard, scratch_dir) = match args.scratch_dir.or(config.paths.scratch_dir) {
        Some(dir) => (None, dir),
        None => {
            let tmp = TempDir::new().context("failed to create scratch directory")?;
            let dir = tmp.path().join("sketch");
            (Some(tmp), dir)
        }
    };

    let opts = CheckOptions {
        library_dir,
        scratch_dir,
        board,
    };

    let report = check_libraries(&toolchain, &libraries, &opts);
    report.save(&args.output)?;

    eprintln!(
        "    Checked {} libraries -> {}",
        report.suites.len(),
        args.output.display()
    );

    Ok(())
}

fn load_merged_config() -> Config {
    let global = global_config_path().unwrap_or_else(|| PathBuf::from(".libvet/config.toml"));
    let project = project_config_path(&std::env::current_dir().unwrap_or_default());
    load_config(&global, &project)
}
