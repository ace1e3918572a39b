//! `libvet schedule` command

use anyhow::{Context, Result};

use crate::cli::ScheduleArgs;
use libvet::core::catalog::load_catalog;
use libvet::ops::schedule::{schedule, ScheduleOptions};
use libvet::util::fs::write_string;

pub fn execute(args: ScheduleArgs) -> Result<()> {
    let catalog = load_catalog(&args.input)?;

    let result = schedule(
        &catalog,
        &ScheduleOptions {
            parallelism: args.parallel,
            architectures: args.arch,
            output: args.output,
        },
    )?;

    let matrix_json =
        serde_json::to_string(&result.matrix).context("failed to serialize job matrix")?;
    match args.matrix {
        Some(ref path) => write_string(path, &matrix_json)?,
        // Workflow output command the CI scheduler picks up from the log.
        None => println!("::set-output name=matrix::{matrix_json}"),
    }

    for path in &result.outputs {
        eprintln!("    Scheduled -> {}", path.display());
    }

    Ok(())
}
