//! `libvet summary` command

use anyhow::Result;

use crate::cli::SummaryArgs;
use libvet::core::report::TestReport;
use libvet::ops::summary::{render_markdown, summarize};
use libvet::util::fs::write_string;

pub fn execute(args: SummaryArgs) -> Result<()> {
    let report = TestReport::load(&args.input)?;
    let rendered = render_markdown(&summarize(&report));

    match args.output {
        Some(ref path) => write_string(path, &rendered)?,
        None => print!("{rendered}"),
    }

    Ok(())
}
