//! Test sketch synthesis.
//!
//! A compile check needs a sketch that does nothing except pull in the
//! library's headers: one `#include` per header plus the two empty entry
//! points the Arduino program model requires.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::fs::{ensure_dir, write_string};

/// Write the generated test sketch into `scratch_dir`, overwriting any
/// previous one. Returns the sketch file path.
///
/// The sketch file is named after the scratch directory (arduino-cli
/// requires the `.ino` name to match its directory). Headers are included
/// by filename only; any directory components are stripped. One scratch
/// file is reused across invocations, so concurrent compile checks must
/// use separate scratch directories.
pub fn write_test_sketch(scratch_dir: &Path, headers: &[String]) -> Result<PathBuf> {
    ensure_dir(scratch_dir)?;

    let sketch_name = scratch_dir
        .file_name()
        .with_context(|| format!("scratch dir has no name: {}", scratch_dir.display()))?
        .to_string_lossy()
        .into_owned();

    let mut source = String::new();
    for header in headers {
        let file_name = Path::new(header)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| header.clone());
        writeln!(source, "#include <{file_name}>").expect("writing to String");
    }
    source.push_str("void setup() {}\n");
    source.push_str("void loop() {}\n");

    let sketch_path = scratch_dir.join(format!("{sketch_name}.ino"));
    write_string(&sketch_path, &source)?;
    Ok(sketch_path)
}
