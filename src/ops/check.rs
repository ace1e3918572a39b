//! Install-and-compile checking of a library list.
//!
//! Each library runs through a two-stage state machine:
//!
//! ```text
//! Start -> Installing -> (InstallFailed | Installed)
//!                         Installed -> Checking -> (CheckFailed | CheckPassed | NoHeadersFound)
//! ```
//!
//! `InstallFailed` and `NoHeadersFound` are terminal without a compile
//! attempt. Stage short-circuits are explicit values checked by the
//! orchestrator, and unexpected errors are caught at the library boundary
//! so one broken library never takes down the rest of the shard.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::catalog::LibraryDescriptor;
use crate::core::report::{TestCase, TestReport, TestSuite};
use crate::toolchain::{write_test_sketch, Toolchain};
use crate::util::fs::glob_headers;

/// Case name for the install stage.
pub const INSTALL_CASE: &str = "Install library";
/// Case name for a compile check driven by the declared header list.
pub const COMPILE_PROVIDED_CASE: &str = "Compile with provided headers";
/// Case name for a compile check driven by on-disk discovery.
pub const COMPILE_DISCOVERED_CASE: &str = "Compile with discovered headers";

/// Settings for one check worker.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Directory the package manager installs libraries into.
    pub library_dir: PathBuf,

    /// Scratch directory holding the generated test sketch. Workers
    /// running in parallel must each use their own.
    pub scratch_dir: PathBuf,

    /// Board FQBN compile checks target.
    pub board: String,
}

/// What the install stage decided for the rest of the pipeline.
enum InstallOutcome {
    /// Install succeeded; compile checking may proceed against this
    /// installed library directory.
    Installed { library_dir: PathBuf },
    /// Install failed and was recorded; skip the remaining stages.
    Aborted,
}

/// Where the compile check's header list came from.
enum HeaderSource {
    /// The catalog declared the list; trusted verbatim.
    Declared(Vec<String>),
    /// Discovered on disk under the installed library.
    Discovered(Vec<String>),
    /// Nothing declared, nothing found: no compile case is recorded.
    None,
}

/// Check every library in order, collecting one suite per library into a
/// fresh report. Libraries are independent; processing is strictly
/// sequential within the shard.
pub fn check_libraries(
    toolchain: &dyn Toolchain,
    libraries: &[LibraryDescriptor],
    opts: &CheckOptions,
) -> TestReport {
    let mut report = TestReport::new();
    for lib in libraries {
        report.add_suite(check_library(toolchain, lib, opts));
    }
    report
}

/// Check one library, producing its finalized suite.
///
/// An unexpected error (toolchain unavailable, scratch dir unwritable)
/// is logged and ends this library's processing; the suite keeps whatever
/// cases were recorded before the error.
pub fn check_library(
    toolchain: &dyn Toolchain,
    lib: &LibraryDescriptor,
    opts: &CheckOptions,
) -> TestSuite {
    // GitHub Actions log folding, one group per library.
    println!("::group::Checking {}...", lib.install_spec());

    let mut suite = TestSuite::new(&lib.name, &lib.version);
    if let Err(err) = run_stages(toolchain, lib, opts, &mut suite) {
        tracing::error!(
            library = %lib.name,
            version = %lib.version,
            "unexpected error, suite finalized with {} case(s): {:#}",
            suite.total(),
            err
        );
    }

    println!("::endgroup::");
    suite
}

fn run_stages(
    toolchain: &dyn Toolchain,
    lib: &LibraryDescriptor,
    opts: &CheckOptions,
    suite: &mut TestSuite,
) -> Result<()> {
    let library_dir = match install_stage(toolchain, lib, opts, suite)? {
        InstallOutcome::Installed { library_dir } => library_dir,
        InstallOutcome::Aborted => return Ok(()),
    };

    match resolve_headers(lib, &library_dir)? {
        HeaderSource::Declared(headers) => {
            compile_stage(toolchain, &headers, COMPILE_PROVIDED_CASE, opts, suite)?;
        }
        HeaderSource::Discovered(headers) => {
            compile_stage(toolchain, &headers, COMPILE_DISCOVERED_CASE, opts, suite)?;
        }
        HeaderSource::None => {
            tracing::debug!(
                library = %lib.name,
                "no headers declared or found, skipping compile check"
            );
        }
    }

    Ok(())
}

/// Install the library and verify its directory appeared.
///
/// A non-zero exit or a missing install directory is an ordinary failure:
/// it records a failed case and aborts this library. Only an unlaunchable
/// toolchain surfaces as `Err`.
fn install_stage(
    toolchain: &dyn Toolchain,
    lib: &LibraryDescriptor,
    opts: &CheckOptions,
    suite: &mut TestSuite,
) -> Result<InstallOutcome> {
    tracing::info!("Test: {}", INSTALL_CASE);

    let out = toolchain.install(&lib.name, &lib.version)?;
    if !out.success {
        suite.record(TestCase::failed(INSTALL_CASE, out.output));
        return Ok(InstallOutcome::Aborted);
    }

    let library_dir = opts.library_dir.join(lib.install_dir_name());
    if !library_dir.exists() {
        suite.record(TestCase::failed(
            INSTALL_CASE,
            format!(
                "installed library directory not found: {}",
                library_dir.display()
            ),
        ));
        return Ok(InstallOutcome::Aborted);
    }

    suite.record(TestCase::passed(INSTALL_CASE, out.output));
    Ok(InstallOutcome::Installed { library_dir })
}

/// Determine the header list for the compile check.
///
/// A non-empty declared list is trusted verbatim. Otherwise headers are
/// discovered directly under the installed directory, then under its
/// `src/` subdirectory if the first search finds nothing.
fn resolve_headers(lib: &LibraryDescriptor, library_dir: &Path) -> Result<HeaderSource> {
    if !lib.provides_includes.is_empty() {
        return Ok(HeaderSource::Declared(lib.provides_includes.clone()));
    }

    let mut headers = glob_headers(library_dir)?;
    if headers.is_empty() {
        headers = glob_headers(&library_dir.join("src"))?;
    }
    if headers.is_empty() {
        return Ok(HeaderSource::None);
    }

    Ok(HeaderSource::Discovered(
        headers
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect(),
    ))
}

/// Write the test sketch and compile it, recording the outcome under
/// `case_name`. The subprocess exit status maps directly to pass/fail.
fn compile_stage(
    toolchain: &dyn Toolchain,
    headers: &[String],
    case_name: &str,
    opts: &CheckOptions,
    suite: &mut TestSuite,
) -> Result<()> {
    tracing::info!("Test: {}", case_name);

    write_test_sketch(&opts.scratch_dir, headers)?;
    let out = toolchain.compile(&opts.scratch_dir, &opts.board)?;

    suite.record(if out.success {
        TestCase::passed(case_name, out.output)
    } else {
        TestCase::failed(case_name, out.output)
    });
    Ok(())
}
