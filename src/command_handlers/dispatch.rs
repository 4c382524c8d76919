use crate::cli::InvocationArgs;
use crate::command_handlers::patch;
use crate::error::{ArgumentError, RunError};
use crate::exit_code::ExitCode;
use crate::installer::InstallerBackend;
use crate::namespaces::NamespaceSource;
use crate::say;
use anyhow::Result;
use tracing::debug;

const SYNTAX: &str = "Syntax: tslpatch <game_dir> <data_root> [namespace_option_index]";

/// Run the parsed invocation and turn its outcome into an exit code.
///
/// Enumerated failures are printed here and come back as `Ok(code)`; faults
/// are returned as `Err` for the caller to report.
pub fn dispatch(
    parsed: Result<InvocationArgs, ArgumentError>,
    source: &dyn NamespaceSource,
    backend: &dyn InstallerBackend,
) -> Result<ExitCode> {
    let outcome = match parsed {
        Ok(args) => patch::run_patch(&args, source, backend),
        Err(e) => Err(RunError::from(e)),
    };
    let err = match outcome {
        Ok(()) => return Ok(ExitCode::Success),
        Err(err) => err,
    };
    match err.exit_code() {
        Some(code) => {
            if matches!(err, RunError::Argument(ArgumentError::Usage(_))) {
                say!("{SYNTAX}");
            }
            say!("{err}");
            debug!(?code, "run stopped before completion");
            Ok(code)
        }
        None => Err(match err {
            RunError::Installation(fault) => fault,
            other => other.into(),
        }),
    }
}
