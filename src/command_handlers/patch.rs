use crate::cli::InvocationArgs;
use crate::error::RunError;
use crate::install_log::{self, LOG_FILENAME};
use crate::installer::InstallerBackend;
use crate::namespaces::NamespaceSource;
use crate::resolver;
use crate::say;
use tracing::{info, warn};

/// Resolve, install once, then write the install log.
pub fn run_patch(
    args: &InvocationArgs,
    source: &dyn NamespaceSource,
    backend: &dyn InstallerBackend,
) -> Result<(), RunError> {
    let resolved = resolver::resolve(&args.data_root, args.namespace_index, source)?;
    let changes_filename = resolved.changes_filename();
    info!(mod_dir = %resolved.mod_dir().display(), changes = %changes_filename, "resolved changes file");

    let mut installer = backend
        .construct(resolved.mod_dir(), &args.game_dir, &changes_filename)
        .map_err(RunError::Installation)?;
    let outcome = installer.install();

    say!("Writing log file '{LOG_FILENAME}'...");
    let written = install_log::write_log(&args.data_root, installer.log());
    match (outcome, written) {
        (Ok(()), Ok(path)) => {
            info!(path = %path.display(), "install log written");
            say!("Logging finished");
            Ok(())
        }
        (Ok(()), Err(e)) => Err(RunError::Installation(e)),
        (Err(fault), written) => {
            // The fault wins; the log is only a best-effort record of how far it got.
            if let Err(e) = written {
                warn!("could not write install log after installer fault: {e:#}");
            }
            Err(RunError::Installation(fault))
        }
    }
}
