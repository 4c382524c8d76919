//! Command-line entry point for applying TSLPatcher-style mods.
//!
//! `tslpatch <game_dir> <data_root> [namespace_index]` picks the changes file
//! under `data_root/tslpatchdata` (directly, or through `namespaces.ini`),
//! hands it to an [`installer::Installer`] exactly once and records the run in
//! `data_root/installlog.txt`.

pub mod output;

pub mod cli;
pub mod command_handlers;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod install_log;
pub mod installer;
pub mod namespaces;
pub mod platform;
pub mod resolver;

pub use error::{ArgumentError, ResolutionError, RunError};
pub use exit_code::{ExitCode, FAULT_EXIT_CODE};

use installer::InstallerBackend;
use namespaces::IniCatalog;
use std::ffi::OsString;

/// Run one invocation. `argv` excludes the program name.
///
/// Returns the enumerated exit code, or `Err` for an installer or catalog
/// fault, which has no enumerated code.
pub fn run<I, T>(argv: I, backend: &dyn InstallerBackend) -> anyhow::Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    command_handlers::dispatch::dispatch(cli::parse_args(argv), &IniCatalog, backend)
}
