use crate::exit_code::ExitCode;
use crate::namespaces::CatalogError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgumentError {
    /// Wrong number of positional values. Carries the count and the usage line.
    #[error("{0}")]
    Usage(String),
    #[error("Invalid namespace_option_index '{0}'. It should be an integer.")]
    InvalidNamespaceIndex(String),
}

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("The 'namespaces.ini' file was not found in the specified tslpatchdata path ({}).", .0.display())]
    NamespacesCatalogMissing(PathBuf),
    #[error("Namespace index {index} is out of range (namespaces.ini lists {len} option(s)).")]
    NamespaceIndexOutOfRange { index: i64, len: usize },
    #[error("The changes file could not be found ({}).", .0.display())]
    ChangesFileMissing(PathBuf),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error("installation failed: {0:#}")]
    Installation(anyhow::Error),
}

impl RunError {
    /// `None` means a fault with no enumerated code.
    pub fn exit_code(&self) -> Option<ExitCode> {
        match self {
            RunError::Argument(_) => Some(ExitCode::NumberOfArgs),
            RunError::Resolution(e) => match e {
                ResolutionError::NamespacesCatalogMissing(_) => {
                    Some(ExitCode::NamespacesCatalogMissing)
                }
                ResolutionError::NamespaceIndexOutOfRange { .. } => {
                    Some(ExitCode::NamespaceIndexOutOfRange)
                }
                ResolutionError::ChangesFileMissing(_) => Some(ExitCode::ChangesFileMissing),
                ResolutionError::Catalog(_) => None,
            },
            RunError::Installation(_) => None,
        }
    }
}
