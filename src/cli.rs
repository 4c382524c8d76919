use crate::error::ArgumentError;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Argument surface, used to render the usage line.
///
/// Tokens are taken positionally as given: `--`, `--help` or a path that
/// starts with `-` are ordinary values, so only the count decides validity.
#[derive(Parser, Debug)]
#[command(
    name = "tslpatch",
    about = "Apply a TSLPatcher changes.ini (or a namespaces.ini option) to a game directory",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Game installation directory to patch
    #[arg(value_name = "GAME_DIR")]
    pub game_dir: PathBuf,

    /// Directory holding the mod's tslpatchdata folder
    #[arg(value_name = "DATA_ROOT")]
    pub data_root: PathBuf,

    /// Zero-based option index into tslpatchdata/namespaces.ini
    #[arg(value_name = "NAMESPACE_INDEX")]
    pub namespace_index: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArgs {
    pub game_dir: PathBuf,
    pub data_root: PathBuf,
    /// Signed so that negative indices reach the range check.
    pub namespace_index: Option<i64>,
}

/// Parse positional arguments (program name excluded).
pub fn parse_args<I, T>(argv: I) -> Result<InvocationArgs, ArgumentError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let tokens: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let mut tokens = tokens.into_iter();
    match (tokens.next(), tokens.next(), tokens.next(), tokens.len()) {
        (Some(game_dir), Some(data_root), index, 0) => {
            let cli = Cli {
                game_dir: PathBuf::from(game_dir),
                data_root: PathBuf::from(data_root),
                namespace_index: index.map(|t| t.to_string_lossy().into_owned()),
            };
            cli.into_invocation()
        }
        (first, second, third, rest) => {
            let count = [first, second, third].iter().flatten().count() + rest;
            Err(ArgumentError::Usage(format!(
                "expected 2 or 3 arguments, got {count}\n\n{}",
                Cli::command().render_usage()
            )))
        }
    }
}

impl Cli {
    fn into_invocation(self) -> Result<InvocationArgs, ArgumentError> {
        let namespace_index = match self.namespace_index {
            None => None,
            Some(token) => Some(
                token
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| ArgumentError::InvalidNamespaceIndex(token.clone()))?,
            ),
        };
        Ok(InvocationArgs {
            game_dir: self.game_dir,
            data_root: self.data_root,
            namespace_index,
        })
    }
}
