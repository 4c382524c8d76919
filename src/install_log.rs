use crate::installer::RunLog;
use anyhow::{Context, Result};
use fs_err as fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LOG_FILENAME: &str = "installlog.txt";
pub const WARNING_PREFIX: &str = "Warning: ";
pub const ERROR_PREFIX: &str = "Error: ";

/// Notes, then warnings, then errors; one line each.
pub fn render(log: &RunLog) -> String {
    let mut out = String::new();
    for note in &log.notes {
        out.push_str(&note.text);
        out.push('\n');
    }
    for warning in &log.warnings {
        out.push_str(WARNING_PREFIX);
        out.push_str(&warning.text);
        out.push('\n');
    }
    for error in &log.errors {
        out.push_str(ERROR_PREFIX);
        out.push_str(&error.text);
        out.push('\n');
    }
    out
}

/// Write `installlog.txt` into `data_root`, replacing any previous log.
///
/// The content is rendered up front so the file sees a single write; the
/// handle is dropped on every return path.
pub fn write_log(data_root: &Path, log: &RunLog) -> Result<PathBuf> {
    let path = data_root.join(LOG_FILENAME);
    let content = render(log);
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
