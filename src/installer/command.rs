use super::{Installer, InstallerBackend, RunLog};
use crate::config::Config;
use crate::platform::platform;
use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tracing::{debug, info};

static PREFIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(warning|error)\s*:\s*(.*)$").expect("static regex"));

/// Builds installers that drive an external patcher program.
#[derive(Default)]
pub struct CommandBackend {
    config: Option<Config>,
}

impl CommandBackend {
    /// Configuration is read when the installer is constructed, not before.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl InstallerBackend for CommandBackend {
    fn construct(
        &self,
        mod_dir: &Path,
        game_dir: &Path,
        changes_filename: &str,
    ) -> Result<Box<dyn Installer>> {
        let config = match &self.config {
            Some(c) => c.clone(),
            None => Config::load_default()?,
        };
        let program = locate_program(&config.installer.program)?;
        debug!(program = %program.display(), "located installer program");
        Ok(Box::new(CommandInstaller {
            program,
            args: config.installer.args,
            mod_dir: mod_dir.to_path_buf(),
            game_dir: game_dir.to_path_buf(),
            changes_filename: changes_filename.to_string(),
            log: RunLog::default(),
        }))
    }
}

fn locate_program(program: &str) -> Result<PathBuf> {
    let path = Path::new(program);
    if path.is_absolute() || path.components().count() > 1 {
        let path = platform().program_path(path);
        if !path.exists() {
            return Err(anyhow!("installer program {} does not exist", path.display()));
        }
        return Ok(path);
    }
    which::which(platform().final_binary_name(program))
        .with_context(|| format!("installer program '{program}' not found on PATH"))
}

/// Runs `<program> [args..] <mod_dir> <game_dir> <changes_filename>` and records its output.
pub struct CommandInstaller {
    program: PathBuf,
    args: Vec<String>,
    mod_dir: PathBuf,
    game_dir: PathBuf,
    changes_filename: String,
    log: RunLog,
}

impl Installer for CommandInstaller {
    fn install(&mut self) -> Result<()> {
        info!(
            program = %self.program.display(),
            mod_dir = %self.mod_dir.display(),
            game_dir = %self.game_dir.display(),
            changes = %self.changes_filename,
            "running installer"
        );
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
        pb.set_message(format!("Installing {}", self.changes_filename));
        pb.enable_steady_tick(Duration::from_millis(120));
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.mod_dir)
            .arg(&self.game_dir)
            .arg(&self.changes_filename)
            .output();
        pb.finish_and_clear();
        let output = output.with_context(|| format!("running {}", self.program.display()))?;

        for line in String::from_utf8_lossy(&output.stdout).lines() {
            classify_line(&mut self.log, line, false);
        }
        for line in String::from_utf8_lossy(&output.stderr).lines() {
            classify_line(&mut self.log, line, true);
        }
        if !output.status.success() {
            return Err(anyhow!(
                "{} exited with {}",
                self.program.display(),
                output.status
            ));
        }
        Ok(())
    }

    fn log(&self) -> &RunLog {
        &self.log
    }
}

/// Record one line of patcher output. `Warning:`/`Error:` prefixes pick the
/// kind; otherwise stdout lines are notes and stderr lines are errors.
///
/// `install` feeds all of stdout before any of stderr, so messages keep the
/// patcher's order within one stream but not across the two.
pub fn classify_line(log: &mut RunLog, line: &str, from_stderr: bool) {
    let line = line.trim_end();
    if line.trim().is_empty() {
        return;
    }
    if let Some(caps) = PREFIXED.captures(line) {
        let text = caps[2].to_string();
        if caps[1].eq_ignore_ascii_case("warning") {
            log.add_warning(text);
        } else {
            log.add_error(text);
        }
    } else if from_stderr {
        log.add_error(line);
    } else {
        log.add_note(line);
    }
}
