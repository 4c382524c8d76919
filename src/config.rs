use crate::platform::platform;
use anyhow::{Context, Result};
use fs_err as fs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "TSLPATCH_CONFIG";
/// Overrides `installer.program`.
pub const INSTALLER_ENV: &str = "TSLPATCH_INSTALLER";

pub const DEFAULT_PROGRAM: &str = "tslpatcher";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub installer: InstallerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InstallerSettings {
    /// Program name looked up on PATH, or an explicit path.
    #[serde(default = "default_program")]
    pub program: String,
    /// Extra arguments placed before `<mod_dir> <game_dir> <changes_filename>`.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
        }
    }
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

impl Config {
    /// Load from `TSLPATCH_CONFIG` or the per-user config file, then apply env overrides.
    pub fn load_default() -> Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            // An explicitly named file has to exist.
            Some(path) => Self::load(Path::new(&path))?,
            None => match default_path() {
                Some(path) if path.exists() => Self::load(&path)?,
                _ => Self::default(),
            },
        };
        if let Some(program) = std::env::var_os(INSTALLER_ENV) {
            cfg.installer.program = program.to_string_lossy().into_owned();
        }
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))
    }
}

pub fn default_path() -> Option<PathBuf> {
    platform()
        .config_dir()
        .map(|d| d.join("tslpatch").join("config.toml"))
}
