//! Seam between the orchestrator and whatever actually applies the patch.

mod command;

pub use command::{classify_line, CommandBackend, CommandInstaller};

use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Messages recorded by one install run, each kind in the order it was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunLog {
    pub notes: Vec<Message>,
    pub warnings: Vec<Message>,
    pub errors: Vec<Message>,
}

impl RunLog {
    pub fn add_note(&mut self, text: impl Into<String>) {
        self.notes.push(Message::new(text));
    }
    pub fn add_warning(&mut self, text: impl Into<String>) {
        self.warnings.push(Message::new(text));
    }
    pub fn add_error(&mut self, text: impl Into<String>) {
        self.errors.push(Message::new(text));
    }
}

pub trait Installer {
    /// Apply the patch. Recorded warnings and errors do not make this fail;
    /// only an unrecoverable fault does.
    fn install(&mut self) -> Result<()>;
    fn log(&self) -> &RunLog;
}

pub trait InstallerBackend {
    fn construct(
        &self,
        mod_dir: &Path,
        game_dir: &Path,
        changes_filename: &str,
    ) -> Result<Box<dyn Installer>>;
}
