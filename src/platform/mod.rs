pub fn platform() -> &'static dyn PlatformOps {
    &ConcretePlatform
}

use std::path::{Path, PathBuf};

pub trait PlatformOps: Sync + Send {
    /// Per-user configuration directory (`~/.config` on Linux).
    fn config_dir(&self) -> Option<PathBuf>;
    /// File name of an executable called `base` on this platform.
    fn final_binary_name(&self, base: &str) -> String;
    /// Append the executable suffix to an explicit program path that has no extension.
    fn program_path(&self, path: &Path) -> PathBuf {
        match path.file_name() {
            Some(name) if path.extension().is_none() => {
                path.with_file_name(self.final_binary_name(&name.to_string_lossy()))
            }
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::UNIX_PLATFORM as ConcretePlatform;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WINDOWS_PLATFORM as ConcretePlatform;
