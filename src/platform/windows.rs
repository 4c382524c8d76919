use crate::platform::PlatformOps;
use std::path::PathBuf;

pub static WINDOWS_PLATFORM: Windows = Windows;

pub struct Windows;

impl PlatformOps for Windows {
    fn config_dir(&self) -> Option<PathBuf> { dirs::config_dir() }
    fn final_binary_name(&self, base: &str) -> String { if base.to_ascii_lowercase().ends_with(".exe") { base.to_string() } else { format!("{base}.exe") } }
}
