use crate::platform::PlatformOps;
use std::path::PathBuf;

pub static UNIX_PLATFORM: Unix = Unix;

pub struct Unix;

impl PlatformOps for Unix {
    fn config_dir(&self) -> Option<PathBuf> {
        dirs::config_dir()
    }
    fn final_binary_name(&self, base: &str) -> String {
        base.to_string()
    }
}
