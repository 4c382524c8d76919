use crate::error::ResolutionError;
use crate::namespaces::{NamespaceEntry, NamespaceSource};
use crate::say;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PATCH_DATA_DIR: &str = "tslpatchdata";
pub const CHANGES_INI: &str = "changes.ini";
pub const NAMESPACES_INI: &str = "namespaces.ini";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChangesPath {
    pub absolute_path: PathBuf,
}

impl ResolvedChangesPath {
    /// Directory handed to the installer as the mod directory.
    pub fn mod_dir(&self) -> &Path {
        self.absolute_path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn changes_filename(&self) -> String {
        self.absolute_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Work out which changes file governs the run and make sure it exists.
pub fn resolve(
    data_root: &Path,
    namespace_index: Option<i64>,
    source: &dyn NamespaceSource,
) -> Result<ResolvedChangesPath, ResolutionError> {
    let patch_data = data_root.join(PATCH_DATA_DIR);
    let candidate = match namespace_index {
        None => patch_data.join(CHANGES_INI),
        Some(index) => {
            let catalog_path = patch_data.join(NAMESPACES_INI);
            say!("Using namespaces.ini path: {}", catalog_path.display());
            if !catalog_path.exists() {
                return Err(ResolutionError::NamespacesCatalogMissing(catalog_path));
            }
            let catalog = source.load(&catalog_path)?;
            let entry = select(&catalog, index)?;
            debug!(?entry, index, "selected namespace");
            entry_path(&patch_data, entry)
        }
    };
    let absolute_path = std::path::absolute(&candidate).unwrap_or(candidate);
    say!("Using changes.ini path: {}", absolute_path.display());
    if !absolute_path.exists() {
        return Err(ResolutionError::ChangesFileMissing(absolute_path));
    }
    Ok(ResolvedChangesPath { absolute_path })
}

fn select(catalog: &[NamespaceEntry], index: i64) -> Result<&NamespaceEntry, ResolutionError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| catalog.get(i))
        .ok_or(ResolutionError::NamespaceIndexOutOfRange {
            index,
            len: catalog.len(),
        })
}

fn entry_path(patch_data: &Path, entry: &NamespaceEntry) -> PathBuf {
    let mut path = patch_data.to_path_buf();
    if let Some(folder) = entry.data_folderpath.as_deref().filter(|f| !f.trim().is_empty()) {
        push_relative(&mut path, folder);
    }
    push_relative(&mut path, &entry.ini_filename);
    path
}

// Catalog paths are authored on Windows, so accept either separator.
fn push_relative(path: &mut PathBuf, rel: &str) {
    for part in rel.split(['/', '\\']).filter(|p| !p.is_empty()) {
        path.push(part);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::CatalogError;
    use std::cell::Cell;
    use std::fs;

    struct FixedCatalog {
        entries: Vec<NamespaceEntry>,
        loads: Cell<usize>,
    }

    impl FixedCatalog {
        fn new(entries: Vec<NamespaceEntry>) -> Self {
            Self {
                entries,
                loads: Cell::new(0),
            }
        }
    }

    impl NamespaceSource for FixedCatalog {
        fn load(&self, _path: &Path) -> Result<Vec<NamespaceEntry>, CatalogError> {
            self.loads.set(self.loads.get() + 1);
            Ok(self.entries.clone())
        }
    }

    fn entry(ini: &str, folder: Option<&str>) -> NamespaceEntry {
        NamespaceEntry {
            ini_filename: ini.to_string(),
            data_folderpath: folder.map(str::to_string),
            ..Default::default()
        }
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "[Settings]\n").unwrap();
    }

    #[test]
    fn direct_resolution_skips_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let expected = dir.path().join("tslpatchdata").join("changes.ini");
        touch(&expected);
        let catalog = FixedCatalog::new(vec![]);
        let resolved = resolve(dir.path(), None, &catalog).unwrap();
        assert_eq!(resolved.absolute_path, expected);
        assert_eq!(resolved.mod_dir(), dir.path().join("tslpatchdata"));
        assert_eq!(resolved.changes_filename(), "changes.ini");
        assert_eq!(catalog.loads.get(), 0);
    }

    #[test]
    fn direct_resolution_requires_changes_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve(dir.path(), None, &FixedCatalog::new(vec![])).unwrap_err();
        assert!(matches!(err, ResolutionError::ChangesFileMissing(_)));
    }

    #[test]
    fn missing_catalog_is_reported_before_loading() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = FixedCatalog::new(vec![entry("changes.ini", None)]);
        let err = resolve(dir.path(), Some(0), &catalog).unwrap_err();
        assert!(matches!(err, ResolutionError::NamespacesCatalogMissing(_)));
        assert_eq!(catalog.loads.get(), 0);
    }

    #[test]
    fn namespace_with_folder_resolves_inside_it() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("tslpatchdata/namespaces.ini"));
        let expected = dir.path().join("tslpatchdata/hk50/hk50.ini");
        touch(&expected);
        let catalog = FixedCatalog::new(vec![entry("changes.ini", None), entry("hk50.ini", Some("hk50"))]);
        let resolved = resolve(dir.path(), Some(1), &catalog).unwrap();
        assert_eq!(resolved.absolute_path, expected);
        assert_eq!(resolved.mod_dir(), dir.path().join("tslpatchdata/hk50"));
        assert_eq!(resolved.changes_filename(), "hk50.ini");
    }

    #[test]
    fn namespace_without_folder_resolves_in_patch_data() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("tslpatchdata/namespaces.ini"));
        let expected = dir.path().join("tslpatchdata/alt.ini");
        touch(&expected);
        for folder in [None, Some(""), Some("  ")] {
            let catalog = FixedCatalog::new(vec![entry("alt.ini", folder)]);
            let resolved = resolve(dir.path(), Some(0), &catalog).unwrap();
            assert_eq!(resolved.absolute_path, expected);
        }
    }

    #[test]
    fn backslash_folders_are_split() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("tslpatchdata/namespaces.ini"));
        let expected = dir.path().join("tslpatchdata/a/b/c.ini");
        touch(&expected);
        let catalog = FixedCatalog::new(vec![entry("c.ini", Some("a\\b"))]);
        assert_eq!(resolve(dir.path(), Some(0), &catalog).unwrap().absolute_path, expected);
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("tslpatchdata/namespaces.ini"));
        touch(&dir.path().join("tslpatchdata/changes.ini"));
        let catalog = FixedCatalog::new(vec![entry("changes.ini", None)]);
        for index in [1, 2, -1, i64::MIN, i64::MAX] {
            let err = resolve(dir.path(), Some(index), &catalog).unwrap_err();
            assert!(
                matches!(err, ResolutionError::NamespaceIndexOutOfRange { index: i, len: 1 } if i == index),
                "index {index}: {err}"
            );
        }
    }

    #[test]
    fn namespace_changes_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("tslpatchdata/namespaces.ini"));
        let catalog = FixedCatalog::new(vec![entry("missing.ini", Some("standard"))]);
        let err = resolve(dir.path(), Some(0), &catalog).unwrap_err();
        assert!(matches!(err, ResolutionError::ChangesFileMissing(ref p) if p.ends_with("standard/missing.ini")));
    }
}
