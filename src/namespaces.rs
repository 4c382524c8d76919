//! Reader for `tslpatchdata/namespaces.ini`.
//!
//! The catalog lists selectable patch variants:
//!
//! ```ini
//! [Namespaces]
//! Namespace1=standard
//!
//! [standard]
//! IniName=changes.ini
//! DataPath=standard
//! ```
//!
//! Entries keep the order of the `[Namespaces]` section, which is what the
//! numeric namespace index on the command line refers to.

use fs_err as fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceEntry {
    pub ini_filename: String,
    /// Folder under `tslpatchdata` holding `ini_filename`. `None` means `tslpatchdata` itself.
    pub data_folderpath: Option<String>,
    pub info_filename: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("namespaces.ini has no [Namespaces] section")]
    MissingNamespacesSection,
    #[error("namespace '{0}' is listed in [Namespaces] but has no [{0}] section")]
    MissingSection(String),
    #[error("namespace '{0}' does not declare an IniName")]
    MissingIniName(String),
}

/// Loads an ordered namespace catalog.
pub trait NamespaceSource {
    fn load(&self, path: &Path) -> Result<Vec<NamespaceEntry>, CatalogError>;
}

/// Reads the catalog from an INI file on disk.
pub struct IniCatalog;

impl NamespaceSource for IniCatalog {
    fn load(&self, path: &Path) -> Result<Vec<NamespaceEntry>, CatalogError> {
        let data = fs::read_to_string(path)?;
        parse_catalog(&data)
    }
}

pub fn parse_catalog(src: &str) -> Result<Vec<NamespaceEntry>, CatalogError> {
    let sections = parse_sections(src);
    let index = find_section(&sections, "Namespaces").ok_or(CatalogError::MissingNamespacesSection)?;
    let mut out = Vec::with_capacity(index.entries.len());
    for (_, id) in &index.entries {
        if id.is_empty() {
            continue;
        }
        let section = find_section(&sections, id).ok_or_else(|| CatalogError::MissingSection(id.clone()))?;
        let ini_filename = section
            .get("IniName")
            .ok_or_else(|| CatalogError::MissingIniName(id.clone()))?
            .to_string();
        out.push(NamespaceEntry {
            ini_filename,
            data_folderpath: section.get("DataPath").map(str::to_string),
            info_filename: section.get("InfoName").map(str::to_string),
            name: section.get("Name").map(str::to_string),
            description: section.get("Description").map(str::to_string),
        });
    }
    Ok(out)
}

#[derive(Debug)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    /// Last non-empty value for `key`, matched case-insensitively.
    fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }
}

fn find_section<'a>(sections: &'a [Section], name: &str) -> Option<&'a Section> {
    sections.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

fn parse_sections(src: &str) -> Vec<Section> {
    let src = src.strip_prefix('\u{feff}').unwrap_or(src);
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<usize> = None;
    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            let name = line[1..line.len() - 1].trim().to_string();
            // Repeated headers keep appending to the first section of that name.
            current = match sections.iter().position(|s| s.name.eq_ignore_ascii_case(&name)) {
                Some(pos) => Some(pos),
                None => {
                    sections.push(Section {
                        name,
                        entries: Vec::new(),
                    });
                    Some(sections.len() - 1)
                }
            };
            continue;
        }
        let (Some(idx), Some((k, v))) = (current, line.split_once('=')) else {
            continue;
        };
        sections[idx]
            .entries
            .push((k.trim().to_string(), v.trim().to_string()));
    }
    sections
}
