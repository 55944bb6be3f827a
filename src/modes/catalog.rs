//! The mode catalog
//!
//! Modes are authored in `catalog.yaml` (embedded at compile time) and
//! validated when the catalog is loaded, so a broken entry is reported once
//! at startup instead of when somebody happens to ask for it.

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::Path;

use super::definition::{ModeDefinition, ModeEntry};
use crate::error::{CatalogError, ScaleError};

const BUILTIN_YAML: &str = include_str!("catalog.yaml");

static BUILTIN: OnceCell<ModeCatalog> = OnceCell::new();

/// Case- and whitespace-insensitive lookup key for a mode name
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// An ordered, read-only set of modes
#[derive(Debug, Clone)]
pub struct ModeCatalog {
    modes: Vec<ModeDefinition>,
    index: HashMap<String, usize>,
}

impl ModeCatalog {
    /// The built-in 40-mode catalog, parsed and validated on first use
    pub fn builtin() -> Result<&'static ModeCatalog, CatalogError> {
        BUILTIN.get_or_try_init(|| ModeCatalog::from_yaml_str(BUILTIN_YAML))
    }

    pub fn from_definitions(modes: Vec<ModeDefinition>) -> Result<ModeCatalog, CatalogError> {
        if modes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::new();
        for (position, mode) in modes.iter().enumerate() {
            if index.insert(normalize_name(mode.name()), position).is_some() {
                return Err(CatalogError::DuplicateMode(mode.name().to_string()));
            }
        }

        Ok(ModeCatalog { modes, index })
    }

    pub fn from_entries(entries: &[ModeEntry]) -> Result<ModeCatalog, CatalogError> {
        let modes = entries
            .iter()
            .map(ModeDefinition::from_entry)
            .collect::<Result<Vec<_>, _>>()?;
        ModeCatalog::from_definitions(modes)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<ModeCatalog, CatalogError> {
        let entries: Vec<ModeEntry> = serde_yaml::from_str(yaml)?;
        let catalog = ModeCatalog::from_entries(&entries)?;
        log::info!("Loaded mode catalog with {} modes", catalog.len());
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<ModeCatalog, CatalogError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Reading mode catalog from {}", path.display());
        ModeCatalog::from_yaml_str(&yaml)
    }

    /// Find a mode by name, ignoring case and extra whitespace
    pub fn lookup(&self, name: &str) -> Result<&ModeDefinition, ScaleError> {
        self.index
            .get(&normalize_name(name))
            .map(|&position| &self.modes[position])
            .ok_or_else(|| ScaleError::ModeNotFound(name.trim().to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&normalize_name(name))
    }

    /// Display names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modes.iter().map(ModeDefinition::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModeDefinition> {
        self.modes.iter()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
