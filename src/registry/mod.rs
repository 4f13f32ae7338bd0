//! Package definition registry
//!
//! Definitions are data: one YAML file per package, keyed by file stem. The
//! registry is built once at startup from the definitions bundled with capm
//! and from the user's definitions directory, then passed around read-only.

mod builtin;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::domain::PackageDefinition;
use crate::error::Result;
use crate::error::package::{parse_failed, unknown};

/// Extensions recognized as definition files
const DEFINITION_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Read-only mapping of package id to definition
#[derive(Debug, Clone, Default)]
pub struct PackageRegistry {
    definitions: BTreeMap<String, PackageDefinition>,
}

impl PackageRegistry {
    /// Create a registry from definitions; later duplicates win
    pub fn new(definitions: impl IntoIterator<Item = PackageDefinition>) -> Self {
        let definitions = definitions
            .into_iter()
            .map(|definition| (definition.id.clone(), definition))
            .collect();
        Self { definitions }
    }

    /// Registry holding only the definitions bundled with capm
    pub fn builtin() -> Result<Self> {
        let definitions = builtin::BUILTIN_DEFINITIONS
            .iter()
            .map(|(id, yaml)| {
                PackageDefinition::from_yaml(*id, yaml)
                    .map_err(|e| parse_failed(format!("<builtin>/{id}.yml"), e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(definitions))
    }

    /// Load bundled definitions, then definitions from `packages_dir`
    ///
    /// Definitions in `packages_dir` replace bundled ones with the same id.
    pub fn load(packages_dir: Option<&Path>) -> Result<Self> {
        let mut registry = Self::builtin()?;

        if let Some(dir) = packages_dir {
            let user_definitions = load_definitions(dir)?;
            if !user_definitions.is_empty() {
                info!(dir = %dir.display(), count = user_definitions.len(), "loaded user package definitions");
            }
            registry.definitions.extend(user_definitions);
        }

        debug!(count = registry.len(), "package registry ready");
        Ok(registry)
    }

    pub fn get(&self, id: &str) -> Option<&PackageDefinition> {
        self.definitions.get(id)
    }

    /// Look up a definition, failing with `UnknownPackage` if absent
    pub fn resolve(&self, id: &str) -> Result<&PackageDefinition> {
        self.get(id).ok_or_else(|| unknown(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// Package ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Definitions in id order
    pub fn iter(&self) -> impl Iterator<Item = &PackageDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Default user definitions directory (e.g. `~/.config/capm/packages`)
pub fn default_packages_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("capm").join("packages"))
}

/// Parse every definition file directly inside `dir`, keyed by file stem
///
/// A missing directory yields an empty map.
pub fn load_definitions(dir: &Path) -> Result<BTreeMap<String, PackageDefinition>> {
    let mut definitions = BTreeMap::new();

    if !dir.is_dir() {
        debug!(dir = %dir.display(), "definitions directory does not exist");
        return Ok(definitions);
    }

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).display().to_string();
            parse_failed(path, e.to_string())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(id) = definition_id(path) else {
            continue;
        };

        let content = fs::read_to_string(path)
            .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;
        let definition = PackageDefinition::from_yaml(id.clone(), &content)
            .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;

        debug!(id = %id, path = %path.display(), "loaded package definition");
        definitions.insert(id, definition);
    }

    Ok(definitions)
}

/// Package id for a definition file path, or `None` if it is not a definition file
fn definition_id(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?;
    if !DEFINITION_EXTENSIONS.contains(&extension) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || stem.starts_with('.') {
        return None;
    }
    Some(stem.to_string())
}
