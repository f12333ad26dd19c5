//! Catalog files: named, base64-encoded images bundled in one JSON document.
//!
//! ```json
//! [
//!   { "name": "heart", "data": "iVBORw0KGgo..." },
//!   { "name": "star", "data": "iVBORw0KGgo..." }
//! ]
//! ```

use serde::Deserialize;
use std::error::Error;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    /// Base64 of an encoded image (PNG, GIF, ...).
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read catalog '{}': {}", path.display(), e))?;
        Self::from_json(&json)
            .map_err(|e| format!("Invalid catalog '{}': {}", path.display(), e).into())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Look up `name`, or take the first entry when no name is given.
    pub fn select(&self, name: Option<&str>) -> Result<&CatalogEntry, String> {
        let found = match name {
            Some(name) => self.entries.iter().find(|e| e.name == name),
            None => self.entries.first(),
        };
        found.ok_or_else(|| match name {
            Some(name) => format!(
                "No catalog entry named '{}' (available: {})",
                name,
                self.names().collect::<Vec<_>>().join(", ")
            ),
            None => "Catalog is empty".to_string(),
        })
    }
}
