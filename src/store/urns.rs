use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::AppError;
use crate::models::UrnMap;

/// JSON file mapping repository names to Radicle identifiers.
///
/// The whole map is read once and written back once; nothing is persisted
/// between those two points.
#[derive(Debug, Clone)]
pub struct UrnStore {
    path: PathBuf,
}

impl UrnStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the map, or return an empty one if the file does not exist yet.
    pub fn load(&self) -> Result<UrnMap, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No URN file at {}, starting empty", self.path.display());
                return Ok(UrnMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        let urns: UrnMap = serde_json::from_str(&raw)?;
        Ok(urns)
    }

    /// Overwrite the file with `urns`, pretty-printed with four-space indent.
    pub fn save(&self, urns: &UrnMap) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        urns.serialize(&mut ser)?;

        fs::write(&self.path, buf)?;
        log::info!("Saved {} URNs to {}", urns.len(), self.path.display());
        Ok(())
    }
}
