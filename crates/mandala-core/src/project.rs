use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

use crate::settings::{AsciiSettings, Settings};

pub const PROJECT_VERSION: u32 = 1;

/// On-disk project file: the pattern settings plus the ASCII settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub version: u32,
    pub pattern: Settings,
    #[serde(default)]
    pub ascii: AsciiSettings,
}

impl ProjectFile {
    pub fn new(pattern: Settings, ascii: AsciiSettings) -> Self {
        Self { version: PROJECT_VERSION, pattern, ascii }
    }
}

impl Default for ProjectFile {
    fn default() -> Self {
        Self::new(Settings::default(), AsciiSettings::default())
    }
}

/// Save a project file to disk as JSON.
pub fn save_project(path: &Path, project: &ProjectFile) -> io::Result<()> {
    let json = serde_json::to_string_pretty(project)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

/// Load a project file from disk.
pub fn load_project(path: &Path) -> io::Result<ProjectFile> {
    let json = std::fs::read_to_string(path)?;
    parse_project(&json)
}

/// Parse project JSON. A bare settings object (no `pattern` key) is
/// accepted as a project with default ASCII settings.
pub fn parse_project(json: &str) -> io::Result<ProjectFile> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let project = if value.get("pattern").is_some() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value::<Settings>(value).map(|pattern| ProjectFile::new(pattern, AsciiSettings::default()))
    };

    project.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
