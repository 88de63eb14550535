//! Camera options with TOML preset support.
//!
//! Projection, movement tuning and key bindings are consolidated here.
//! Options serialize to/from TOML so presets can live next to the host
//! application.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeyBindings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FreecamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FreecamError::Io`] if the file cannot be read and
    /// [`FreecamError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, FreecamError> {
        let content = std::fs::read_to_string(path).map_err(FreecamError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| FreecamError::OptionsParse(e.to_string()))?;
        log::info!("Loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`FreecamError::OptionsParse`] if serialization fails and
    /// [`FreecamError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), FreecamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FreecamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FreecamError::Io)?;
        }
        std::fs::write(path, content).map_err(FreecamError::Io)?;
        log::info!("Saved camera options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
