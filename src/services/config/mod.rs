pub mod models;

pub use models::*;

use std::path::Path;

/// Optional overrides shipped next to the extension library.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Load extension settings from `<extension_dir>/settings.json`.
/// Falls back to `ExtensionSettings::default()` if the file is missing or corrupt;
/// keys absent from the file keep their default values.
pub fn load_settings(extension_dir: &Path) -> ExtensionSettings {
    let settings_path = extension_dir.join(SETTINGS_FILE_NAME);

    let contents = match std::fs::read_to_string(&settings_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!(
                "No settings file at {}, using defaults",
                settings_path.display()
            );
            return ExtensionSettings::default();
        }
        Err(e) => {
            log::warn!(
                "Failed to read settings {}: {}. Using defaults.",
                settings_path.display(),
                e
            );
            return ExtensionSettings::default();
        }
    };

    match serde_json::from_str::<ExtensionSettings>(&contents) {
        Ok(settings) => {
            log::info!("Loaded extension settings from {}", settings_path.display());
            settings
        }
        Err(e) => {
            log::warn!(
                "Failed to parse settings {}: {}. Using defaults.",
                settings_path.display(),
                e
            );
            ExtensionSettings::default()
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
