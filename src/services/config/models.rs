use crate::types::GameId;
use serde::{Deserialize, Serialize};

pub const BLIZZARD_REGISTRY_HIVE: &str = "HKEY_LOCAL_MACHINE";
pub const BLIZZARD_REGISTRY_KEY: &str =
    "SOFTWARE\\WOW6432Node\\Blizzard Entertainment\\World of Warcraft";
pub const BLIZZARD_REGISTRY_VALUE: &str = "InstallPath";

pub const DEFAULT_INSTALLER_PRIORITY: i32 = 25;
pub const DEFAULT_MOD_SOURCE_URL: &str = "https://www.curseforge.com/wow/addons";
pub const DEFAULT_ICON_FILE: &str = "anvil.svg";

/// A single registry value: hive, key path and value name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegistryLocation {
    pub hive: String,
    pub key: String,
    pub value: String,
}

impl Default for RegistryLocation {
    fn default() -> Self {
        Self {
            hive: BLIZZARD_REGISTRY_HIVE.into(),
            key: BLIZZARD_REGISTRY_KEY.into(),
            value: BLIZZARD_REGISTRY_VALUE.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExtensionSettings {
    /// Both clients share the Blizzard launcher key unless overridden.
    pub retail_registry: RegistryLocation,
    pub classic_registry: RegistryLocation,
    pub installer_priority: i32,
    pub mod_source_url: String,
    /// SVG for the mod-source icon set, relative to the extension directory.
    pub icon_file: String,
}

impl Default for ExtensionSettings {
    fn default() -> Self {
        Self {
            retail_registry: RegistryLocation::default(),
            classic_registry: RegistryLocation::default(),
            installer_priority: DEFAULT_INSTALLER_PRIORITY,
            mod_source_url: DEFAULT_MOD_SOURCE_URL.into(),
            icon_file: DEFAULT_ICON_FILE.into(),
        }
    }
}

impl ExtensionSettings {
    pub fn registry_for(&self, game: GameId) -> &RegistryLocation {
        match game {
            GameId::Retail => &self.retail_registry,
            GameId::Classic => &self.classic_registry,
        }
    }
}
