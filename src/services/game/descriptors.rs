use super::discovery::{discover, Discovery};
use super::setup::prepare_game;
use crate::services::config::{ExtensionSettings, RegistryLocation};
use crate::services::host::HostApi;
use crate::types::{ExtensionError, ExtensionResult, GameId};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Add-on folder of `game`, relative to the install root.
pub fn mod_path(game: GameId) -> PathBuf {
    Path::new(game.client_folder())
        .join("Interface")
        .join("AddOns")
}

/// Game client executable, relative to the install root.
pub fn executable(game: GameId) -> PathBuf {
    let exe = match game {
        GameId::Retail => "wow.exe",
        GameId::Classic => "WowClassic.exe",
    };
    Path::new(game.client_folder()).join(exe)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    /// Classic shares its mod pages with retail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nexus_page_id: Option<String>,
}

/// Everything the host needs to manage one World of Warcraft variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDescriptor {
    pub id: GameId,
    pub name: String,
    pub short_name: String,
    pub merge_mods: bool,
    pub requires_cleanup: bool,
    pub logo: String,
    pub supported_tools: Vec<String>,
    pub details: GameDetails,
    #[serde(skip)]
    registry: RegistryLocation,
}

impl GameDescriptor {
    pub fn new(game: GameId, settings: &ExtensionSettings) -> Self {
        let (logo, details) = match game {
            GameId::Retail => ("gameart.jpg", GameDetails::default()),
            GameId::Classic => (
                "gameart-classic.jpg",
                GameDetails {
                    nexus_page_id: Some(GameId::Retail.as_str().to_string()),
                },
            ),
        };

        Self {
            id: game,
            name: game.display_name().to_string(),
            short_name: game.short_name().to_string(),
            merge_mods: true,
            requires_cleanup: true,
            logo: logo.to_string(),
            supported_tools: Vec::new(),
            details,
            registry: settings.registry_for(game).clone(),
        }
    }

    /// Descriptors for every supported variant, retail first.
    pub fn all(settings: &ExtensionSettings) -> Vec<Self> {
        GameId::ALL
            .iter()
            .map(|game| Self::new(*game, settings))
            .collect()
    }

    pub fn query_path(&self, api: &dyn HostApi) -> Discovery {
        discover(api, self.id, &self.registry)
    }

    pub fn query_mod_path(&self) -> PathBuf {
        mod_path(self.id)
    }

    pub fn executable(&self) -> PathBuf {
        executable(self.id)
    }

    /// Files whose presence confirms a discovered path is really this game.
    pub fn required_files(&self) -> Vec<PathBuf> {
        vec![self.executable()]
    }

    pub fn setup(&self, api: &dyn HostApi, install_path: &Path) -> ExtensionResult<PathBuf> {
        prepare_game(api, self.id, install_path)
    }

    /// Check that every required file exists under `install_path`.
    pub fn verify_install(&self, install_path: &Path) -> ExtensionResult<()> {
        for required in self.required_files() {
            let full = install_path.join(&required);
            if !full.is_file() {
                return Err(ExtensionError::MissingFile(full.display().to_string()));
            }
        }
        Ok(())
    }
}
