use crate::services::config::{ExtensionSettings, RegistryLocation};
use crate::services::host::HostApi;
use crate::types::{ExtensionResult, GameId};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of looking for a game installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Discovery {
    Found(PathBuf),
    NotFound,
}

impl Discovery {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Discovery::Found(path) => Some(path),
            Discovery::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Discovery::Found(_))
    }
}

/// Look up the install path of `game` in the registry.
///
/// A missing or empty value and a failing lookup all mean "not installed".
pub fn discover(api: &dyn HostApi, game: GameId, location: &RegistryLocation) -> Discovery {
    match api.registry_value(location) {
        Ok(Some(value)) if !value.trim().is_empty() => {
            log::info!("Found {} at: {}", game.display_name(), value);
            Discovery::Found(PathBuf::from(value))
        }
        Ok(_) => {
            log::warn!(
                "{} not detected: empty registry key {}\\{}",
                game.display_name(),
                location.hive,
                location.key
            );
            Discovery::NotFound
        }
        Err(e) => {
            log::warn!("{} not detected: {}", game.display_name(), e);
            Discovery::NotFound
        }
    }
}

/// Path discovery by host game identifier.
///
/// Only an unrecognised `game_id` is an error.
pub fn find_game(
    api: &dyn HostApi,
    settings: &ExtensionSettings,
    game_id: &str,
) -> ExtensionResult<Discovery> {
    let game: GameId = game_id.parse()?;
    Ok(discover(api, game, settings.registry_for(game)))
}
