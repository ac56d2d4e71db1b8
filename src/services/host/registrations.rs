use super::HostApi;
use crate::services::addons::{ClassifyResult, InstallResult};
use crate::types::{ExtensionResult, GameId};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub type TestFn = fn(&[String], &str) -> ClassifyResult;
pub type InstallFn = fn(&[String]) -> InstallResult;

/// An archive installer: `test` decides, `install` produces instructions.
#[derive(Clone, Serialize)]
pub struct InstallerRegistration {
    pub id: String,
    /// Lower runs earlier.
    pub priority: i32,
    #[serde(skip)]
    pub test: TestFn,
    #[serde(skip)]
    pub install: InstallFn,
}

impl fmt::Debug for InstallerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstallerRegistration")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl InstallerRegistration {
    pub fn test(&self, files: &[String], game_id: &str) -> ClassifyResult {
        (self.test)(files, game_id)
    }

    pub fn install(&self, files: &[String]) -> InstallResult {
        (self.install)(files)
    }
}

/// A browse button for an external download site.
#[derive(Debug, Clone, Serialize)]
pub struct ModSourceRegistration {
    pub id: String,
    pub name: String,
    pub url: String,
    pub icon: String,
    /// The button is shown only while one of these games is active.
    pub games: Vec<GameId>,
}

impl ModSourceRegistration {
    pub fn activate(&self, api: &dyn HostApi) {
        log::info!("Opening {}: {}", self.name, self.url);
        api.show_url(&self.url);
    }

    pub fn is_visible(&self, api: &dyn HostApi) -> bool {
        api.active_game_id()
            .and_then(|id| id.parse::<GameId>().ok())
            .is_some_and(|id| self.games.contains(&id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSetRegistration {
    pub set_id: String,
    pub svg_path: PathBuf,
}

impl IconSetRegistration {
    pub fn install(&self, api: &dyn HostApi) -> ExtensionResult<()> {
        log::debug!(
            "Installing icon set '{}' from {}",
            self.set_id,
            self.svg_path.display()
        );
        api.install_icon_set(&self.set_id, &self.svg_path)
    }
}
