#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};
use wowaddons_lib::services::config::RegistryLocation;
use wowaddons_lib::services::game::GameDescriptor;
use wowaddons_lib::services::host::{
    ExtensionContext, HostApi, InstallerRegistration, ModSourceRegistration, OnceCallback,
};
use wowaddons_lib::types::ExtensionResult;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Records everything the extension registers.
#[derive(Default)]
pub struct RecordingContext {
    pub games: Vec<GameDescriptor>,
    pub installers: Vec<InstallerRegistration>,
    pub mod_sources: Vec<ModSourceRegistration>,
    pub once_callbacks: Vec<OnceCallback>,
}

impl RecordingContext {
    pub fn new() -> Self {
        init_logger();
        Self::default()
    }

    /// Run queued once-callbacks the way the host does after startup.
    pub fn run_once_callbacks(&mut self, api: &dyn HostApi) -> ExtensionResult<()> {
        for callback in self.once_callbacks.drain(..) {
            callback(api)?;
        }
        Ok(())
    }
}

impl ExtensionContext for RecordingContext {
    fn register_game(&mut self, game: GameDescriptor) -> ExtensionResult<()> {
        self.games.push(game);
        Ok(())
    }

    fn register_installer(&mut self, installer: InstallerRegistration) -> ExtensionResult<()> {
        self.installers.push(installer);
        Ok(())
    }

    fn register_mod_source(&mut self, source: ModSourceRegistration) -> ExtensionResult<()> {
        self.mod_sources.push(source);
        Ok(())
    }

    fn once(&mut self, callback: OnceCallback) {
        self.once_callbacks.push(callback);
    }
}

/// Host whose registry holds a single install path.
pub struct FakeHost {
    pub active_game: Option<String>,
    pub install_path: Option<PathBuf>,
    pub opened_urls: Mutex<Vec<String>>,
    pub icon_sets: Mutex<Vec<(String, PathBuf)>>,
}

impl FakeHost {
    pub fn new(active_game: Option<&str>, install_path: Option<&Path>) -> Self {
        Self {
            active_game: active_game.map(str::to_string),
            install_path: install_path.map(Path::to_path_buf),
            opened_urls: Mutex::new(Vec::new()),
            icon_sets: Mutex::new(Vec::new()),
        }
    }
}

impl HostApi for FakeHost {
    fn active_game_id(&self) -> Option<String> {
        self.active_game.clone()
    }

    fn show_url(&self, url: &str) {
        self.opened_urls.lock().unwrap().push(url.to_string());
    }

    fn install_icon_set(&self, set_id: &str, svg_path: &Path) -> ExtensionResult<()> {
        self.icon_sets
            .lock()
            .unwrap()
            .push((set_id.to_string(), svg_path.to_path_buf()));
        Ok(())
    }

    fn registry_value(&self, _location: &RegistryLocation) -> ExtensionResult<Option<String>> {
        Ok(self
            .install_path
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()))
    }
}
