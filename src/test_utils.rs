use crate::services::config::RegistryLocation;
use crate::services::host::HostApi;
use crate::types::{ExtensionError, ExtensionResult};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// What the fake registry answers.
#[derive(Debug, Clone)]
pub enum RegistryAnswer {
    Value(String),
    Missing,
    Fail,
}

/// In-process stand-in for the host application.
pub struct MockHost {
    pub active_game: Option<String>,
    pub registry: RegistryAnswer,
    pub lookups: Mutex<Vec<RegistryLocation>>,
    pub opened_urls: Mutex<Vec<String>>,
    pub icon_sets: Mutex<Vec<(String, PathBuf)>>,
}

impl MockHost {
    pub fn new(registry: RegistryAnswer) -> Self {
        init_logger();
        Self {
            active_game: None,
            registry,
            lookups: Mutex::new(Vec::new()),
            opened_urls: Mutex::new(Vec::new()),
            icon_sets: Mutex::new(Vec::new()),
        }
    }

    pub fn with_active_game(mut self, game_id: &str) -> Self {
        self.active_game = Some(game_id.to_string());
        self
    }
}

impl HostApi for MockHost {
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

    fn registry_value(&self, location: &RegistryLocation) -> ExtensionResult<Option<String>> {
        self.lookups.lock().unwrap().push(location.clone());
        match &self.registry {
            RegistryAnswer::Value(v) => Ok(Some(v.clone())),
            RegistryAnswer::Missing => Ok(None),
            RegistryAnswer::Fail => Err(ExtensionError::Registry(
                "RegOpenKeyEx failed: access denied".to_string(),
            )),
        }
    }
}
