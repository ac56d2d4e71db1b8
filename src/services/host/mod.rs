//! The extension contract offered by the host mod manager.
//!
//! The host calls [`crate::init`] with an [`ExtensionContext`] and later hands a
//! [`HostApi`] to every callback that needs host state, so nothing in this
//! crate reaches for a global.

mod registrations;

pub use registrations::{
    IconSetRegistration, InstallFn, InstallerRegistration, ModSourceRegistration, TestFn,
};

use crate::services::config::RegistryLocation;
use crate::services::fs_utils::file_utils;
use crate::services::game::GameDescriptor;
use crate::types::ExtensionResult;
use std::path::Path;

/// Host capabilities available to callbacks at runtime.
pub trait HostApi: Send + Sync {
    /// Identifier of the game the user currently manages, if any.
    fn active_game_id(&self) -> Option<String>;

    /// Open `url` in the host's embedded browser.
    fn show_url(&self, url: &str);

    fn install_icon_set(&self, set_id: &str, svg_path: &Path) -> ExtensionResult<()>;

    /// Read a string value from the Windows registry.
    ///
    /// `Ok(None)` means the key or value does not exist.
    fn registry_value(&self, location: &RegistryLocation) -> ExtensionResult<Option<String>>;

    /// Make sure `dir` exists and can be written to. Idempotent.
    fn ensure_dir_writable(&self, dir: &Path) -> ExtensionResult<()> {
        file_utils::ensure_dir_writable(dir)?;
        Ok(())
    }
}

pub type OnceCallback = Box<dyn FnOnce(&dyn HostApi) -> ExtensionResult<()> + Send>;

/// Registration surface handed to the extension at load time.
pub trait ExtensionContext {
    fn register_game(&mut self, game: GameDescriptor) -> ExtensionResult<()>;

    fn register_installer(&mut self, installer: InstallerRegistration) -> ExtensionResult<()>;

    fn register_mod_source(&mut self, source: ModSourceRegistration) -> ExtensionResult<()>;

    /// Queue `callback` to run a single time once the host is fully started.
    fn once(&mut self, callback: OnceCallback);
}

#[cfg(test)]
#[path = "tests/registrations_tests.rs"]
mod registrations_tests;
