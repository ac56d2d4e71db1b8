use anyhow::Context;
use std::path::Path;

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

use services::addons;
use services::config::{self, ExtensionSettings};
use services::game::GameDescriptor;
use services::host::{
    ExtensionContext, HostApi, IconSetRegistration, InstallerRegistration, ModSourceRegistration,
};
use types::GameId;

pub const INSTALLER_ID: &str = "worldofwarcraft-addon";
pub const MOD_SOURCE_ID: &str = "twitch";
pub const MOD_SOURCE_NAME: &str = "CurseForge";
pub const MOD_SOURCE_ICON: &str = "curseforge";
pub const ICON_SET_ID: &str = "twitch-icons";

/// Extension entry point, called by the host once when the extension loads.
///
/// `extension_dir` is the folder the extension was installed to; optional
/// settings and the icon set are read from there.
pub fn init(context: &mut dyn ExtensionContext, extension_dir: &Path) -> anyhow::Result<()> {
    let settings = config::load_settings(extension_dir);
    register(context, &settings, extension_dir)
}

/// Register both game variants, the add-on installer, the CurseForge mod
/// source and the icon set with the host.
pub fn register(
    context: &mut dyn ExtensionContext,
    settings: &ExtensionSettings,
    extension_dir: &Path,
) -> anyhow::Result<()> {
    for game in GameDescriptor::all(settings) {
        let id = game.id;
        context
            .register_game(game)
            .with_context(|| format!("Failed to register game {id}"))?;
    }

    context
        .register_installer(InstallerRegistration {
            id: INSTALLER_ID.to_string(),
            priority: settings.installer_priority,
            test: addons::classify::<String>,
            install: addons::install::<String>,
        })
        .with_context(|| format!("Failed to register installer {INSTALLER_ID}"))?;

    context
        .register_mod_source(ModSourceRegistration {
            id: MOD_SOURCE_ID.to_string(),
            name: MOD_SOURCE_NAME.to_string(),
            url: settings.mod_source_url.clone(),
            icon: MOD_SOURCE_ICON.to_string(),
            games: GameId::ALL.to_vec(),
        })
        .with_context(|| format!("Failed to register mod source {MOD_SOURCE_ID}"))?;

    let icon_set = IconSetRegistration {
        set_id: ICON_SET_ID.to_string(),
        svg_path: extension_dir.join(&settings.icon_file),
    };
    context.once(Box::new(move |api: &dyn HostApi| icon_set.install(api)));

    log::info!(
        "World of Warcraft support registered (installer priority {})",
        settings.installer_priority
    );
    Ok(())
}
