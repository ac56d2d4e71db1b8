use super::descriptors::mod_path;
use crate::services::host::HostApi;
use crate::types::{ExtensionResult, GameId};
use std::path::{Path, PathBuf};

/// Ensure the AddOns folder of `game` exists and is writable.
/// Returns the absolute AddOns directory.
pub fn prepare_game(
    api: &dyn HostApi,
    game: GameId,
    install_path: &Path,
) -> ExtensionResult<PathBuf> {
    let addons_dir = install_path.join(mod_path(game));
    api.ensure_dir_writable(&addons_dir)?;

    log::info!(
        "{} add-on folder ready: {}",
        game.display_name(),
        addons_dir.display()
    );
    Ok(addons_dir)
}

/// [`prepare_game`] by host game identifier.
///
/// An unrecognised `game_id` means game registration and setup disagree,
/// so it is returned as an error instead of being ignored.
pub fn prepare_for_modding(
    api: &dyn HostApi,
    install_path: &Path,
    game_id: &str,
) -> ExtensionResult<PathBuf> {
    let game: GameId = game_id.parse()?;
    prepare_game(api, game, install_path)
}
