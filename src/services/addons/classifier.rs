use super::types::{ClassifyResult, MOD_FILE_EXT};
use crate::services::fs_utils::path_utils::extname;
use crate::types::GameId;

/// True when `path` is an add-on's `.toc` descriptor.
///
/// Only file entries count. A directory entry named like `Foo.toc/` is never a
/// marker, even though a bare extension check on the name would accept it.
pub fn is_marker_file(path: &str) -> bool {
    extname(path) == MOD_FILE_EXT
}

/// Decide whether the add-on installer handles an archive for `game_id`.
///
/// Installers are offered every archive for every game, so both the game and
/// the presence of at least one `.toc` file are checked. Never fails.
pub fn classify<S: AsRef<str>>(files: &[S], game_id: &str) -> ClassifyResult {
    let supported =
        GameId::is_supported(game_id) && files.iter().any(|f| is_marker_file(f.as_ref()));

    log::debug!(
        "Add-on installer test for '{}' over {} file(s): supported={}",
        game_id,
        files.len(),
        supported
    );

    ClassifyResult {
        supported,
        required_files: Vec::new(),
    }
}
