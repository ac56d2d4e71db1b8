use super::classifier::classify;
use super::packager::install;
use super::types::InstallResult;
use crate::services::fs_utils::path_utils::is_entry_name_safe;
use crate::types::{ExtensionError, ExtensionResult};
use std::fs;
use std::path::Path;

fn is_zip(archive_path: &Path) -> bool {
    archive_path
        .extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("zip"))
}

/// List the entry names of an add-on archive without extracting it.
///
/// Names are returned in archive order exactly as stored, so directory
/// entries keep their trailing `/`. Entries that would escape the
/// extraction root are skipped.
pub fn list_archive_files(archive_path: &Path) -> ExtensionResult<Vec<String>> {
    if !is_zip(archive_path) {
        return Err(ExtensionError::Archive(format!(
            "Unsupported archive format: {}",
            archive_path.display()
        )));
    }

    let file = fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i)?;
        let name = entry.name().to_string();

        if !is_entry_name_safe(&name) {
            log::warn!("Skipping unsafe archive entry: {name}");
            continue;
        }
        names.push(name);
    }

    Ok(names)
}

/// Classify and package an archive on disk for `game_id`.
///
/// An archive the installer does not handle yields no instructions.
pub fn plan_archive_install(
    archive_path: &Path,
    game_id: &str,
) -> ExtensionResult<InstallResult> {
    let files = list_archive_files(archive_path)?;

    if !classify(&files, game_id).supported {
        log::info!(
            "Archive not handled by the add-on installer: {}",
            archive_path.display()
        );
        return Ok(InstallResult::default());
    }

    Ok(install(&files))
}
