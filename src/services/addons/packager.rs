use super::classifier::is_marker_file;
use super::types::{AddonUnit, InstallInstruction, InstallResult};
use crate::services::fs_utils::path_utils::{
    dirname, ends_with_separator, is_separator, CURRENT_DIR,
};

/// Split an archive's file list into add-on units, one per `.toc` file.
///
/// A file belongs to a unit when its path contains the unit's root folder.
/// Loose files at the archive root and directory entries belong to no unit.
/// Matching is plain substring containment, so a unit whose folder name is a
/// prefix of another's (`Bag` / `Bagnon`) also claims the other's files.
pub fn group_addons<S: AsRef<str>>(files: &[S]) -> Vec<AddonUnit> {
    files
        .iter()
        .map(AsRef::as_ref)
        .filter(|f| is_marker_file(f))
        .map(|toc| {
            let root_folder = dirname(toc);
            let addon_files = files
                .iter()
                .map(AsRef::as_ref)
                .filter(|f| {
                    f.contains(root_folder) && dirname(f) != CURRENT_DIR && !ends_with_separator(f)
                })
                .map(str::to_string)
                .collect();

            AddonUnit {
                marker_file: toc.to_string(),
                root_folder: root_folder.to_string(),
                files: addon_files,
            }
        })
        .collect()
}

/// Install path of `file` for an add-on rooted at `root_folder`.
///
/// Everything before the add-on's own folder is dropped, so
/// `Pack/AddonA/libs/util.lua` under root `Pack/AddonA` lands at
/// `AddonA/libs/util.lua`. The root is located on a segment boundary when
/// possible (`Pack/MyCore/Core/x.lua` under `Core` lands at `Core/x.lua`).
pub fn destination_for(file: &str, root_folder: &str) -> String {
    if root_folder == CURRENT_DIR {
        return file.to_string();
    }

    // `AddonA//AddonA.toc` yields the root `AddonA/`.
    let root = root_folder.trim_end_matches(is_separator);
    if root.is_empty() {
        return file.trim_start_matches(is_separator).to_string();
    }

    let Some(found) = find_root_segment(file, root).or_else(|| file.find(root)) else {
        return file.to_string();
    };
    let wrapper_len = root.rfind(is_separator).map_or(0, |idx| idx + 1);

    file[found + wrapper_len..].to_string()
}

/// First occurrence of `root` in `file` that starts a path segment.
fn find_root_segment(file: &str, root: &str) -> Option<usize> {
    file.match_indices(root)
        .map(|(idx, _)| idx)
        .find(|&idx| idx == 0 || file[..idx].ends_with(is_separator))
}

/// Produce copy instructions for every add-on in the archive.
///
/// Units are emitted in `.toc` order and are not deduplicated against each other.
pub fn package<S: AsRef<str>>(files: &[S]) -> Vec<InstallInstruction> {
    let addons = group_addons(files);
    log::debug!("Found {} World of Warcraft addons", addons.len());

    addons
        .iter()
        .flat_map(|addon| {
            addon.files.iter().map(move |file| {
                InstallInstruction::copy(file.as_str(), destination_for(file, &addon.root_folder))
            })
        })
        .collect()
}

/// Installer callback body: [`package`] wrapped in the host's result shape.
pub fn install<S: AsRef<str>>(files: &[S]) -> InstallResult {
    InstallResult {
        instructions: package(files),
    }
}
