//! String path helpers for archive entry names.
//!
//! Entry names come from the host, not from the local filesystem, so both
//! `/` and `\` count as separators regardless of platform.

use std::path::{Component, Path};

/// Returned by [`dirname`] for a path with no directory portion.
pub const CURRENT_DIR: &str = ".";

pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// True for directory placeholder entries such as `AddonA/libs/`.
pub fn ends_with_separator(path: &str) -> bool {
    path.ends_with(is_separator)
}

/// Directory portion of `path`.
///
/// Trailing separators are ignored, a path without any separator yields `"."`
/// and a path directly under the root yields the root separator.
pub fn dirname(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return if path.is_empty() { CURRENT_DIR } else { &path[..1] };
    }

    match trimmed.rfind(is_separator) {
        None => CURRENT_DIR,
        Some(0) => &trimmed[..1],
        Some(idx) => &trimmed[..idx],
    }
}

/// Final segment of `path`.
pub fn basename(path: &str) -> &str {
    match path.rfind(is_separator) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Extension of the final segment including the leading dot, or `""`.
///
/// Dot-files (`.toc`) have no extension, and directory entries never do.
pub fn extname(path: &str) -> &str {
    let name = basename(path);
    match name.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &name[idx..],
    }
}

/// True when a host entry name stays inside the folder it is extracted to.
///
/// Both separators are honoured. Absolute names, drive prefixes and `..`
/// segments that climb above the start are rejected.
pub fn is_entry_name_safe(name: &str) -> bool {
    let normalized = name.replace('\\', "/");
    if normalized.starts_with('/') {
        return false;
    }

    let mut depth = 0;
    for component in Path::new(&normalized).components() {
        match component {
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    // Climbs out of the extraction folder
                    return false;
                }
            }
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }

    true
}
