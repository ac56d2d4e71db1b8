use std::fs;
use std::path::Path;

/// Creates `dir` (and its parents) if needed and clears a read-only flag on it.
///
/// Calling this on an existing writable directory is a no-op.
pub fn ensure_dir_writable(dir: &Path) -> std::io::Result<()> {
    if !dir.exists() {
        log::info!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir)?;
    } else if !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Not a directory: {}", dir.display()),
        ));
    }

    let mut permissions = fs::metadata(dir)?.permissions();
    if permissions.readonly() {
        log::warn!("Directory is read-only, clearing flag: {}", dir.display());
        #[allow(clippy::permissions_set_readonly_false)]
        permissions.set_readonly(false);
        fs::set_permissions(dir, permissions)?;
    }

    Ok(())
}
