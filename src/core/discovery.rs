use crate::utils::error::{GenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const COMPOSE_FILE_NAME: &str = "docker-compose.yml";

/// Every `docker-compose.yml` file under `root`, including `root` itself.
///
/// Matches below a symlinked directory are dropped. Entries that cannot be
/// read while walking are logged and skipped; an unreadable root is an error.
pub fn find_compose_files(root: &Path) -> Result<Vec<PathBuf>> {
    fs::read_dir(root)?;

    let root_str = root.to_str().ok_or_else(|| GenError::ConfigError {
        message: format!("scan root is not valid UTF-8: {}", root.display()),
    })?;
    let pattern = format!(
        "{}/**/{}",
        glob::Pattern::escape(root_str.trim_end_matches('/')),
        COMPOSE_FILE_NAME
    );
    let paths = glob::glob(&pattern).map_err(|err| GenError::ConfigError {
        message: format!("find compose files failed, {}", err),
    })?;

    let mut found = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => {
                if path.is_dir() {
                    continue;
                }
                if below_symlink(root, &path) {
                    tracing::debug!("Skipping {} below a symlinked directory", path.display());
                    continue;
                }
                found.push(path);
            }
            Err(err) => {
                tracing::warn!("Skipping unreadable path {}: {}", err.path().display(), err.error())
            }
        }
    }

    Ok(found)
}

/// True when any directory between `root` and `path` is a symlink.
fn below_symlink(root: &Path, path: &Path) -> bool {
    // A relative root such as `.` may come back without its prefix.
    let (mut dir, relative) = match path.strip_prefix(root) {
        Ok(relative) => (root.to_path_buf(), relative),
        Err(_) => (PathBuf::new(), path),
    };

    let Some(parent) = relative.parent() else {
        return false;
    };
    for component in parent.components() {
        dir.push(component);
        let is_symlink = fs::symlink_metadata(&dir)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);
        if is_symlink {
            return true;
        }
    }
    false
}
