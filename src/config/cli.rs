use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    fn location(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

/// Prints every artifact instead of writing it. Used for `--dry-run`.
#[derive(Debug, Clone, Default)]
pub struct StdoutStorage;

impl Storage for StdoutStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "--- {} ---", path)?;
        out.write_all(data)?;
        writeln!(out)?;
        Ok(())
    }

    fn location(&self, path: &str) -> PathBuf {
        Path::new("<dry-run>").join(path)
    }
}
