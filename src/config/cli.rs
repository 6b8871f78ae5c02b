use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}

/// Writes everything to standard output; the file name is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutStorage;

impl Storage for StdoutStorage {
    fn write_file(&self, _path: &str, data: &[u8]) -> Result<String> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()?;
        Ok("<stdout>".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_storage_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());

        let written = storage.write_file("sql/out.sql", b"-- hi\n").unwrap();

        assert!(written.ends_with("out.sql"));
        let content = fs::read_to_string(temp_dir.path().join("sql/out.sql")).unwrap();
        assert_eq!(content, "-- hi\n");
    }
}
