use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Writes reports below a base directory, creating it as needed.
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
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_dirs_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("reports");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        storage.write_file("03-07-2024.txt", b"first").await.unwrap();
        storage.write_file("03-07-2024.txt", b"second").await.unwrap();

        let content = fs::read_to_string(base.join("03-07-2024.txt")).unwrap();
        assert_eq!(content, "second");
    }
}
