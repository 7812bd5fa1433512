use std::io::ErrorKind;
use std::path::Path;
use taskboard_core::{BoardError, BoardResult};
use tokio::fs;

/// Atomic file writer: write to a temp file beside the target, then rename.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically, creating missing parent directories.
    pub async fn write_atomic(path: &Path, data: &[u8]) -> BoardResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;

        // Same directory as the target so the rename stays on one filesystem.
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        fs::write(temp_file.path(), data).await?;
        temp_file
            .persist(path)
            .map_err(|e| BoardError::Io(e.error))?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read all data from a file
    pub async fn read_all(path: &Path) -> BoardResult<Vec<u8>> {
        let data = fs::read(path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }

    /// Like [`read_all`](Self::read_all), but a missing file is `None`.
    pub async fn read_optional(path: &Path) -> BoardResult<Option<Vec<u8>>> {
        match Self::read_all(path).await {
            Ok(data) => Ok(Some(data)),
            Err(BoardError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No file at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("settings.json");
        let data = br#"{"theme":"dark"}"#;

        AtomicWriter::write_atomic(&file_path, data).await.unwrap();

        let read_data = AtomicWriter::read_all(&file_path).await.unwrap();
        assert_eq!(read_data, data);
    }

    #[tokio::test]
    async fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("settings.json");

        AtomicWriter::write_atomic(&file_path, b"First")
            .await
            .unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second")
            .await
            .unwrap();

        let read_data = AtomicWriter::read_all(&file_path).await.unwrap();
        assert_eq!(read_data, b"Second");
    }

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("taskboard").join("nested").join("settings.json");

        AtomicWriter::write_atomic(&file_path, b"{}").await.unwrap();

        assert!(file_path.exists());
    }

    #[tokio::test]
    async fn test_no_temp_files_left_behind() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("settings.json");

        AtomicWriter::write_atomic(&file_path, b"{}").await.unwrap();

        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[tokio::test]
    async fn test_read_optional_missing_file() {
        let dir = tempdir().unwrap();
        let missing = AtomicWriter::read_optional(&dir.path().join("absent.json"))
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
