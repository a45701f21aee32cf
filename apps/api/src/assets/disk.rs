use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use super::AssetSource;
use crate::errors::AppError;

/// Reads assets from a directory on disk. Paths may not leave the root.
#[derive(Debug, Clone)]
pub struct DiskAssets {
    root: PathBuf,
}

impl DiskAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, AppError> {
        let relative = Path::new(path);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !contained || path.is_empty() {
            return Err(AppError::Validation(format!(
                "asset path '{path}' is not a plain relative path"
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl AssetSource for DiskAssets {
    async fn read(&self, path: &str) -> Result<Option<Vec<u8>>, AppError> {
        let full = self.resolve(path)?;
        match tokio::fs::read(&full).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                // Reading a directory is a miss, not a failure.
                let is_dir = tokio::fs::metadata(&full)
                    .await
                    .is_ok_and(|m| m.is_dir());
                if is_dir {
                    Ok(None)
                } else {
                    Err(AppError::Io(e))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("projects")).unwrap();
        std::fs::write(dir.path().join("projects/a.png"), b"png").unwrap();

        let assets = DiskAssets::new(dir.path());
        let bytes = assets.read("projects/a.png").await.unwrap();
        assert_eq!(bytes.as_deref(), Some(&b"png"[..]));
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let assets = DiskAssets::new(dir.path());
        assert!(assets.read("nope.png").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_directory_is_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("projects")).unwrap();
        let assets = DiskAssets::new(dir.path());
        assert!(assets.read("projects").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_escaping_paths() {
        let dir = tempfile::tempdir().unwrap();
        let assets = DiskAssets::new(dir.path());
        for path in ["../secret", "/etc/passwd", "a/../../b", "./a.png", ""] {
            let err = assets.read(path).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{path} was accepted");
        }
    }
}
