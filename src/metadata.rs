use std::path::{Path, PathBuf};

use crate::error::Result;

pub mod manifest;

pub const MANIFEST_FILE: &str = "package.json";

pub async fn manifest_path(configured: &Path) -> PathBuf {
    match tokio::fs::metadata(configured).await {
        Ok(meta) if meta.is_dir() => configured.join(MANIFEST_FILE),
        _ => configured.to_path_buf(),
    }
}

// invalid utf-8 is replaced rather than treated as an unreadable file
pub async fn read_manifest(path: &Path) -> Result<String> {
    let data = tokio::fs::read(path).await?;

    Ok(String::from_utf8_lossy(&data).into_owned())
}
