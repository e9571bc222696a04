//! # JSON 파일 저장소
//!
//! 전체 버전 목록을 JSON 배열 하나로 디스크에 저장합니다.
//!
//! - 파일이 없으면 빈 저장소로 취급합니다.
//! - 추가할 때는 전체를 읽고, 끝에 붙이고, 임시 파일에 쓴 뒤 rename으로 교체합니다.
//!   rename은 같은 파일시스템 안에서 원자적이므로 쓰다가 실패해도 기존 파일은 온전합니다.
//! - 쓰기 작업은 `Mutex`로 한 번에 하나씩만 수행합니다.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use super::{StorageError, VersionStore};
use crate::models::Version;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<Version>, StorageError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    async fn write_all(&self, versions: &[Version]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(versions)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl VersionStore for FileStore {
    async fn append(&self, version: &Version) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut versions = self.read_all().await?;
        versions.push(version.clone());
        self.write_all(&versions).await?;
        tracing::debug!(
            "Appended version {} to {} ({} total)",
            version.id,
            self.path.display(),
            versions.len()
        );
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Version>, StorageError> {
        self.read_all().await
    }

    async fn latest(&self) -> Result<Option<Version>, StorageError> {
        Ok(self.read_all().await?.pop())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        self.write_all(&[]).await
    }
}
