use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StorageError, VersionStore};
use crate::models::Version;

/// 프로세스 메모리 저장소. 서버를 재시작하면 기록이 사라집니다.
#[derive(Debug, Default)]
pub struct MemoryStore {
    versions: RwLock<Vec<Version>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VersionStore for MemoryStore {
    async fn append(&self, version: &Version) -> Result<(), StorageError> {
        self.versions.write().await.push(version.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Version>, StorageError> {
        Ok(self.versions.read().await.clone())
    }

    async fn latest(&self) -> Result<Option<Version>, StorageError> {
        Ok(self.versions.read().await.last().cloned())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.versions.write().await.clear();
        Ok(())
    }
}
