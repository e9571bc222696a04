//! # 버전 저장 서비스
//!
//! 저장 요청 하나를 처리하는 흐름을 묶습니다.
//!
//! ```text
//! save_version(content)
//!   1. content 누락 → AppError::Validation
//!   2. store.latest()        — 직전 버전 (없으면 빈 문자열과 비교)
//!   3. record::build()       — 단어 비교 + id/타임스탬프
//!   4. store.append()        — 실패하면 에러 전파, 아무것도 저장되지 않음
//! ```
//!
//! ## 에러 정책
//! - 쓰기(저장) 실패는 호출자에게 그대로 전파합니다.
//! - 목록 읽기 실패는 빈 목록 + 에러 메시지로 바꿔 반환하고 로그에 남깁니다.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::Mutex;

use crate::db::VersionStore;
use crate::error::AppError;
use crate::models::{HistoryEntry, Version};

use super::{history, record};

/// 목록 조회 결과. 읽기에 실패했다면 `versions`는 비어 있고 `error`에 사유가 들어갑니다.
#[derive(Debug)]
pub struct VersionListing<T = Version> {
    pub versions: Vec<T>,
    pub error: Option<String>,
}

pub struct VersionService {
    store: Arc<dyn VersionStore>,
    /// "최신 버전 조회 → 추가" 한 쌍이 다른 저장 요청과 섞이지 않도록 직렬화합니다.
    save_lock: Mutex<()>,
}

impl VersionService {
    pub fn new(store: Arc<dyn VersionStore>) -> Self {
        Self {
            store,
            save_lock: Mutex::new(()),
        }
    }

    /// 새 버전을 만들어 저장하고 반환합니다. 빈 문자열도 유효한 내용입니다.
    pub async fn save_version(&self, content: Option<String>) -> Result<Version, AppError> {
        let content =
            content.ok_or_else(|| AppError::Validation("Content is required".to_string()))?;

        let _guard = self.save_lock.lock().await;

        let previous = self.store.latest().await?;
        let version = record::build(previous.as_ref(), &content);
        self.store.append(&version).await?;

        tracing::info!(
            id = %version.id,
            added = version.added_words.len(),
            removed = version.removed_words.len(),
            "Saved version ({} -> {} chars)",
            version.old_length,
            version.new_length
        );

        Ok(version)
    }

    /// 전체 버전 (오래된 순). 저장소를 읽지 못하면 빈 목록과 에러 메시지를 돌려줍니다.
    pub async fn list_versions(&self) -> VersionListing {
        match self.store.list().await {
            Ok(versions) => VersionListing {
                versions,
                error: None,
            },
            Err(e) => {
                tracing::error!("Failed to read versions: {}", e);
                VersionListing {
                    versions: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    pub async fn latest_version(&self) -> Result<Option<Version>, AppError> {
        Ok(self.store.latest().await?)
    }

    /// 최신순 히스토리 항목. 읽기 실패 정책은 `list_versions`와 같습니다.
    pub async fn history(&self, now: DateTime<Local>) -> VersionListing<HistoryEntry> {
        let listing = self.list_versions().await;
        VersionListing {
            versions: history::history_entries(listing.versions, now),
            error: listing.error,
        }
    }

    pub async fn clear(&self) -> Result<(), AppError> {
        let _guard = self.save_lock.lock().await;
        self.store.clear().await?;
        tracing::warn!("All versions cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, StorageError};
    use async_trait::async_trait;

    fn service() -> (Arc<MemoryStore>, VersionService) {
        let store = Arc::new(MemoryStore::new());
        let service = VersionService::new(store.clone());
        (store, service)
    }

    /// 읽기/쓰기가 항상 실패하는 저장소
    struct BrokenStore;

    fn broken() -> StorageError {
        std::io::Error::new(std::io::ErrorKind::Other, "disk on fire").into()
    }

    #[async_trait]
    impl VersionStore for BrokenStore {
        async fn append(&self, _version: &Version) -> Result<(), StorageError> {
            Err(broken())
        }
        async fn list(&self) -> Result<Vec<Version>, StorageError> {
            Err(broken())
        }
        async fn latest(&self) -> Result<Option<Version>, StorageError> {
            Ok(None)
        }
        async fn clear(&self) -> Result<(), StorageError> {
            Err(broken())
        }
    }

    #[tokio::test]
    async fn three_saves_are_listed_oldest_first() {
        let (_, service) = service();
        service.save_version(Some("one".into())).await.unwrap();
        service.save_version(Some("one two".into())).await.unwrap();
        let last = service.save_version(Some("two three".into())).await.unwrap();

        let listing = service.list_versions().await;
        assert!(listing.error.is_none());
        let contents: Vec<&str> = listing.versions.iter().map(|v| v.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "one two", "two three"]);
        assert_eq!(listing.versions.last(), Some(&last));
        assert_eq!(last.added_words, vec!["three"]);
        assert_eq!(last.removed_words, vec!["one"]);
    }

    #[tokio::test]
    async fn missing_content_is_rejected_without_storing() {
        let (store, service) = service();
        let err = service.save_version(None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_content_is_valid() {
        let (_, service) = service();
        service.save_version(Some("some words".into())).await.unwrap();
        let cleared = service.save_version(Some(String::new())).await.unwrap();
        assert_eq!(cleared.content, "");
        assert_eq!(cleared.new_length, 0);
        assert_eq!(cleared.removed_words, vec!["some", "words"]);
    }

    #[tokio::test]
    async fn unchanged_content_has_empty_diff() {
        let (_, service) = service();
        service.save_version(Some("same text".into())).await.unwrap();
        let again = service.save_version(Some("same text".into())).await.unwrap();
        assert!(again.added_words.is_empty());
        assert!(again.removed_words.is_empty());
        assert_eq!(again.old_length, again.new_length);
    }

    #[tokio::test]
    async fn saved_record_matches_what_is_stored() {
        let (store, service) = service();
        let saved = service.save_version(Some("Hello, World!".into())).await.unwrap();
        assert_eq!(store.latest().await.unwrap(), Some(saved.clone()));
        assert_eq!(service.latest_version().await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn append_failure_propagates() {
        let service = VersionService::new(Arc::new(BrokenStore));
        let err = service.save_version(Some("text".into())).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn read_failure_degrades_to_empty_listing() {
        let service = VersionService::new(Arc::new(BrokenStore));
        let listing = service.list_versions().await;
        assert!(listing.versions.is_empty());
        assert_eq!(listing.error.as_deref(), Some("IO error: disk on fire"));

        let history = service.history(Local::now()).await;
        assert!(history.versions.is_empty());
        assert!(history.error.is_some());
    }

    #[tokio::test]
    async fn concurrent_saves_each_diff_against_a_distinct_predecessor() {
        let (_, service) = service();
        let service = Arc::new(service);

        let mut handles = Vec::new();
        for i in 0..20 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.save_version(Some(format!("word{i}"))).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let versions = service.list_versions().await.versions;
        assert_eq!(versions.len(), 20);
        // 각 버전의 removed는 정확히 직전 버전의 단어여야 합니다.
        for pair in versions.windows(2) {
            assert_eq!(pair[1].removed_words, vec![pair[0].content.clone()]);
        }
    }

    #[tokio::test]
    async fn clear_resets_the_history() {
        let (_, service) = service();
        service.save_version(Some("one".into())).await.unwrap();
        service.clear().await.unwrap();
        assert!(service.list_versions().await.versions.is_empty());

        let fresh = service.save_version(Some("two".into())).await.unwrap();
        assert_eq!(fresh.old_length, 0);
    }
}
