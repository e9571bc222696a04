//! # 버전 저장소 계층 (Data Access Layer)
//!
//! 버전 레코드를 "추가하고 다시 읽는" 저장소를 정의합니다.
//! 서비스 계층(`services::VersionService`)은 구체 타입이 아니라
//! `VersionStore` 트레이트에만 의존하므로, 시작 시점에 백엔드를 골라 끼울 수 있습니다.
//!
//! 각 하위 모듈:
//! - `memory`: 프로세스 메모리에만 보관 (재시작하면 사라짐)
//! - `file`: JSON 파일 하나에 전체 목록을 저장
//! - `versions`: SQLite 테이블에 저장 (sqlx)
//!
//! ## 공통 규칙
//! - 목록은 항상 삽입 순서(오래된 것 먼저)
//! - `latest()`는 마지막으로 추가된 레코드
//! - 레코드는 수정/개별 삭제되지 않으며, `clear()`만이 전체를 지웁니다

pub mod file;
pub mod memory;
pub mod versions;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use versions::SqliteStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Version;

/// 저장소 입출력 실패
#[derive(Debug, Error)]
pub enum StorageError {
    /// 파일 입출력 오류
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 직렬화/역직렬화 오류 (파일 저장소, SQLite의 단어 목록 컬럼)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// 추가 전용(append-only) 버전 저장소
///
/// `#[async_trait]`: 트레이트의 async 메서드를 `Box<dyn Future>`로 바꿔 주어
/// `Arc<dyn VersionStore>` 형태로 사용할 수 있게 합니다.
#[async_trait]
pub trait VersionStore: Send + Sync {
    /// 레코드 하나를 목록 끝에 추가합니다. 실패하면 아무것도 저장되지 않습니다.
    async fn append(&self, version: &Version) -> Result<(), StorageError>;

    /// 전체 레코드를 삽입 순서대로 반환합니다. 비어 있으면 빈 Vec.
    async fn list(&self) -> Result<Vec<Version>, StorageError>;

    /// 마지막으로 추가된 레코드. 비어 있으면 None.
    async fn latest(&self) -> Result<Option<Version>, StorageError>;

    /// 모든 레코드를 삭제합니다 (테스트/초기화 용도).
    async fn clear(&self) -> Result<(), StorageError>;
}
