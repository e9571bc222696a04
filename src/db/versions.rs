//! # SQLite 버전 저장소
//!
//! `versions` 테이블(`migrations/0001_create_versions.sql`)에 레코드를 저장합니다.
//!
//! ## 테이블 구조
//! - `seq`: 자동 증가 키. 삽입 순서를 보장하며 목록/최신 조회의 정렬 기준입니다
//! - `added_words`, `removed_words`: 단어 목록을 JSON 배열 문자열로 저장

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use super::{StorageError, VersionStore};
use crate::models::Version;

/// DB 한 행. 단어 목록 컬럼은 JSON 문자열 그대로 읽은 뒤 `Version`으로 변환합니다.
#[derive(Debug, sqlx::FromRow)]
struct VersionRow {
    id: String,
    timestamp: String,
    added_words: String,
    removed_words: String,
    old_length: i64,
    new_length: i64,
    content: String,
}

impl VersionRow {
    fn into_version(self) -> Result<Version, StorageError> {
        Ok(Version {
            id: self.id,
            timestamp: self.timestamp,
            added_words: serde_json::from_str(&self.added_words)?,
            removed_words: serde_json::from_str(&self.removed_words)?,
            old_length: self.old_length as usize,
            new_length: self.new_length as usize,
            content: self.content,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// 데이터베이스에 연결하고 아직 적용되지 않은 마이그레이션을 실행합니다.
    ///
    /// `database_url` 예: `sqlite:data/versions.db?mode=rwc`
    /// (`mode=rwc`: 파일이 없으면 생성)
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StorageError> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl VersionStore for SqliteStore {
    async fn append(&self, version: &Version) -> Result<(), StorageError> {
        let added_words = serde_json::to_string(&version.added_words)?;
        let removed_words = serde_json::to_string(&version.removed_words)?;

        sqlx::query(
            r#"
            INSERT INTO versions (id, timestamp, added_words, removed_words, old_length, new_length, content)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&version.id)
        .bind(&version.timestamp)
        .bind(added_words)
        .bind(removed_words)
        .bind(version.old_length as i64)
        .bind(version.new_length as i64)
        .bind(&version.content)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Version>, StorageError> {
        let rows = sqlx::query_as::<_, VersionRow>(
            r#"
            SELECT id, timestamp, added_words, removed_words, old_length, new_length, content
            FROM versions
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(VersionRow::into_version).collect()
    }

    async fn latest(&self) -> Result<Option<Version>, StorageError> {
        let row = sqlx::query_as::<_, VersionRow>(
            r#"
            SELECT id, timestamp, added_words, removed_words, old_length, new_length, content
            FROM versions
            ORDER BY seq DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        row.map(VersionRow::into_version).transpose()
    }

    async fn clear(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM versions")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
