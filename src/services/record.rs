//! # 버전 레코드 생성
//!
//! 직전 버전과 새 내용으로 완성된 `Version`을 만듭니다.
//! 저장은 하지 않습니다. 저장은 `VersionService`가 저장소를 통해 수행합니다.

use chrono::{DateTime, Local};

use crate::models::Version;

use super::diff::diff;

/// 타임스탬프 포맷: `2026-02-16 12:00:00` (로컬 시간, 초 단위)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// 현재 시각으로 새 버전 레코드를 만듭니다.
pub fn build(previous: Option<&Version>, new_content: &str) -> Version {
    build_at(previous, new_content, Local::now())
}

/// 시각을 직접 지정하는 버전. 테스트와 `build`가 공유합니다.
pub fn build_at(previous: Option<&Version>, new_content: &str, at: DateTime<Local>) -> Version {
    // 첫 저장이면 빈 문자열과 비교합니다.
    let previous_content = previous.map(|v| v.content.as_str()).unwrap_or("");
    let changes = diff(previous_content, new_content);

    Version {
        // UUIDv7: 시간 기반 UUID로, 생성 순서대로 정렬됩니다
        id: uuid::Uuid::now_v7().to_string(),
        timestamp: format_timestamp(&at),
        added_words: changes.added_words,
        removed_words: changes.removed_words,
        old_length: changes.old_length,
        new_length: changes.new_length,
        content: new_content.to_string(),
    }
}
