use serde::{Deserialize, Serialize};

/// 저장된 텍스트 스냅샷 하나와, 직전 스냅샷 대비 단어 변경 내역.
///
/// 한 번 만들어지면 수정되지 않습니다. JSON으로는 camelCase 필드명을 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: String,
    /// 로컬 시간 기준 `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    pub added_words: Vec<String>,
    pub removed_words: Vec<String>,
    /// 이전 내용의 길이 (UTF-16 코드 유닛 수)
    pub old_length: usize,
    pub new_length: usize,
    pub content: String,
}

/// `POST /save-version` 요청 본문.
///
/// `content`가 빠진 요청과 빈 문자열을 구분해야 하므로 Option입니다.
#[derive(Debug, Deserialize)]
pub struct SaveVersionRequest {
    pub content: Option<String>,
}

/// 히스토리 화면 한 줄 (최신순).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// 1부터 시작하는 저장 순번 ("Version N")
    pub number: usize,
    pub time_ago: String,
    pub char_delta: i64,
    pub version: Version,
}
