//! # 버전 히스토리 표시용 변환
//!
//! 저장된 버전 목록을 화면에 바로 그릴 수 있는 형태로 바꿉니다.
//! - 최신 버전이 먼저 오도록 뒤집고
//! - 저장 순번("Version N"), 상대 시간("3 minutes ago"), 글자 수 변화량을 붙입니다.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::models::{HistoryEntry, Version};

use super::record::TIMESTAMP_FORMAT;

fn plural(n: i64, unit: &str) -> String {
    if n > 1 {
        format!("{} {}s ago", n, unit)
    } else {
        format!("{} {} ago", n, unit)
    }
}

/// 타임스탬프를 `now` 기준 상대 시간 문자열로 바꿉니다.
///
/// | 경과 시간 | 결과 |
/// |-----------|------|
/// | 60초 미만 (미래 포함) | `just now` |
/// | 60분 미만 | `N minute(s) ago` |
/// | 24시간 미만 | `N hour(s) ago` |
/// | 그 이상 | `N day(s) ago` |
///
/// 파싱할 수 없는 타임스탬프는 `unknown`입니다.
pub fn time_ago(timestamp: &str, now: DateTime<Local>) -> String {
    let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) else {
        return "unknown".to_string();
    };
    // DST 전환 구간처럼 로컬 시각이 두 번 있는 경우 이른 쪽을 씁니다.
    let Some(past) = Local.from_local_datetime(&naive).earliest() else {
        return "unknown".to_string();
    };

    let secs = (now - past).num_seconds();
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if secs < 60 {
        "just now".to_string()
    } else if mins < 60 {
        plural(mins, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else {
        plural(days, "day")
    }
}

/// 오래된 순 목록을 최신순 히스토리 항목으로 변환합니다.
pub fn history_entries(versions: Vec<Version>, now: DateTime<Local>) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = versions
        .into_iter()
        .enumerate()
        .map(|(index, version)| HistoryEntry {
            number: index + 1,
            time_ago: time_ago(&version.timestamp, now),
            char_delta: version.new_length as i64 - version.old_length as i64,
            version,
        })
        .collect();
    entries.reverse();
    entries
}
