//! # 버전 API 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | POST | /save-version | `save_version` | 새 버전 저장 (201) |
//! | GET | /versions | `list_versions` | 전체 버전, 오래된 순 |
//! | GET | /versions/latest | `latest_version` | 최신 버전 (없으면 null) |
//! | GET | /versions/history | `version_history` | 히스토리 화면용, 최신순 |
//! | DELETE | /versions | `clear_versions` | 전체 삭제 (`ALLOW_RESET=true`일 때만) |

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use serde_json::{json, Value};

use super::AppState;
use crate::{error::AppError, models::SaveVersionRequest};

/// `POST /save-version` + `{ "content": "..." }`
///
/// 본문을 JSON으로 파싱하지 못한 경우도 400으로 응답하기 위해
/// `Json` 추출 결과를 `Result`로 받아 직접 변환합니다.
pub async fn save_version(
    State(state): State<AppState>,
    payload: Result<Json<SaveVersionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(req) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let version = state.service.save_version(req.content).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "version": version })),
    ))
}

/// `GET /versions`
///
/// 읽기 실패 시에도 `versions: []`를 포함한 본문을 500과 함께 돌려줍니다.
pub async fn list_versions(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let listing = state.service.list_versions().await;
    match listing.error {
        None => (
            StatusCode::OK,
            Json(json!({ "success": true, "versions": listing.versions })),
        ),
        Some(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "versions": [], "message": message })),
        ),
    }
}

pub async fn latest_version(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let version = state.service.latest_version().await?;
    Ok(Json(json!({ "success": true, "version": version })))
}

pub async fn version_history(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let history = state.service.history(Local::now()).await;
    match history.error {
        None => (
            StatusCode::OK,
            Json(json!({ "success": true, "entries": history.versions })),
        ),
        Some(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "entries": [], "message": message })),
        ),
    }
}

/// `DELETE /versions` — 테스트/초기화 전용. 설정으로 허용하지 않았다면 404.
pub async fn clear_versions(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    if !state.allow_reset {
        return Err(AppError::NotFound);
    }
    state.service.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}
