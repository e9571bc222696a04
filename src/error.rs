//! # 에러 처리 모듈
//!
//! 서비스/라우트 계층에서 발생하는 에러를 하나의 `AppError`로 모으고,
//! HTTP 응답으로 변환하는 방법을 정의합니다.
//!
//! 응답 본문 형식: `{ "success": false, "message": "..." }`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::StorageError;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 필수 입력이 없거나 요청 형식이 잘못됨 (HTTP 400). 재시도해도 소용없습니다.
    #[error("{0}")]
    Validation(String),

    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// 저장소 읽기/쓰기 실패 (HTTP 500)
    /// #[from]: `?` 연산자로 StorageError → AppError::Storage 자동 변환
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // 저장소 에러는 서버 로그에도 남깁니다.
        if let AppError::Storage(ref e) = self {
            tracing::error!("Storage error: {}", e);
        }

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
