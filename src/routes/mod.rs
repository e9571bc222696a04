//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과, 이들을 URL에 연결한 `Router`를 제공합니다.
//!
//! 각 하위 모듈:
//! - `health`: 서버 상태 확인
//! - `versions`: 버전 저장/조회/초기화

pub mod health;
pub mod versions;

pub use health::*;
pub use versions::*;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::services::VersionService;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// `Arc`로 감싸 두었으므로 clone해도 같은 서비스(같은 저장소)를 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<VersionService>,
    /// `DELETE /versions` 허용 여부
    pub allow_reset: bool,
}

/// API 라우터. CORS/로깅/정적 파일 레이어는 `main`에서 덧붙입니다.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/save-version", post(save_version))
        .route("/versions", get(list_versions).delete(clear_versions))
        .route("/versions/latest", get(latest_version))
        .route("/versions/history", get(version_history))
        .route("/health", get(health_check))
        .with_state(state)
}
