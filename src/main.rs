//! # verdiff 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. 설정된 백엔드로 버전 저장소 생성
//! 5. API 라우터 설정 (+ 프론트엔드 정적 파일)
//! 6. HTTP 서버 시작

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use verdiff::{
    config::{Config, StorageBackend},
    db::{FileStore, MemoryStore, SqliteStore, VersionStore},
    routes::{self, AppState},
    services::VersionService,
};

/// 설정에 맞는 저장소 구현체를 만듭니다.
async fn build_store(config: &Config) -> Result<Arc<dyn VersionStore>> {
    let store: Arc<dyn VersionStore> = match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; versions are lost on restart");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::File => {
            tracing::info!("Using JSON file storage at {}", config.versions_file);
            Arc::new(FileStore::new(&config.versions_file))
        }
        StorageBackend::Sqlite => {
            tracing::info!("Using SQLite storage at {}", config.database_url);
            Arc::new(SqliteStore::connect(&config.database_url).await?)
        }
    };
    Ok(store)
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verdiff=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting verdiff server on {}:{}", config.host, config.port);

    let store = build_store(&config).await?;
    let state = AppState {
        service: Arc::new(VersionService::new(store)),
        allow_reset: config.allow_reset,
    };
    if config.allow_reset {
        tracing::warn!("DELETE /versions is enabled");
    }

    let api_routes = routes::router(state);

    // 개발 환경 기준으로 모든 출처를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 빌드된 프론트엔드가 있으면 같은 서버에서 서빙합니다.
    // API 경로에 매칭되지 않는 요청은 index.html로 보냅니다 (SPA 라우팅).
    let static_dir = Path::new(&config.static_dir);
    let app = if static_dir.exists() {
        tracing::info!("Serving frontend static files from {}", config.static_dir);
        let serve_dir = ServeDir::new(static_dir)
            .not_found_service(ServeFile::new(static_dir.join("index.html")));

        Router::new()
            .merge(api_routes)
            .fallback_service(serve_dir)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    } else {
        tracing::warn!("Static directory {} not found, serving API only", config.static_dir);

        Router::new()
            .merge(api_routes)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    };

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
