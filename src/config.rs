//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수(또는 `.env` 파일)에서 서버 설정값을 읽어옵니다.
//! 모든 항목에 기본값이 있으므로 환경변수 없이도 실행됩니다.
//!
//! 설정 항목:
//! - `HOST` / `PORT`: 서버 바인딩 주소 (기본값 `0.0.0.0:3000`)
//! - `STORAGE_BACKEND`: `memory` | `file` | `sqlite` (기본값 `memory`)
//! - `VERSIONS_FILE`: file 백엔드의 JSON 파일 경로
//! - `DATABASE_URL`: sqlite 백엔드의 연결 문자열
//! - `STATIC_DIR`: 프론트엔드 빌드 결과물 디렉토리 (있으면 함께 서빙)
//! - `ALLOW_RESET`: `true`이면 `DELETE /versions` 허용

use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown STORAGE_BACKEND '{0}' (expected memory, file or sqlite)")]
    UnknownBackend(String),

    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
}

/// 버전 저장소 종류. 시작할 때 한 번 골라 `VersionStore` 구현체를 만듭니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// 애플리케이션 전체 설정. 서버 시작 시 한 번 읽어 사용합니다.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage_backend: StorageBackend,
    pub versions_file: String,
    pub database_url: String,
    pub static_dir: String,
    pub allow_reset: bool,
}

impl Config {
    /// 프로세스 환경변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 → 값 조회 함수로부터 설정을 만듭니다. 값이 없으면 기본값을 씁니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port_raw = get("PORT", "3000");
        let port = port_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        Ok(Self {
            host: get("HOST", "0.0.0.0"),
            port,
            storage_backend: get("STORAGE_BACKEND", "memory").parse()?,
            versions_file: get("VERSIONS_FILE", "data/versions.json"),
            database_url: get("DATABASE_URL", "sqlite:data/versions.db?mode=rwc"),
            static_dir: get("STATIC_DIR", "../frontend/dist"),
            allow_reset: matches!(
                get("ALLOW_RESET", "false").trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.versions_file, "data/versions.json");
        assert!(!config.allow_reset);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("PORT", "8080"),
            ("STORAGE_BACKEND", "SQLite"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("ALLOW_RESET", "true"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage_backend, StorageBackend::Sqlite);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.allow_reset);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config(&[("PORT", "eighty")]).unwrap_err(),
            ConfigError::InvalidPort("eighty".into())
        );
        assert_eq!(
            config(&[("STORAGE_BACKEND", "redis")]).unwrap_err(),
            ConfigError::UnknownBackend("redis".into())
        );
    }
}
