//! # verdiff
//!
//! 텍스트 버전을 저장할 때마다 직전 버전과 단어 단위로 비교해
//! 추가/삭제된 단어를 함께 기록하는 웹 서비스입니다.
//!
//! 모듈 구조:
//! - `config`: 환경변수 기반 설정
//! - `db`: 버전 저장소 트레이트와 구현체 (메모리 / JSON 파일 / SQLite)
//! - `error`: 에러 타입과 HTTP 응답 변환
//! - `models`: 데이터 구조체
//! - `routes`: HTTP 핸들러와 라우터
//! - `services`: 토크나이저, 단어 비교, 레코드 생성, 저장 서비스

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
