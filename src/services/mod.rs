//! # 서비스(비즈니스 로직) 모듈
//!
//! - `tokenizer`: 텍스트 → 소문자 단어 토큰
//! - `diff`: 두 텍스트의 단어 빈도 비교 (added / removed)
//! - `record`: 비교 결과로 `Version` 레코드 생성
//! - `history`: 히스토리 화면용 변환 (순번, 상대 시간)
//! - `version_service`: 저장/조회 흐름을 묶는 오케스트레이터

pub mod diff;
pub mod history;
pub mod record;
pub mod tokenizer;
pub mod version_service;

pub use diff::{diff, WordDiff};
pub use tokenizer::tokenize;
pub use version_service::{VersionListing, VersionService};
