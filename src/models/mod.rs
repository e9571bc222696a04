//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `version`: 버전 레코드, 저장 요청, 히스토리 항목
//!
//! `pub use X::*;`로 재공개하여 `crate::models::Version`처럼 짧게 접근합니다.

pub mod version;

pub use version::*;
