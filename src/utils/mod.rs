//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 필드 해석, 존재 여부 확인
//! - [`validators`] - 전화번호 / 이메일 / 비밀번호 형식 검증
//!
//! # Examples
//!
//! ```rust
//! use signup_service::utils::validators::{is_valid_email, is_valid_phone_number};
//!
//! assert!(is_valid_phone_number("+1234567890"));
//! assert!(!is_valid_email("invalid-email"));
//! ```

pub mod string_utils;
pub mod validators;
