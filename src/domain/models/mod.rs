//! # Domain Models
//!
//! 저장되지 않는 도메인 값 객체들입니다.
//!
//! - [`registration`] - 회원가입 파이프라인 결과와 HTTP 응답 매핑

pub mod registration;

pub use registration::{RegistrationOutcome, ValidationFailure};
