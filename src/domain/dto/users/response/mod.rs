//! # 사용자 관련 응답 DTO 모듈
//!
//! 모든 응답은 `message` 필드를 가지며, 가입 성공 시에만
//! `fullName`, `email`, `phoneNo`가 함께 포함됩니다.
//! 비밀번호와 내부 ID는 어떤 응답에도 포함되지 않습니다.

pub mod user_response;

pub use user_response::{SignupResponse, UserResponse};
