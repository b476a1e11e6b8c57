//! 사용자 관리 서비스 모듈
//!
//! 회원가입 파이프라인(필드 존재 확인 → 형식 검증 → 저장 → 결과 매핑)을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use signup_service::services::users::UserService;
//! use signup_service::domain::dto::users::request::CreateUserRequest;
//!
//! let request = CreateUserRequest::new("Jane Doe", "jane@example.com", "+1234567890", "password123");
//! let outcome = user_service.register(request).await;
//! ```

pub mod user_service;

pub use user_service::UserService;
