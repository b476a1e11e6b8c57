//! 회원가입 서비스 백엔드
//!
//! 이름, 이메일, 전화번호, 비밀번호를 받아 계정을 생성하는 HTTP 서비스입니다.
//! 입력 검증 순서와 상태 코드가 고정되어 있어, 같은 요청에는 항상 같은
//! 응답이 돌아갑니다.
//!
//! # Features
//!
//! - **회원가입**: `POST /create/user`, 필드 존재 → 전화번호 → 이메일 → 비밀번호 순 검증
//! - **중복 방지**: 이메일/전화번호 유니크 인덱스, 409 응답
//! - **저장소 선택**: MongoDB 또는 메모리 (`STORAGE_BACKEND`)
//! - **운영**: 헬스체크, rate limiting, CORS, 요청 로깅
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /create/user, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 본문 디코딩, 응답 작성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 회원가입 파이프라인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← AccountStore (MongoDB / Memory)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use signup_service::domain::dto::users::request::CreateUserRequest;
//! use signup_service::repositories::users::MemoryUserRepository;
//! use signup_service::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(MemoryUserRepository::new()));
//! let request = CreateUserRequest::new("Jane Doe", "jane@example.com", "+1234567890", "password123");
//!
//! let (status, body) = user_service.register(request).await.to_response();
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
