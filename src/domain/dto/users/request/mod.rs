//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조 (실패 시 400 `Invalid request body`)
//! 2. **존재 검증**: 네 필드 모두 존재 (실패 시 401 `Invalid Data!!`)
//! 3. **형식 검증**: 전화번호 → 이메일 → 비밀번호 (실패 시 400)
//!
//! 중복 계정 여부는 DTO가 아니라 저장소의 유니크 인덱스가 판단합니다.

pub mod create_user;

pub use create_user::{CreateUserRequest, SignupForm, ValidatedSignup};
