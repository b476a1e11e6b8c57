//! # Domain Layer
//!
//! 회원가입 서비스의 도메인 타입을 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/   # 영구 저장되는 엔티티 (User)
//! ├── dto/        # HTTP 요청/응답 구조
//! └── models/     # 파이프라인 결과 (RegistrationOutcome)
//! ```

pub mod entities;
pub mod dto;
pub mod models;
