//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성 시점에 저장소를 주입받으며, `web::Data`로 워커 간에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use signup_service::repositories::users::MemoryUserRepository;
//! use signup_service::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(MemoryUserRepository::new()));
//! ```

pub mod users;
