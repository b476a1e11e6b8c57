//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 회원가입 파이프라인은 [`AccountStore`](users::AccountStore) trait에만 의존하며,
//! 실제 저장소는 애플리케이션 시작 시 주입됩니다.
//!
//! - [`UserRepository`](users::UserRepository) - MongoDB `users` 컬렉션
//! - [`MemoryUserRepository`](users::MemoryUserRepository) - 프로세스 메모리
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{AccountStore, MemoryUserRepository};
//!
//! let store: Arc<dyn AccountStore> = Arc::new(MemoryUserRepository::new());
//! let created = store.insert(candidate).await?;
//! ```

pub mod users;
