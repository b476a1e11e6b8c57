//! # Domain Entities
//!
//! 저장소에 영구 저장되는 도메인 엔티티들입니다.
//!
//! - [`users`] - 회원가입으로 생성되는 사용자 계정

pub mod users;
