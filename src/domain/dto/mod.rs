//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 데이터 구조입니다.
//! 엔티티([`crate::domain::entities`])와 분리하여 비밀번호 같은
//! 민감 정보가 응답으로 새어 나가지 않도록 합니다.

pub mod users;
