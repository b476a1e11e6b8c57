//! # Configuration Module
//!
//! 회원가입 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, `.env.dev` / `.env.prod` 파일은
//! `main.rs`에서 `PROFILE` 값에 따라 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 저장소, Rate Limiting 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3040"
//! export HTTP_WORKERS="4"
//!
//! # 저장소 설정 (mongodb | memory)
//! export STORAGE_BACKEND="mongodb"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="signup_dev"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;

pub use data_config::*;
