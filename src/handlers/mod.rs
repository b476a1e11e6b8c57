//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 회원가입 파이프라인                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - AccountStore 구현              ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                 ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 본문을 디코딩하고 서비스를 호출한 뒤, 결과를 상태 코드와
//! JSON 본문으로 옮기는 일만 합니다. 검증과 저장 로직은 서비스 계층에 있습니다.

pub mod users;
