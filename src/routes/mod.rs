//! API 라우트 설정 모듈
//!
//! 회원가입 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/health` | [`health_check`] |
//! | `POST` | `/create/user` | [`handlers::users::create_user`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::handlers;
use crate::services::users::UserService;

/// JSON 본문 최대 크기 (바이트)
pub const JSON_PAYLOAD_LIMIT: usize = 64 * 1024;

/// 모든 라우트를 설정합니다
///
/// `UserService`는 호출 측에서 `app_data`로 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(JSON_PAYLOAD_LIMIT));

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// 회원가입은 인증 없이 접근 가능합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::create_user);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "signup_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "storage": "mongodb"
/// }
/// ```
#[get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": service.storage_backend(),
    }))
}
