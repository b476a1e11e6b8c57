//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 회원가입 파이프라인 바깥에서 발생하는 실패(잘못된 요청 본문, DB 연결,
//! 인덱스 생성, 설정 오류 등)를 표현합니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 에러가
//! `{"message": ...}` 형태의 JSON 응답으로 변환됩니다.
//!
//! 파이프라인 자체의 결과(검증 실패, 중복, 저장소 오류)는 에러가 아니라
//! [`RegistrationOutcome`](crate::domain::models::registration::RegistrationOutcome)
//! 값으로 표현됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, ErrorContext};
//!
//! let options = ClientOptions::parse(&uri)
//!     .await
//!     .context("MongoDB URI 파싱 실패")?;
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::dto::users::response::SignupResponse;

/// 5xx 응답에 사용하는 고정 메시지 (내부 정보 노출 금지)
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문을 해석할 수 없음 (400 Bad Request)
    #[error("Invalid request body: {0}")]
    InvalidPayload(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 설정값 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출해도 되는 메시지
    ///
    /// 5xx 계열은 상세 내용 대신 고정 메시지만 반환합니다.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::InvalidPayload(_) => "Invalid request body",
            _ => UNEXPECTED_ERROR_MESSAGE,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러의 상세 내용은 서버 로그에만 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 내부 오류: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(SignupResponse::message_only(self.public_message()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    fn body_json(error: &AppError) -> serde_json::Value {
        let bytes = error.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_invalid_payload_response() {
        let error = AppError::InvalidPayload("expected value at line 1".to_string());

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&error)["message"], "Invalid request body");
    }

    #[test]
    fn test_database_error_hides_detail() {
        let error = AppError::DatabaseError("connection refused at 10.0.0.3".to_string());
        let body = body_json(&error);

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], UNEXPECTED_ERROR_MESSAGE);
        assert!(!body.to_string().contains("10.0.0.3"));
    }

    #[test]
    fn test_config_and_internal_errors_are_500() {
        let config = AppError::ConfigError("PORT".to_string());
        let internal = AppError::InternalError("boom".to_string());

        assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
