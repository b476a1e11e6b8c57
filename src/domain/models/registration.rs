//! # 회원가입 결과 모델
//!
//! 회원가입 파이프라인 한 번의 실행 결과와, 그 결과를 HTTP 응답으로
//! 바꾸는 매핑을 정의합니다.
//!
//! | 결과 | 상태 코드 | 메시지 |
//! |------|-----------|--------|
//! | `ValidationFailed(MissingData)` | 401 | "Invalid Data!!" |
//! | `ValidationFailed(BadPhone)` | 400 | "Invalid phone number format" |
//! | `ValidationFailed(BadEmail)` | 400 | "Invalid email format" |
//! | `ValidationFailed(ShortPassword)` | 400 | "Password too short" |
//! | `Created(user)` | 200 | "Data added successfully" + 사용자 정보 |
//! | `Conflict` | 409 | "Email or phone number already exists" |
//! | `StoreError` | 500 | "An unexpected error occurred. Please try again later" |

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::dto::users::response::{SignupResponse, UserResponse};
use crate::errors::UNEXPECTED_ERROR_MESSAGE;

pub const CREATED_MESSAGE: &str = "Data added successfully";
pub const CONFLICT_MESSAGE: &str = "Email or phone number already exists";

/// 검증 단계에서 실패한 규칙
///
/// `Display` 출력이 그대로 응답 메시지가 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// 필수 필드 누락 또는 빈 값
    #[error("Invalid Data!!")]
    MissingData,

    #[error("Invalid phone number format")]
    BadPhone,

    #[error("Invalid email format")]
    BadEmail,

    #[error("Password too short")]
    ShortPassword,
}

impl ValidationFailure {
    pub fn status(&self) -> StatusCode {
        match self {
            ValidationFailure::MissingData => StatusCode::UNAUTHORIZED,
            ValidationFailure::BadPhone
            | ValidationFailure::BadEmail
            | ValidationFailure::ShortPassword => StatusCode::BAD_REQUEST,
        }
    }
}

/// 회원가입 파이프라인 실행 결과
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// 계정 생성 성공 (공개 필드만 보관)
    Created(UserResponse),
    /// 필드 누락 또는 형식 오류
    ValidationFailed(ValidationFailure),
    /// 이메일 또는 전화번호 중복
    Conflict,
    /// 그 외 저장소 오류 (상세 내용은 로그에만 기록됨)
    StoreError,
}

impl RegistrationOutcome {
    pub fn status(&self) -> StatusCode {
        match self {
            RegistrationOutcome::Created(_) => StatusCode::OK,
            RegistrationOutcome::ValidationFailed(failure) => failure.status(),
            RegistrationOutcome::Conflict => StatusCode::CONFLICT,
            RegistrationOutcome::StoreError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 결과를 (상태 코드, 응답 본문)으로 변환합니다.
    pub fn to_response(&self) -> (StatusCode, SignupResponse) {
        let body = match self {
            RegistrationOutcome::Created(user) => {
                SignupResponse::with_user(CREATED_MESSAGE, user.clone())
            }
            RegistrationOutcome::ValidationFailed(failure) => {
                SignupResponse::message_only(failure.to_string())
            }
            RegistrationOutcome::Conflict => SignupResponse::message_only(CONFLICT_MESSAGE),
            RegistrationOutcome::StoreError => {
                SignupResponse::message_only(UNEXPECTED_ERROR_MESSAGE)
            }
        };

        (self.status(), body)
    }

    pub fn is_created(&self) -> bool {
        matches!(self, RegistrationOutcome::Created(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> UserResponse {
        UserResponse {
            full_name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone_no: "+1234567890".to_string(),
        }
    }

    #[test]
    fn test_validation_failures_map_to_status_and_message() {
        let cases = [
            (ValidationFailure::MissingData, 401, "Invalid Data!!"),
            (ValidationFailure::BadPhone, 400, "Invalid phone number format"),
            (ValidationFailure::BadEmail, 400, "Invalid email format"),
            (ValidationFailure::ShortPassword, 400, "Password too short"),
        ];

        for (failure, status, message) in cases {
            let (code, body) = RegistrationOutcome::ValidationFailed(failure).to_response();
            assert_eq!(code.as_u16(), status);
            assert_eq!(body, SignupResponse::message_only(message));
        }
    }

    #[test]
    fn test_created_maps_to_200_with_public_fields() {
        let (code, body) = RegistrationOutcome::Created(jane()).to_response();

        assert_eq!(code, StatusCode::OK);
        assert_eq!(body.message, "Data added successfully");
        assert_eq!(body.user, Some(jane()));
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let (code, body) = RegistrationOutcome::Conflict.to_response();

        assert_eq!(code, StatusCode::CONFLICT);
        assert_eq!(body.message, "Email or phone number already exists");
        assert!(body.user.is_none());
    }

    #[test]
    fn test_store_error_maps_to_opaque_500() {
        let (code, body) = RegistrationOutcome::StoreError.to_response();

        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body.message,
            "An unexpected error occurred. Please try again later"
        );
    }
}
