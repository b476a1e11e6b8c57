//! # User Registration HTTP Handlers
//!
//! 회원가입 엔드포인트를 처리하는 핸들러입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/create/user` | 새 사용자 계정 생성 |
//!
//! ## 상태 코드 매핑
//!
//! | 결과 | 상태 코드 | `message` |
//! |------|-----------|-----------|
//! | 생성 성공 | 200 | `Data added successfully` (+ `fullName`, `email`, `phoneNo`) |
//! | 필드 누락 | 401 | `Invalid Data!!` |
//! | 전화번호 형식 | 400 | `Invalid phone number format` |
//! | 이메일 형식 | 400 | `Invalid email format` |
//! | 비밀번호 길이 | 400 | `Password too short` |
//! | 중복 | 409 | `Email or phone number already exists` |
//! | 저장소 오류 | 500 | `An unexpected error occurred. Please try again later` |
//! | 깨진 JSON, 객체/배열이 아닌 본문 | 400 | `Invalid request body` |
//!
//! 성공 코드가 201이 아닌 200인 점, 필드 누락이 401인 점은 기존 클라이언트와의
//! 호환을 위해 유지됩니다.

use actix_web::{HttpResponse, error::JsonPayloadError, post, web};
use log::debug;

use crate::domain::dto::users::request::CreateUserRequest;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "fullName": "Jane Doe",
///   "email": "jane.doe@example.com",
///   "phoneNo": "+1234567890",
///   "password": "password123"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "message": "Data added successfully",
///   "fullName": "Jane Doe",
///   "email": "jane.doe@example.com",
///   "phoneNo": "+1234567890"
/// }
/// ```
///
/// 비밀번호와 저장소 ID는 어떤 응답에도 포함되지 않습니다.
///
/// JSON이 아닌 본문(Content-Type 불일치)과 JSON 배열은 빈 요청으로 취급되어
/// 401이 되고, JSON 문법 오류나 최상위 스칼라 값은 파이프라인 실행 전에
/// 400으로 거절됩니다.
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:3040/create/user \
///   -H "Content-Type: application/json" \
///   -d '{"fullName":"Jane Doe","email":"jane.doe@example.com","phoneNo":"+1234567890","password":"password123"}'
/// ```
#[post("/create/user")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: Result<web::Json<CreateUserRequest>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let request = match payload {
        Ok(json) => json.into_inner(),
        Err(e) => match e.as_error::<JsonPayloadError>() {
            Some(JsonPayloadError::ContentType) => {
                debug!("JSON이 아닌 본문, 빈 요청으로 처리");
                CreateUserRequest::default()
            }
            _ => return Err(AppError::InvalidPayload(e.to_string())),
        },
    };

    let outcome = service.register(request).await;
    let (status, body) = outcome.to_response();

    Ok(HttpResponse::build(status).json(body))
}
