//! # 회원가입 필드 검증기
//!
//! 전화번호, 이메일, 비밀번호 형식을 확인하는 순수 함수들입니다.
//! 모든 함수는 부작용이 없고 어떤 입력에도 패닉하지 않으며,
//! 형식이 맞지 않으면 `false`를 반환합니다.
//!
//! `validator` 크레이트의 `ValidationError`를 돌려주는 `validate_*` 함수도
//! 여기서 제공하며, 내부적으로 같은 predicate를 호출합니다.
//! 요청 필드에는 [`validate_text_field`]로 적용하여 문자열이 아닌 값은
//! 규칙과 무관하게 불일치로 처리합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::utils::string_utils::FieldValue;

/// 비밀번호 최소 길이 (UTF-16 코드 유닛 기준)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// 선택적 `+`, 숫자 하나, 숫자/공백/`-`/`(`/`)` 8~15자, 마지막 숫자
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?([0-9][0-9\s\-()]{8,15}[0-9])$").expect("phone regex is valid")
});

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// 전화번호 형식 검증
///
/// # 예제
///
/// ```rust
/// use signup_service::utils::validators::is_valid_phone_number;
///
/// assert!(is_valid_phone_number("+1234567890"));
/// assert!(is_valid_phone_number("555 (123) 4567"));
/// assert!(!is_valid_phone_number("invalidPhone"));
/// ```
pub fn is_valid_phone_number(phone_no: &str) -> bool {
    PHONE_REGEX.is_match(phone_no)
}

/// 이메일 형식 검증
///
/// `@` 앞뒤에 공백과 `@`가 없는 문자가 있어야 하고,
/// `@` 뒤에는 `.`으로 구분된 부분이 하나 이상 있어야 합니다.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// 비밀번호 길이 검증
///
/// 문자 구성과 무관하게 길이만 확인합니다. 길이는 기존 클라이언트와 같이
/// UTF-16 코드 유닛으로 셉니다 (BMP 밖의 문자는 2로 계산).
pub fn is_valid_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LENGTH
}

pub fn validate_phone_number(phone_no: &str) -> Result<(), ValidationError> {
    if is_valid_phone_number(phone_no) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone_number")
            .with_message("Invalid phone number format".into()))
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_email").with_message("Invalid email format".into()))
    }
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if is_valid_password(password) {
        Ok(())
    } else {
        Err(ValidationError::new("password_too_short").with_message("Password too short".into()))
    }
}

/// 요청 필드에 문자열 규칙을 적용하고, 통과하면 문자열을 돌려줍니다.
///
/// 문자열이 아닌 값은 `not_a_string` 오류가 됩니다.
pub fn validate_text_field(
    value: FieldValue,
    rule: fn(&str) -> Result<(), ValidationError>,
) -> Result<String, ValidationError> {
    match value {
        FieldValue::Text(text) => rule(&text).map(|()| text),
        FieldValue::Other(_) => Err(ValidationError::new("not_a_string")
            .with_message("Expected a string value".into())),
    }
}
