//! # 사용자 생성 요청 DTO
//!
//! 회원가입 요청(`POST /create/user`)의 본문 구조를 정의합니다.
//!
//! 요청은 두 단계로 다뤄집니다.
//!
//! 1. [`CreateUserRequest`] - 클라이언트가 보낸 원본. 모든 필드가 빠질 수 있습니다.
//! 2. [`SignupForm`] - 네 필드가 모두 존재하는 요청. 형식 검증의 입력입니다.
//! 3. [`ValidatedSignup`] - 형식 검증을 통과한 요청. 엔티티 조립의 입력입니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 실패 시 |
//! |------|------|---------|
//! | 전체 | 네 필드 모두 존재, 빈 문자열 불가 | `MissingData` |
//! | `phoneNo` | 선택적 `+`, 숫자로 시작/끝, 10~17자 | `BadPhone` |
//! | `email` | `local@domain.tld` 형태, 공백 불가 | `BadEmail` |
//! | `password` | 8자 이상 (UTF-16 코드 유닛) | `ShortPassword` |
//!
//! 형식 규칙은 문자열에만 적용됩니다. `phoneNo`, `email`, `password`에 숫자나
//! 배열 같은 다른 타입이 오면 해당 규칙의 실패로 처리됩니다.
//! 본문이 배열이면 이름 있는 필드가 없으므로 빈 요청(`MissingData`)이 됩니다.
//!
//! 검증 순서는 존재 여부 → 전화번호 → 이메일 → 비밀번호로 고정되어 있으며,
//! 여러 규칙을 동시에 위반해도 항상 가장 앞의 실패만 보고됩니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "fullName": "Jane Doe",
//!   "email": "jane.doe@example.com",
//!   "phoneNo": "+1234567890",
//!   "password": "password123"
//! }
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use validator::ValidationError;

use crate::domain::models::registration::ValidationFailure;
use crate::utils::string_utils::{FieldValue, is_present};
use crate::utils::validators::{
    validate_email, validate_password, validate_phone_number, validate_text_field,
};

/// 회원가입 원본 요청
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateUserRequest {
    pub full_name: Option<FieldValue>,
    pub email: Option<FieldValue>,
    pub phone_no: Option<FieldValue>,
    pub password: Option<FieldValue>,
}

impl<'de> Deserialize<'de> for CreateUserRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(fields) => Ok(Self::from_fields(fields)),
            Value::Array(_) => Ok(Self::default()),
            other => Err(serde::de::Error::custom(format!(
                "expected a JSON object, found {}",
                other
            ))),
        }
    }
}

impl CreateUserRequest {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone_no: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: Some(FieldValue::Text(full_name.into())),
            email: Some(FieldValue::Text(email.into())),
            phone_no: Some(FieldValue::Text(phone_no.into())),
            password: Some(FieldValue::Text(password.into())),
        }
    }

    /// camelCase 키로 필드를 꺼냅니다. 나머지 키는 무시됩니다.
    fn from_fields(mut fields: Map<String, Value>) -> Self {
        let mut take = |key: &str| fields.remove(key).and_then(FieldValue::from_json);

        Self {
            full_name: take("fullName"),
            email: take("email"),
            phone_no: take("phoneNo"),
            password: take("password"),
        }
    }

    /// 네 필드가 모두 존재하는지 확인
    pub fn has_all_fields(&self) -> bool {
        is_present(&self.full_name)
            && is_present(&self.email)
            && is_present(&self.phone_no)
            && is_present(&self.password)
    }

    /// 필드 존재 여부를 확인하고 [`SignupForm`]으로 변환합니다.
    ///
    /// 하나라도 없거나 빈 문자열이면 `None`을 반환합니다.
    pub fn into_form(self) -> Option<SignupForm> {
        if !self.has_all_fields() {
            return None;
        }

        Some(SignupForm {
            full_name: self.full_name?,
            email: self.email?,
            phone_no: self.phone_no?,
            password: self.password?,
        })
    }
}

/// 네 필드가 모두 존재하는 회원가입 요청
#[derive(Debug, Clone, PartialEq)]
pub struct SignupForm {
    pub full_name: FieldValue,
    pub email: FieldValue,
    pub phone_no: FieldValue,
    pub password: FieldValue,
}

/// 형식 검증을 통과한 회원가입 요청
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSignup {
    pub full_name: String,
    pub email: String,
    pub phone_no: String,
    pub password: String,
}

impl SignupForm {
    /// 전화번호 → 이메일 → 비밀번호 순으로 검증하고, 첫 실패에서 멈춥니다.
    ///
    /// `fullName`은 형식 규칙이 없으며, 문자열이 아니면 JSON 텍스트로 저장됩니다.
    pub fn validate_formats(self) -> Result<ValidatedSignup, ValidationFailure> {
        let phone_no = validate_text_field(self.phone_no, validate_phone_number)
            .map_err(rejected(ValidationFailure::BadPhone))?;
        let email = validate_text_field(self.email, validate_email)
            .map_err(rejected(ValidationFailure::BadEmail))?;
        let password = validate_text_field(self.password, validate_password)
            .map_err(rejected(ValidationFailure::ShortPassword))?;

        Ok(ValidatedSignup {
            full_name: self.full_name.into_text(),
            email,
            phone_no,
            password,
        })
    }
}

fn rejected(failure: ValidationFailure) -> impl FnOnce(ValidationError) -> ValidationFailure {
    move |e| {
        log::debug!("형식 검증 실패 ({}): {}", e.code, failure);
        failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest::new("Jane Doe", "jane.doe@example.com", "+1234567890", "password123")
    }

    fn all_bad() -> SignupForm {
        SignupForm {
            full_name: FieldValue::from("X"),
            email: FieldValue::from("invalid-email"),
            phone_no: FieldValue::from("invalidPhone"),
            password: FieldValue::from("short"),
        }
    }

    #[test]
    fn test_deserialize_camel_case_body() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"{"fullName":"Jane Doe","email":"jane.doe@example.com","phoneNo":"+1234567890","password":"password123"}"#,
        )
        .unwrap();

        assert_eq!(request, valid_request());
    }

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"fullName":"Incomplete User","email":"incomplete.user@example.com"}"#)
                .unwrap();

        assert_eq!(request.phone_no, None);
        assert_eq!(request.password, None);
        assert!(!request.has_all_fields());
        assert!(request.into_form().is_none());
    }

    #[test]
    fn test_array_body_is_empty_request() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"["Jane Doe","jane.doe@example.com","+1234567890","password123"]"#,
        )
        .unwrap();

        assert_eq!(request, CreateUserRequest::default());
        assert!(request.into_form().is_none());
    }

    #[test]
    fn test_scalar_body_is_rejected() {
        assert!(serde_json::from_str::<CreateUserRequest>(r#""Jane Doe""#).is_err());
        assert!(serde_json::from_str::<CreateUserRequest>("42").is_err());
        assert!(serde_json::from_str::<CreateUserRequest>("null").is_err());
    }

    #[test]
    fn test_non_string_values_keep_their_type() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"{"fullName":"Jane","email":"jane@example.com","phoneNo":"+1234567890","password":123456789}"#,
        )
        .unwrap();

        assert_eq!(request.password, Some(FieldValue::Other(json!(123456789))));
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut request = valid_request();
        request.full_name = Some(FieldValue::from(""));

        assert!(request.into_form().is_none());
    }

    #[test]
    fn test_validated_signup_keeps_values_verbatim() {
        let mut request = valid_request();
        request.full_name = Some(FieldValue::from("  Jane  "));

        let signup = request.into_form().unwrap().validate_formats().unwrap();
        assert_eq!(signup.full_name, "  Jane  ");
        assert_eq!(signup.password, "password123");
    }

    #[test]
    fn test_format_checks_run_in_order() {
        assert_eq!(all_bad().validate_formats(), Err(ValidationFailure::BadPhone));

        let bad_email_and_password = SignupForm {
            phone_no: FieldValue::from("+1234567890"),
            ..all_bad()
        };
        assert_eq!(
            bad_email_and_password.validate_formats(),
            Err(ValidationFailure::BadEmail)
        );

        let bad_password = SignupForm {
            phone_no: FieldValue::from("+1234567890"),
            email: FieldValue::from("jane.doe@example.com"),
            ..all_bad()
        };
        assert_eq!(bad_password.validate_formats(), Err(ValidationFailure::ShortPassword));
    }

    #[test]
    fn test_non_string_fields_fail_their_rule() {
        let form = valid_request().into_form().unwrap();

        let numeric_password = SignupForm {
            password: FieldValue::Other(json!(123456789)),
            ..form.clone()
        };
        assert_eq!(numeric_password.validate_formats(), Err(ValidationFailure::ShortPassword));

        let numeric_phone = SignupForm {
            phone_no: FieldValue::Other(json!(12345678901u64)),
            ..form.clone()
        };
        assert_eq!(numeric_phone.validate_formats(), Err(ValidationFailure::BadPhone));

        let object_email = SignupForm {
            email: FieldValue::Other(json!({"address": "jane@example.com"})),
            ..form.clone()
        };
        assert_eq!(object_email.validate_formats(), Err(ValidationFailure::BadEmail));

        let numeric_name = SignupForm {
            full_name: FieldValue::Other(json!(42)),
            ..form
        };
        assert_eq!(numeric_name.validate_formats().unwrap().full_name, "42");
    }
}
