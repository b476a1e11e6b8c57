//! # 문자열 유틸리티
//!
//! 요청 본문의 필드를 관대하게 해석하고, 필수 필드의 존재 여부를
//! 확인하는 공통 함수들입니다.

use serde_json::Value;

/// 요청 필드 값
///
/// 문자열이 아닌 값도 존재 여부 판단에는 참여하지만, 형식 검증에서는
/// 항상 불일치로 처리되도록 원래 타입을 유지합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// JSON 문자열 (trim 하지 않음)
    Text(String),
    /// 문자열이 아닌 값 (`true`, 0이 아닌 숫자, 배열, 객체)
    Other(Value),
}

impl FieldValue {
    /// JSON 값을 요청 필드로 변환
    ///
    /// | JSON 값 | 결과 |
    /// |---------|------|
    /// | `null`, `false`, `0` | `None` (값이 없는 것으로 취급) |
    /// | `"..."` | `Some(Text(원문 그대로))` |
    /// | `true`, 0이 아닌 숫자, 배열, 객체 | `Some(Other(값))` |
    ///
    /// # 예제
    /// ```rust
    /// use serde_json::json;
    /// use signup_service::utils::string_utils::FieldValue;
    ///
    /// assert_eq!(FieldValue::from_json(json!("Jane")), Some(FieldValue::from("Jane")));
    /// assert_eq!(FieldValue::from_json(json!(0)), None);
    /// assert_eq!(FieldValue::from_json(json!(7)), Some(FieldValue::Other(json!(7))));
    /// ```
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null | Value::Bool(false) => None,
            Value::String(text) => Some(FieldValue::Text(text)),
            Value::Number(ref number) if number.as_f64() == Some(0.0) => None,
            other => Some(FieldValue::Other(other)),
        }
    }

    /// 값이 실제로 존재하는지 확인 (빈 문자열은 값이 없는 것으로 취급)
    ///
    /// 공백 문자열은 값이 있는 것으로 보고, 형식 검증 단계에서 판단합니다.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Other(_) => true,
        }
    }

    /// 문자열 값이면 그대로 반환
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Other(_) => None,
        }
    }

    /// 저장용 텍스트로 변환 (문자열이 아닌 값은 JSON 텍스트)
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Other(value) => value.to_string(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

/// 선택적 필드가 값을 가지고 있는지 확인
///
/// # 예제
/// ```rust
/// use signup_service::utils::string_utils::{FieldValue, is_present};
///
/// assert!(is_present(&Some(FieldValue::from("   "))));
/// assert!(!is_present(&Some(FieldValue::from(""))));
/// assert!(!is_present(&None));
/// ```
pub fn is_present(value: &Option<FieldValue>) -> bool {
    value.as_ref().is_some_and(FieldValue::is_present)
}
