use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 공개 가능한 사용자 정보 (비밀번호, ID 제외)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub full_name: String,
    pub email: String,
    pub phone_no: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            full_name,
            email,
            phone_no,
            ..
        } = user;

        Self {
            full_name,
            email,
            phone_no,
        }
    }
}

/// 회원가입 응답 DTO
///
/// 실패 시에는 `{"message": "..."}`만, 성공 시에는 사용자 정보가
/// 같은 객체에 평탄화되어 포함됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,

    #[serde(flatten)]
    pub user: Option<UserResponse>,
}

impl SignupResponse {
    /// 메시지만 담은 응답
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user: None,
        }
    }

    /// 사용자 정보를 포함한 응답
    pub fn with_user(message: impl Into<String>, user: UserResponse) -> Self {
        Self {
            message: message.into(),
            user: Some(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_drops_password() {
        let user = User::new(
            "Jane Doe".to_string(),
            "jane.doe@example.com".to_string(),
            "+1234567890".to_string(),
            "password123".to_string(),
        );

        let body = serde_json::to_value(SignupResponse::with_user(
            "Data added successfully",
            UserResponse::from(user),
        ))
        .unwrap();

        assert_eq!(body["message"], "Data added successfully");
        assert_eq!(body["fullName"], "Jane Doe");
        assert_eq!(body["email"], "jane.doe@example.com");
        assert_eq!(body["phoneNo"], "+1234567890");
        assert!(body.get("password").is_none());
        assert!(body.get("_id").is_none());
    }

    #[test]
    fn test_message_only_body() {
        let body = serde_json::to_value(SignupResponse::message_only("Invalid Data!!")).unwrap();

        assert_eq!(body, serde_json::json!({ "message": "Invalid Data!!" }));
    }
}
