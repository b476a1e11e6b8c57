//! User Entity Implementation
//!
//! 회원가입으로 생성되는 계정 엔티티입니다.
//! MongoDB `users` 컬렉션의 문서 구조와 1:1로 대응합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::ValidatedSignup;

/// 사용자 엔티티
///
/// `email`과 `phone_no`는 컬렉션 전체에서 유일해야 하며,
/// 이 제약은 저장소(유니크 인덱스)가 보장합니다.
///
/// 비밀번호는 해싱 없이 입력값 그대로 저장됩니다. 운영 배포 전에는
/// 해싱을 추가해야 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub full_name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 전화번호 (unique)
    pub phone_no: String,
    /// 비밀번호
    pub password: String,
}

impl User {
    /// 저장 전 후보 레코드 생성 (`id`는 저장소가 부여)
    pub fn new(full_name: String, email: String, phone_no: String, password: String) -> Self {
        Self {
            id: None,
            full_name,
            email,
            phone_no,
            password,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

impl From<ValidatedSignup> for User {
    /// 네 필드를 그대로 복사합니다. 검증은 호출 전에 끝나 있어야 합니다.
    fn from(signup: ValidatedSignup) -> Self {
        let ValidatedSignup {
            full_name,
            email,
            phone_no,
            password,
        } = signup;

        Self::new(full_name, email, phone_no, password)
    }
}
