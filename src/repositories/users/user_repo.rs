//! # 사용자 리포지토리 구현 (MongoDB)
//!
//! `users` 컬렉션에 계정을 저장합니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 옵션 |
//! |------|----|------|
//! | `email_unique` | `email: 1` | unique |
//! | `phone_no_unique` | `phoneNo: 1` | unique |
//!
//! 중복 검사는 이 유니크 인덱스가 담당합니다. 삽입 시 서버가 돌려주는
//! duplicate key 오류(코드 11000)를 [`StoreError::Duplicate`]로 변환합니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    Collection, IndexModel,
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};

use super::{AccountStore, StoreError};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::AppError;

/// MongoDB duplicate key 오류 코드
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION_NAME)
    }

    /// 유니크 인덱스 생성
    ///
    /// 이미 같은 정의의 인덱스가 있으면 아무 일도 일어나지 않으므로
    /// 애플리케이션 시작 시마다 호출해도 안전합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let phone_no_index = IndexModel::builder()
            .keys(doc! { "phoneNo": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("phone_no_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, phone_no_index])
            .await
            .map_err(|e| AppError::DatabaseError(format!("인덱스 생성 실패: {}", e)))?;

        info!("✅ {} 컬렉션 유니크 인덱스 준비 완료", Self::COLLECTION_NAME);
        Ok(())
    }
}

#[async_trait]
impl AccountStore for UserRepository {
    async fn insert(&self, mut candidate: User) -> Result<User, StoreError> {
        let result = self
            .collection()
            .insert_one(&candidate)
            .await
            .map_err(classify_insert_error)?;

        candidate.id = result.inserted_id.as_object_id();
        debug!("사용자 문서 저장됨: {:?}", candidate.id_string());

        Ok(candidate)
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}

/// 삽입 오류를 중복 / 일반 오류로 분류
pub fn classify_insert_error(error: mongodb::error::Error) -> StoreError {
    if is_duplicate_key(error.kind.as_ref()) {
        StoreError::Duplicate(error.to_string())
    } else {
        StoreError::Database(error.to_string())
    }
}

fn is_duplicate_key(kind: &ErrorKind) -> bool {
    match kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_write_errors_are_not_duplicates() {
        let error = mongodb::error::Error::custom("socket closed");

        assert!(matches!(classify_insert_error(error), StoreError::Database(_)));
    }
}
