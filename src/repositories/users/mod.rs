//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! ## 저장소 계약
//!
//! [`AccountStore::insert`]는 원자적이어야 합니다. 후보 레코드가 두 유니크 제약
//! (`email`, `phoneNo`)을 모두 만족한 상태로 저장되거나, 아무것도 저장되지
//! 않아야 합니다. 제약 위반은 반드시 [`StoreError::Duplicate`]로 보고하여
//! 파이프라인이 일반 오류와 구분할 수 있게 합니다.
//!
//! 파이프라인은 저장 전에 중복 여부를 미리 조회하지 않습니다. 동시 요청에서의
//! 유일성은 전적으로 저장소가 보장합니다.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::users::User;

pub mod memory_repo;
pub mod user_repo;

pub use memory_repo::MemoryUserRepository;
pub use user_repo::UserRepository;

/// 저장소 삽입 실패
#[derive(Debug, Error)]
pub enum StoreError {
    /// 유니크 제약 위반 (이메일 또는 전화번호 중복)
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    /// 그 외 모든 저장소 오류
    #[error("Database error: {0}")]
    Database(String),
}

/// 계정 저장소 계약
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 후보 레코드를 저장하고, 저장소가 부여한 ID를 포함한 계정을 반환합니다.
    async fn insert(&self, candidate: User) -> Result<User, StoreError>;

    /// 로그와 헬스체크에 표시할 저장소 이름
    fn backend_name(&self) -> &'static str;
}
