//! In-memory user repository.
//!
//! MongoDB 없이 동작하는 저장소입니다. 테스트와 로컬 실행(`STORAGE_BACKEND=memory`)에
//! 사용되며, 재시작하면 데이터가 사라집니다.
//!
//! 중복 확인과 삽입은 같은 잠금 안에서 수행되므로, 동시에 같은 이메일로
//! 가입해도 하나만 성공합니다.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{AccountStore, StoreError};
use crate::domain::entities::users::User;

#[derive(Debug, Default)]
struct MemoryState {
    users: Vec<User>,
    emails: HashSet<String>,
    phone_numbers: HashSet<String>,
}

/// 메모리 기반 사용자 저장소
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    state: Mutex<MemoryState>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 계정 수
    pub fn count(&self) -> usize {
        self.state.lock().map(|state| state.users.len()).unwrap_or(0)
    }

    /// 이메일로 계정 조회
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let state = self.state.lock().ok()?;
        state.users.iter().find(|user| user.email == email).cloned()
    }
}

#[async_trait]
impl AccountStore for MemoryUserRepository {
    async fn insert(&self, mut candidate: User) -> Result<User, StoreError> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| StoreError::Database(format!("memory store lock poisoned: {}", e)))?;

        if state.emails.contains(&candidate.email) {
            return Err(StoreError::Duplicate(format!("email: {}", candidate.email)));
        }

        if state.phone_numbers.contains(&candidate.phone_no) {
            return Err(StoreError::Duplicate(format!("phoneNo: {}", candidate.phone_no)));
        }

        candidate.id = Some(ObjectId::new());
        state.emails.insert(candidate.email.clone());
        state.phone_numbers.insert(candidate.phone_no.clone());
        state.users.push(candidate.clone());

        Ok(candidate)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
