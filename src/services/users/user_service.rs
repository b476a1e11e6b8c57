//! # 사용자 관리 서비스 구현
//!
//! 회원가입 파이프라인을 구현합니다.
//!
//! ```text
//! CreateUserRequest
//!        │
//!        ▼
//! ┌──────────────────┐   누락      ┌──────────────────────────────┐
//! │ 1. 필드 존재 확인 │ ─────────▶ │ ValidationFailed(MissingData)│
//! └──────────────────┘            └──────────────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────┐   실패      ┌──────────────────────────────┐
//! │ 2~4. 형식 검증    │ ─────────▶ │ ValidationFailed(BadPhone |   │
//! │ 전화→이메일→비번  │            │   BadEmail | ShortPassword)   │
//! └──────────────────┘            └──────────────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ 5. 조립 + 저장    │ ── Duplicate ──▶ Conflict
//! │ AccountStore     │ ── Database ───▶ StoreError (로그 기록)
//! └──────────────────┘
//!        │ Ok
//!        ▼
//! Created(UserResponse)   ← 비밀번호 제외
//! ```
//!
//! 서비스는 상태를 가지지 않으며, 여러 워커 스레드에서 동시에 호출해도
//! 추가 동기화가 필요 없습니다. 유일성 보장은 저장소의 몫입니다.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, error, info, warn};

use crate::domain::{
    dto::users::{request::CreateUserRequest, response::UserResponse},
    entities::users::User,
    models::registration::{RegistrationOutcome, ValidationFailure},
};
use crate::repositories::users::{AccountStore, StoreError};

/// 회원가입 비즈니스 로직 서비스
///
/// 저장소는 생성 시점에 주입됩니다.
///
/// ```rust,ignore
/// let store: Arc<dyn AccountStore> = Arc::new(UserRepository::new(database));
/// let user_service = UserService::new(store);
///
/// let outcome = user_service.register(request).await;
/// let (status, body) = outcome.to_response();
/// ```
#[derive(Clone)]
pub struct UserService {
    /// 계정 저장소
    user_repo: Arc<dyn AccountStore>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn AccountStore>) -> Self {
        Self { user_repo }
    }

    /// 주입된 저장소 이름
    pub fn storage_backend(&self) -> &'static str {
        self.user_repo.backend_name()
    }

    /// 새 사용자 계정 등록
    ///
    /// 어떤 경우에도 에러를 반환하지 않고, 모든 경로를
    /// [`RegistrationOutcome`] 중 하나로 정리합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. 네 필드 존재 확인 → 실패 시 `MissingData`
    /// 2. 전화번호 형식 → `BadPhone`
    /// 3. 이메일 형식 → `BadEmail`
    /// 4. 비밀번호 길이 → `ShortPassword`
    /// 5. 엔티티 조립 후 저장
    /// 6. 저장 결과 매핑: 성공 → `Created`, 중복 → `Conflict`, 그 외 → `StoreError`
    pub async fn register(&self, request: CreateUserRequest) -> RegistrationOutcome {
        let start_time = Instant::now();

        let Some(form) = request.into_form() else {
            debug!("회원가입 거절: 필수 필드 누락");
            return RegistrationOutcome::ValidationFailed(ValidationFailure::MissingData);
        };

        let signup = match form.validate_formats() {
            Ok(signup) => signup,
            Err(failure) => {
                debug!("회원가입 거절: {}", failure);
                return RegistrationOutcome::ValidationFailed(failure);
            }
        };

        let candidate = User::from(signup);

        let outcome = match self.user_repo.insert(candidate).await {
            Ok(created) => {
                info!("✅ 사용자 생성: {}", created.id_string().unwrap_or_default());
                RegistrationOutcome::Created(UserResponse::from(created))
            }
            Err(StoreError::Duplicate(detail)) => {
                warn!("회원가입 중복: {}", detail);
                RegistrationOutcome::Conflict
            }
            Err(e @ StoreError::Database(_)) => {
                error!("회원가입 저장 실패: {}", e);
                RegistrationOutcome::StoreError
            }
        };

        debug!("Total user registration took: {:?}", start_time.elapsed());
        outcome
    }
}
