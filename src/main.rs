//! 회원가입 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. 저장소를 선택해 연결하고,
//! `POST /create/user`와 `GET /health`를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use signup_service::config::{Environment, RateLimitConfig, ServerConfig, StorageBackend};
use signup_service::db::Database;
use signup_service::errors::AppError;
use signup_service::repositories::users::{AccountStore, MemoryUserRepository, UserRepository};
use signup_service::routes::configure_all_routes;
use signup_service::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 회원가입 서비스 시작중... ({:?})", Environment::current());

    let store = initialize_store().await.map_err(|e| {
        error!("저장소 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let user_service = UserService::new(store);
    info!("✅ 저장소 준비 완료: {}", user_service.storage_backend());

    // HTTP 서버 시작
    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, 잘못된 rate limit 설정, 서버 실행 오류
async fn start_http_server(user_service: UserService) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("rate limit 설정이 올바르지 않습니다 (0 값 불가)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let user_service = web::Data::new(user_service);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 stderr로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경별 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=signup_service::services=debug cargo run
/// ```
fn init_logging() {
    let default_filter = Environment::current().default_log_filter();
    env_logger::init_from_env(Env::default().default_filter_or(default_filter));
}

/// `STORAGE_BACKEND` 설정에 따라 계정 저장소를 준비합니다
///
/// MongoDB를 쓰는 경우 연결 확인 후 유니크 인덱스를 생성합니다.
async fn initialize_store() -> Result<Arc<dyn AccountStore>, AppError> {
    let backend = StorageBackend::current()?;
    info!("저장소 선택: {}", backend.as_str());

    match backend {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::from_env().await?);
            let user_repo = UserRepository::new(database);
            user_repo.create_indexes().await?;

            Ok(Arc::new(user_repo))
        }
        StorageBackend::Memory => {
            info!("💾 메모리 저장소 사용 (재시작 시 데이터 초기화)");
            Ok(Arc::new(MemoryUserRepository::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 모든 Origin을 허용하고, 회원가입에 필요한 메서드와 헤더만 받습니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
