//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use cms_auth::jwt::decoder::JwtDecoder;
use cms_auth::jwt::encoder::JwtEncoder;
use cms_auth::password::hasher::PasswordHasher;
use cms_auth::password::validator::PasswordValidator;
use cms_core::config::AppConfig;
use cms_core::error::AppError;
use cms_core::traits::storage::StorageProvider;
use cms_database::repositories::content::ContentRepository;
use cms_database::repositories::menu::MenuRepository;
use cms_database::repositories::upload::UploadRepository;
use cms_database::repositories::user::UserRepository;
use cms_database::DatabasePool;
use cms_service::auth::service::AuthService;
use cms_service::content::service::ContentService;
use cms_service::menu::service::MenuService;
use cms_service::menu::tree::MenuTreeService;
use cms_service::upload::service::UploadService;
use cms_storage::local::LocalStorageProvider;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db: DatabasePool,
    /// JWT token decoder, used by the auth extractor.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Authentication service.
    pub auth_service: Arc<AuthService>,
    /// Menu CRUD service.
    pub menu_service: Arc<MenuService>,
    /// Menu tree and path resolution service.
    pub tree_service: Arc<MenuTreeService>,
    /// Content service.
    pub content_service: Arc<ContentService>,
    /// Upload service.
    pub upload_service: Arc<UploadService>,
}

impl AppState {
    /// Wires repositories, auth primitives, storage, and services into a
    /// ready-to-serve application state.
    pub async fn build(config: AppConfig, db: DatabasePool) -> Result<Self, AppError> {
        let pool = db.pool().clone();

        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let menu_repo = Arc::new(MenuRepository::new(pool.clone()));
        let content_repo = Arc::new(ContentRepository::new(pool.clone()));
        let upload_repo = Arc::new(UploadRepository::new(pool));

        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let storage: Arc<dyn StorageProvider> =
            Arc::new(LocalStorageProvider::new(&config.storage.upload_root).await?);

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            Arc::clone(&jwt_encoder),
            Arc::clone(&jwt_decoder),
            config.auth.clone(),
        ));
        let menu_service = Arc::new(MenuService::new(Arc::clone(&menu_repo)));
        let tree_service = Arc::new(MenuTreeService::new(Arc::clone(&menu_repo)));
        let content_service = Arc::new(ContentService::new(
            Arc::clone(&content_repo),
            Arc::clone(&menu_repo),
            Arc::clone(&tree_service),
        ));
        let upload_service = Arc::new(UploadService::new(
            Arc::clone(&upload_repo),
            storage,
            config.storage.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            db,
            jwt_decoder,
            auth_service,
            menu_service,
            tree_service,
            content_service,
            upload_service,
        })
    }
}
