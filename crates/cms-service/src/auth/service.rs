//! Login, token refresh, and password management.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use cms_auth::jwt::decoder::JwtDecoder;
use cms_auth::jwt::encoder::{JwtEncoder, TokenPair};
use cms_auth::password::hasher::PasswordHasher;
use cms_auth::password::validator::PasswordValidator;
use cms_core::config::AuthConfig;
use cms_core::error::AppError;
use cms_database::repositories::user::UserRepository;
use cms_entity::user::model::CreateUser;
use cms_entity::user::{User, UserRole};

use crate::context::RequestContext;

/// Handles staff authentication and credential changes.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher (Argon2id).
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// JWT token encoder.
    encoder: Arc<JwtEncoder>,
    /// JWT token decoder.
    decoder: Arc<JwtDecoder>,
    /// Auth configuration (seeded admin credentials).
    config: AuthConfig,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// Freshly issued token pair.
    pub tokens: TokenPair,
}

/// Result of a successful token refresh.
#[derive(Debug, Clone)]
pub struct RefreshResult {
    /// The user the refresh token belongs to.
    pub user: User,
    /// New access token.
    pub access_token: String,
    /// New access token expiration.
    pub access_expires_at: DateTime<Utc>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        config: AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
            decoder,
            config,
        }
    }

    /// Authenticates a user by username and password and issues tokens.
    ///
    /// A missing user and a wrong password produce the same error so the
    /// response does not leak which usernames exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        if !user.is_active {
            return Err(AppError::unauthorized("Account is disabled"));
        }

        self.user_repo.touch_last_login(user.id).await?;

        let tokens = self
            .encoder
            .generate_token_pair(user.id, user.role, &user.username)?;

        info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(LoginResult { user, tokens })
    }

    /// Issues a new access token from a valid refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResult, AppError> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;

        if !user.is_active {
            return Err(AppError::unauthorized("Account is disabled"));
        }

        let (access_token, access_expires_at) =
            self.encoder
                .generate_access_token(user.id, user.role, &user.username)?;

        Ok(RefreshResult {
            user,
            access_token,
            access_expires_at,
        })
    }

    /// Returns the profile of the authenticated user.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("User no longer exists"))
    }

    /// Changes the authenticated user's password.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;

        if !self
            .hasher
            .verify_password(old_password, &user.password_hash)?
        {
            return Err(AppError::unauthorized("Current password is incorrect"));
        }

        self.validator.validate_not_same(old_password, new_password)?;
        self.validator.validate(new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.user_repo.update_password(user.id, &new_hash).await?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }

    /// Creates the initial administrator account if it does not exist yet.
    pub async fn seed_admin(&self) -> Result<(), AppError> {
        if self
            .user_repo
            .find_by_username(&self.config.initial_admin_username)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let password_hash = self.hasher.hash_password(&self.config.initial_admin_password)?;
        let admin = self
            .user_repo
            .create(&CreateUser {
                username: self.config.initial_admin_username.clone(),
                password_hash,
                display_name: Some("Administrator".to_string()),
                role: UserRole::Admin,
            })
            .await?;

        info!(username = %admin.username, "Initial admin user created");
        Ok(())
    }
}
