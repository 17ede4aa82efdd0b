//! Account management: signup, login, profile, and the seeded admin.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use plage_auth::{JwtEncoder, PasswordHasher};
use plage_core::config::auth::AuthConfig;
use plage_core::config::seed::SeedConfig;
use plage_core::{AppError, AppResult};
use plage_database::repositories::UserRepository;
use plage_entity::user::{CreateUser, UpdateProfile, User, UserRole};

use crate::context::RequestContext;

/// A new customer account request.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// An authenticated account together with its fresh bearer token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Service for account registration, login, and profile management.
pub struct UserService {
    users: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<JwtEncoder>,
    password_min_length: usize,
}

impl UserService {
    pub fn new(
        users: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<JwtEncoder>,
        auth_config: &AuthConfig,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            password_min_length: auth_config.password_min_length,
        }
    }

    /// Register a new customer account and log it in.
    pub async fn signup(&self, request: SignupRequest) -> AppResult<AuthSession> {
        let email = request.email.trim().to_lowercase();
        if email.is_empty() || request.password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }
        if !email.contains('@') {
            return Err(AppError::validation("Invalid email address"));
        }
        if request.password.chars().count() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(
                "An account with this email already exists",
            ));
        }

        let password_hash = self.hasher.hash_password(&request.password)?;
        let user = self
            .users
            .create(&CreateUser {
                email,
                password_hash,
                first_name: request.first_name,
                last_name: request.last_name,
                phone: request.phone,
                role: UserRole::Customer,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "Account created");
        self.open_session(user)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown email and wrong password come back as the same error, so
    /// the response does not reveal which half was wrong.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let invalid = || AppError::authentication("Invalid email or password");

        let user = self
            .users
            .find_by_email(email.trim())
            .await?
            .ok_or_else(invalid)?;
        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(invalid());
        }

        info!(user_id = %user.id, "User logged in");
        self.open_session(user)
    }

    /// The calling user's own account record.
    pub async fn profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User account no longer exists"))
    }

    /// Update the calling user's contact details.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        changes: UpdateProfile,
    ) -> AppResult<User> {
        let user = self.users.update_profile(ctx.user_id, &changes).await?;
        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }

    /// Create the configured administrator account if it does not exist.
    ///
    /// Runs once at startup. An already-present account is left exactly
    /// as it is, so a changed seed password never overwrites a live one.
    pub async fn seed_admin(&self, seed: &SeedConfig) -> AppResult<()> {
        let Some((email, password)) = seed.admin_credentials() else {
            debug!("No admin account configured for seeding");
            return Ok(());
        };
        if self.users.find_by_email(email).await?.is_some() {
            debug!(email, "Seed admin account already present");
            return Ok(());
        }

        let password_hash = self.hasher.hash_password(password)?;
        let admin = self
            .users
            .create(&CreateUser {
                email: email.to_lowercase(),
                password_hash,
                first_name: Some("Admin".to_string()),
                last_name: None,
                phone: None,
                role: UserRole::Admin,
            })
            .await?;

        info!(user_id = %admin.id, email = %admin.email, "Seeded administrator account");
        Ok(())
    }

    fn open_session(&self, user: User) -> AppResult<AuthSession> {
        let issued = self.tokens.issue(&user)?;
        Ok(AuthSession {
            user,
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}
