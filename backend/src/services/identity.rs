//! Account creation, login and token refresh
//!
//! Sign-up writes the account and the onboarding profile in one call; the
//! profile is the record the rest of the app reads. A sign-up whose profile
//! write fails removes the account again so the email can be reused.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{AccountRecord, AccountRepository, KvStore, ProfileRepository};
use chrono::Utc;
use fitkro_shared::validation::validate_signup;
use fitkro_shared::{
    AccountSummary, AuthTokens, LoginRequest, SignupRequest, SignupResponse, UserProfile,
};
use tracing::info;
use uuid::Uuid;

pub struct IdentityService;

impl IdentityService {
    /// Create an account with its profile and sign the user in
    pub async fn signup(
        store: &dyn KvStore,
        jwt: &JwtService,
        req: SignupRequest,
    ) -> Result<SignupResponse, ApiError> {
        validate_signup(&req)?;

        let password_hash = PasswordService::hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let now = Utc::now();
        let email = req.email.trim().to_string();
        let account = AccountRecord {
            id: Uuid::new_v4(),
            email: email.clone(),
            name: req.name.trim().to_string(),
            password_hash,
            created_at: now,
        };

        let created = AccountRepository::create(store, &account)
            .await
            .map_err(ApiError::Internal)?;
        if !created {
            return Err(ApiError::Validation(
                "A user with this email address has already been registered".to_string(),
            ));
        }

        let fields = req.profile;
        let profile = UserProfile {
            user_id: account.id,
            name: account.name.clone(),
            email,
            gender: fields.gender,
            age: fields.age,
            height: fields.height,
            weight: fields.weight,
            goal: fields.goal,
            activity_level: fields.activity_level,
            diet_preference: fields.diet_preference,
            created_at: now,
            updated_at: None,
        };
        if let Err(e) = ProfileRepository::save(store, &profile).await {
            AccountRepository::remove(store, &account).await;
            return Err(ApiError::Internal(e));
        }

        let tokens = jwt.issue_tokens(account.id).map_err(ApiError::Internal)?;

        info!(user_id = %account.id, "Account created");

        Ok(SignupResponse {
            user: summary(&account),
            tokens,
        })
    }

    pub async fn login(
        store: &dyn KvStore,
        jwt: &JwtService,
        req: LoginRequest,
    ) -> Result<AuthTokens, ApiError> {
        let account = AccountRepository::find_by_email(store, &req.email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        let valid = PasswordService::verify_async(req.password, account.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;
        if !valid {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        jwt.issue_tokens(account.id).map_err(ApiError::Internal)
    }

    /// Trade a refresh token for a new pair
    pub async fn refresh(
        store: &dyn KvStore,
        jwt: &JwtService,
        refresh_token: &str,
    ) -> Result<AuthTokens, ApiError> {
        let user_id = jwt
            .validate_refresh_token(refresh_token)
            .and_then(|claims| claims.user_id())
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

        AccountRepository::find_by_id(store, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

        jwt.issue_tokens(user_id).map_err(ApiError::Internal)
    }

    pub async fn me(store: &dyn KvStore, user_id: Uuid) -> Result<AccountSummary, ApiError> {
        let account = AccountRepository::find_by_id(store, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
        Ok(summary(&account))
    }
}

fn summary(account: &AccountRecord) -> AccountSummary {
    AccountSummary {
        id: account.id,
        email: account.email.clone(),
        name: account.name.clone(),
    }
}
