use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Account, LoginInput, RegisterInput};
use super::repository::AccountRepository;
use crate::errors::ServiceError;

/// Account business service independent of web framework.
/// Stateless beyond the repository handle; construct once and share.
pub struct AccountService {
    repo: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    /// Register a new account.
    ///
    /// Rejects a blank username, a password shorter than 4 characters, and a
    /// username that is already taken. The duplicate pre-check is best-effort;
    /// the store's unique constraint settles concurrent registrations, and a
    /// constraint violation at insert surfaces as the same rejection.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::account::domain::RegisterInput;
    /// use service::account::repository::mock::MockAccountRepository;
    /// use service::account::service::AccountService;
    /// let svc = AccountService::new(Arc::new(MockAccountRepository::default()));
    /// let input = RegisterInput { username: "alice".into(), password: "pass1".into() };
    /// let account = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(account.account_id, 1);
    /// assert_eq!(account.username, "alice");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> Result<Account, ServiceError> {
        if input.username.is_empty() {
            return Err(ServiceError::Validation("username must not be blank".into()));
        }
        if input.password.len() < 4 {
            return Err(ServiceError::Validation("password too short (>=4)".into()));
        }
        if let Some(existing) = self.repo.find_by_username(&input.username).await? {
            debug!("username taken: {}", existing.username);
            return Err(ServiceError::Validation("username already taken".into()));
        }

        let account = self.repo.insert(&input.username, &input.password).await?;
        info!(account_id = account.account_id, "account_registered");
        Ok(account)
    }

    /// Verify credentials and return the matching account.
    ///
    /// Plaintext comparison on both fields; unknown username and wrong
    /// password are indistinguishable to the caller.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<Account, ServiceError> {
        self.repo
            .find_by_credentials(&input.username, &input.password)
            .await?
            .ok_or(ServiceError::Unauthorized)
    }
}
