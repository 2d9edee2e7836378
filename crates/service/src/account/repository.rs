use async_trait::async_trait;

use super::domain::Account;
use crate::errors::ServiceError;

/// Repository abstraction for account persistence.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account; the id is generated by the store. A unique
    /// constraint on the username makes this fail on duplicates even when
    /// the service-level pre-check raced with a concurrent insert.
    async fn insert(&self, username: &str, password: &str) -> Result<Account, ServiceError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, ServiceError>;
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAccountRepository {
        accounts: Mutex<Vec<Account>>,
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn insert(&self, username: &str, password: &str) -> Result<Account, ServiceError> {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.iter().any(|a| a.username == username) {
                // Mirrors the unique-constraint backstop of the real store
                return Err(ServiceError::Storage(
                    "duplicate key value violates unique constraint on account.username".into(),
                ));
            }
            let account = Account {
                account_id: accounts.len() as i32 + 1,
                username: username.to_string(),
                password: password.to_string(),
            };
            accounts.push(account.clone());
            Ok(account)
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<Account>, ServiceError> {
            let accounts = self.accounts.lock().unwrap();
            Ok(accounts.iter().find(|a| a.username == username).cloned())
        }

        async fn find_by_credentials(
            &self,
            username: &str,
            password: &str,
        ) -> Result<Option<Account>, ServiceError> {
            let accounts = self.accounts.lock().unwrap();
            Ok(accounts
                .iter()
                .find(|a| a.username == username && a.password == password)
                .cloned())
        }
    }
}
