use async_trait::async_trait;

use super::domain::Message;
use crate::errors::ServiceError;

/// Repository abstraction for message persistence.
///
/// `delete_by_id` and `update_text` are no-ops when the id is absent; the
/// service looks the row up first when it needs to tell the difference.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn insert(
        &self,
        posted_by: i32,
        message_text: &str,
        time_posted_epoch: i64,
    ) -> Result<Message, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Message>, ServiceError>;
    async fn find_by_id(&self, message_id: i32) -> Result<Option<Message>, ServiceError>;
    async fn delete_by_id(&self, message_id: i32) -> Result<(), ServiceError>;
    async fn update_text(&self, message_id: i32, message_text: &str) -> Result<(), ServiceError>;
    async fn find_by_posted_by(&self, account_id: i32) -> Result<Vec<Message>, ServiceError>;
    /// Referential pre-check for `posted_by` on message creation.
    async fn account_exists(&self, account_id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::{BTreeMap, HashSet};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Inner {
        messages: BTreeMap<i32, Message>, // key: message_id
        accounts: HashSet<i32>,           // known account ids
        next_id: i32,
    }

    #[derive(Default)]
    pub struct MockMessageRepository {
        inner: Mutex<Inner>,
    }

    impl MockMessageRepository {
        /// Make `account_id` visible to `account_exists`.
        pub fn seed_account(&self, account_id: i32) {
            self.inner.lock().unwrap().accounts.insert(account_id);
        }
    }

    #[async_trait]
    impl MessageRepository for MockMessageRepository {
        async fn insert(
            &self,
            posted_by: i32,
            message_text: &str,
            time_posted_epoch: i64,
        ) -> Result<Message, ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            // Ids are never reused, even after deletion
            inner.next_id += 1;
            let message = Message {
                message_id: inner.next_id,
                posted_by,
                message_text: message_text.to_string(),
                time_posted_epoch,
            };
            inner.messages.insert(message.message_id, message.clone());
            Ok(message)
        }

        async fn find_all(&self) -> Result<Vec<Message>, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.messages.values().cloned().collect())
        }

        async fn find_by_id(&self, message_id: i32) -> Result<Option<Message>, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.messages.get(&message_id).cloned())
        }

        async fn delete_by_id(&self, message_id: i32) -> Result<(), ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            inner.messages.remove(&message_id);
            Ok(())
        }

        async fn update_text(&self, message_id: i32, message_text: &str) -> Result<(), ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            if let Some(message) = inner.messages.get_mut(&message_id) {
                message.message_text = message_text.to_string();
            }
            Ok(())
        }

        async fn find_by_posted_by(&self, account_id: i32) -> Result<Vec<Message>, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner
                .messages
                .values()
                .filter(|m| m.posted_by == account_id)
                .cloned()
                .collect())
        }

        async fn account_exists(&self, account_id: i32) -> Result<bool, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.accounts.contains(&account_id))
        }
    }
}
