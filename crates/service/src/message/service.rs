use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{CreateMessageInput, Message};
use super::repository::MessageRepository;
use crate::errors::ServiceError;

/// Longest accepted message text, matching the VARCHAR(255) column.
const MAX_TEXT_CHARS: usize = 255;

/// Message business service independent of web framework.
/// Stateless beyond the repository handle; construct once and share.
pub struct MessageService {
    repo: Arc<dyn MessageRepository>,
}

fn validate_text(text: &str) -> Result<(), ServiceError> {
    if text.is_empty() {
        return Err(ServiceError::Validation("message_text must not be blank".into()));
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(ServiceError::Validation(format!(
            "message_text longer than {} characters",
            MAX_TEXT_CHARS
        )));
    }
    Ok(())
}

impl MessageService {
    pub fn new(repo: Arc<dyn MessageRepository>) -> Self {
        Self { repo }
    }

    /// Post a new message.
    ///
    /// The text must be 1..=255 characters and `posted_by` must reference an
    /// existing account; the existence check is performed here rather than
    /// left to the store's foreign key.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::message::domain::CreateMessageInput;
    /// use service::message::repository::mock::MockMessageRepository;
    /// use service::message::service::MessageService;
    /// let repo = Arc::new(MockMessageRepository::default());
    /// repo.seed_account(1);
    /// let svc = MessageService::new(repo);
    /// let input = CreateMessageInput { posted_by: 1, message_text: "hello".into(), time_posted_epoch: 1669947792 };
    /// let message = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(message.message_id, 1);
    /// ```
    #[instrument(skip(self, input), fields(posted_by = input.posted_by))]
    pub async fn create(&self, input: CreateMessageInput) -> Result<Message, ServiceError> {
        validate_text(&input.message_text)?;
        if !self.repo.account_exists(input.posted_by).await? {
            return Err(ServiceError::Validation(format!(
                "posted_by {} does not reference an existing account",
                input.posted_by
            )));
        }

        let message = self
            .repo
            .insert(input.posted_by, &input.message_text, input.time_posted_epoch)
            .await?;
        info!(message_id = message.message_id, "message_created");
        Ok(message)
    }

    /// Every persisted message in storage order; empty is not an error.
    pub async fn get_all(&self) -> Result<Vec<Message>, ServiceError> {
        self.repo.find_all().await
    }

    /// A single message, or `None` when absent. Absence is not an error.
    pub async fn get(&self, message_id: i32) -> Result<Option<Message>, ServiceError> {
        self.repo.find_by_id(message_id).await
    }

    /// Remove a message and return its pre-deletion value. A second delete of
    /// the same id reports nothing found rather than failing.
    #[instrument(skip(self))]
    pub async fn delete(&self, message_id: i32) -> Result<Option<Message>, ServiceError> {
        let Some(existing) = self.repo.find_by_id(message_id).await? else {
            return Ok(None);
        };
        self.repo.delete_by_id(message_id).await?;
        info!(message_id, "message_deleted");
        Ok(Some(existing))
    }

    /// Replace the text of an existing message and return the post-update row.
    ///
    /// A missing id and invalid text are deliberately the same rejection at
    /// this boundary; callers cannot tell the two cases apart.
    #[instrument(skip(self, new_text))]
    pub async fn update(&self, message_id: i32, new_text: &str) -> Result<Message, ServiceError> {
        validate_text(new_text)?;
        if self.repo.find_by_id(message_id).await?.is_none() {
            return Err(ServiceError::Validation(format!(
                "message {} does not exist",
                message_id
            )));
        }

        self.repo.update_text(message_id, new_text).await?;
        self.repo
            .find_by_id(message_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("message"))
    }

    /// All messages posted by one account. No account-existence check on this
    /// read path; an unknown id simply yields an empty list.
    pub async fn get_by_account(&self, account_id: i32) -> Result<Vec<Message>, ServiceError> {
        self.repo.find_by_posted_by(account_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::repository::mock::MockMessageRepository;

    fn svc_with_account(account_id: i32) -> MessageService {
        let repo = Arc::new(MockMessageRepository::default());
        repo.seed_account(account_id);
        MessageService::new(repo)
    }

    fn input(posted_by: i32, text: &str) -> CreateMessageInput {
        CreateMessageInput {
            posted_by,
            message_text: text.into(),
            time_posted_epoch: 1_669_947_792,
        }
    }

    #[tokio::test]
    async fn create_rejects_blank_text() {
        let svc = svc_with_account(1);
        let err = svc.create(input(1, "")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_enforces_length_bounds() {
        let svc = svc_with_account(1);
        assert!(svc.create(input(1, "x")).await.is_ok());
        assert!(svc.create(input(1, &"y".repeat(255))).await.is_ok());
        let err = svc.create(input(1, &"z".repeat(256))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_unknown_author() {
        let svc = svc_with_account(1);
        let err = svc.create(input(99, "hello")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_returns_none_for_absent_id() {
        let svc = svc_with_account(1);
        assert_eq!(svc.get(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_twice_reports_nothing_found_second_time() {
        let svc = svc_with_account(1);
        let posted = svc.create(input(1, "soon gone")).await.unwrap();

        let first = svc.delete(posted.message_id).await.unwrap();
        assert_eq!(first, Some(posted.clone()));

        let second = svc.delete(posted.message_id).await.unwrap();
        assert_eq!(second, None);

        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_returns_post_update_row() {
        let svc = svc_with_account(1);
        let posted = svc.create(input(1, "first draft")).await.unwrap();

        let updated = svc.update(posted.message_id, "final wording").await.unwrap();
        assert_eq!(updated.message_text, "final wording");
        assert_eq!(updated.posted_by, posted.posted_by);
        assert_eq!(updated.time_posted_epoch, posted.time_posted_epoch);
    }

    #[tokio::test]
    async fn update_flattens_missing_id_and_bad_text() {
        let svc = svc_with_account(1);
        let posted = svc.create(input(1, "hello")).await.unwrap();

        let missing = svc.update(posted.message_id + 100, "valid text").await.unwrap_err();
        let blank = svc.update(posted.message_id, "").await.unwrap_err();
        assert!(matches!(missing, ServiceError::Validation(_)));
        assert!(matches!(blank, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn get_by_account_filters_on_posted_by() {
        let repo = Arc::new(MockMessageRepository::default());
        repo.seed_account(1);
        repo.seed_account(2);
        let svc = MessageService::new(repo);

        let m1 = svc.create(input(1, "from one")).await.unwrap();
        let _m2 = svc.create(input(2, "from two")).await.unwrap();
        let m3 = svc.create(input(1, "also from one")).await.unwrap();

        let by_one = svc.get_by_account(1).await.unwrap();
        let ids: Vec<i32> = by_one.iter().map(|m| m.message_id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&m1.message_id) && ids.contains(&m3.message_id));

        // Unknown account: empty list, not an error
        assert!(svc.get_by_account(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn message_ids_are_not_reused_after_delete() {
        let svc = svc_with_account(1);
        let first = svc.create(input(1, "one")).await.unwrap();
        svc.delete(first.message_id).await.unwrap();
        let second = svc.create(input(1, "two")).await.unwrap();
        assert!(second.message_id > first.message_id);
    }
}
