use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::errors::ServiceError;
use crate::message::domain::Message;
use crate::message::repository::MessageRepository;

pub struct SeaOrmMessageRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: models::message::Model) -> Message {
    Message {
        message_id: m.message_id,
        posted_by: m.posted_by,
        message_text: m.message_text,
        time_posted_epoch: m.time_posted_epoch,
    }
}

#[async_trait::async_trait]
impl MessageRepository for SeaOrmMessageRepository {
    async fn insert(
        &self,
        posted_by: i32,
        message_text: &str,
        time_posted_epoch: i64,
    ) -> Result<Message, ServiceError> {
        let created = models::message::create(&self.db, posted_by, message_text, time_posted_epoch)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(to_domain(created))
    }

    async fn find_all(&self) -> Result<Vec<Message>, ServiceError> {
        let rows = models::message::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, message_id: i32) -> Result<Option<Message>, ServiceError> {
        let row = models::message::Entity::find_by_id(message_id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(row.map(to_domain))
    }

    async fn delete_by_id(&self, message_id: i32) -> Result<(), ServiceError> {
        models::message::Entity::delete_by_id(message_id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    async fn update_text(&self, message_id: i32, message_text: &str) -> Result<(), ServiceError> {
        let found = models::message::Entity::find_by_id(message_id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let Some(found) = found else { return Ok(()) };
        let mut am: models::message::ActiveModel = found.into();
        am.message_text = Set(message_text.to_string());
        am.update(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    async fn find_by_posted_by(&self, account_id: i32) -> Result<Vec<Message>, ServiceError> {
        let rows = models::message::Entity::find()
            .filter(models::message::Column::PostedBy.eq(account_id))
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn account_exists(&self, account_id: i32) -> Result<bool, ServiceError> {
        let found = models::account::Entity::find_by_id(account_id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(found.is_some())
    }
}
