use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::account::domain::Account;
use crate::account::repository::AccountRepository;
use crate::errors::ServiceError;

pub struct SeaOrmAccountRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: models::account::Model) -> Account {
    Account { account_id: m.account_id, username: m.username, password: m.password }
}

#[async_trait::async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn insert(&self, username: &str, password: &str) -> Result<Account, ServiceError> {
        let created = models::account::create(&self.db, username, password)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(to_domain(created))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, ServiceError> {
        let res = models::account::Entity::find()
            .filter(models::account::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(res.map(to_domain))
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, ServiceError> {
        let res = models::account::Entity::find()
            .filter(models::account::Column::Username.eq(username))
            .filter(models::account::Column::Password.eq(password))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(res.map(to_domain))
    }
}
