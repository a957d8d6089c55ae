//! PostgreSQL adapter for AccountRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};

use crate::domain::entities::{Account, AccountId, NewAccount};
use crate::domain::ports::AccountRepository;
use crate::entity::accounts;
use crate::error::DomainError;

/// PostgreSQL implementation of AccountRepository
pub struct PostgresAccountRepository {
    db: DatabaseConnection,
}

impl PostgresAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn save(&self, account: &Account) -> Result<(), DomainError> {
        let model = accounts::ActiveModel {
            account_id: Set(account.id().0),
            name: Set(account.name().to_string()),
            email: Set(account.email().to_string()),
            tax_id: Set(account.tax_id().to_string()),
            password: Set(account.password().to_string()),
            car_plate: Set(account.car_plate().map(str::to_string)),
            is_passenger: Set(account.is_passenger()),
            is_driver: Set(account.is_driver()),
        };

        model.insert(&self.db).await.map_err(map_insert_error)?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let result = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let result = accounts::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

/// A concurrent signup that lost the race on the email index
fn map_insert_error(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::DuplicateAccount,
        _ => DomainError::Database(e.to_string()),
    }
}

impl From<accounts::Model> for Account {
    fn from(model: accounts::Model) -> Self {
        Account::restore(
            AccountId(model.account_id),
            NewAccount {
                name: model.name,
                email: model.email,
                tax_id: model.tax_id,
                password: model.password,
                car_plate: model.car_plate,
                is_passenger: model.is_passenger,
                is_driver: model.is_driver,
            },
        )
    }
}
