//! Get account use case

use std::sync::Arc;

use super::ACCOUNT_REPOSITORY;
use crate::domain::entities::{Account, AccountId};
use crate::domain::ports::AccountRepository;
use crate::error::{AppError, DomainError};
use crate::registry::{Inject, Registry};

pub struct GetAccount {
    accounts: Inject<dyn AccountRepository>,
}

impl GetAccount {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            accounts: Inject::new(registry, ACCOUNT_REPOSITORY),
        }
    }

    pub async fn execute(&self, account_id: AccountId) -> Result<Account, AppError> {
        let accounts = self.accounts.get()?;

        accounts
            .find_by_id(&account_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Account {}", account_id)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_passenger, InMemoryAccountRepository, StubAccountRepository};

    #[tokio::test]
    async fn returns_stored_account() {
        let account = test_passenger();
        let registry = Arc::new(Registry::new());
        registry.provide::<dyn AccountRepository>(
            ACCOUNT_REPOSITORY,
            Arc::new(StubAccountRepository::new().finding_by_id(account.clone())),
        );

        let found = GetAccount::new(registry).execute(account.id()).await.unwrap();

        assert_eq!(found, account);
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let registry = Arc::new(Registry::new());
        registry.provide::<dyn AccountRepository>(
            ACCOUNT_REPOSITORY,
            Arc::new(InMemoryAccountRepository::new()),
        );

        let result = GetAccount::new(registry).execute(AccountId::new()).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }
}
