//! Signup use case
//!
//! Registers a new passenger and/or driver account.

use std::sync::Arc;

use serde::Serialize;

use super::ACCOUNT_REPOSITORY;
use crate::domain::entities::{Account, AccountId, NewAccount};
use crate::domain::ports::AccountRepository;
use crate::error::{AppError, DomainError};
use crate::registry::{Inject, Registry};

/// Result of a successful signup
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignupOutput {
    pub account_id: AccountId,
}

pub struct Signup {
    accounts: Inject<dyn AccountRepository>,
}

impl Signup {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            accounts: Inject::new(registry, ACCOUNT_REPOSITORY),
        }
    }

    /// Create and store an account
    ///
    /// Fails with `DuplicateAccount` when the email is taken, or with the first
    /// validation error `Account::create` reports. Nothing is stored on failure.
    pub async fn execute(&self, input: NewAccount) -> Result<SignupOutput, AppError> {
        let accounts = self.accounts.get()?;

        if accounts.find_by_email(&input.email).await?.is_some() {
            tracing::debug!("Signup rejected, email already registered");
            return Err(DomainError::DuplicateAccount.into());
        }

        let account = Account::create(input)?;
        accounts.save(&account).await?;

        tracing::info!(
            account_id = %account.id(),
            is_passenger = account.is_passenger(),
            is_driver = account.is_driver(),
            "Account created"
        );

        Ok(SignupOutput {
            account_id: account.id(),
        })
    }
}
