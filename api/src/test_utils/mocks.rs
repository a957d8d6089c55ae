//! Mock implementations of port traits
//!
//! In-memory fakes that behave like real storage, plus a stub with canned
//! answers and a spy that records calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{Account, AccountId, Ride, RideId, RideStatus};
use crate::domain::ports::{AccountRepository, RideRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Account Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
    by_email: Arc<RwLock<HashMap<String, AccountId>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an account for testing
    pub fn with_account(self, account: Account) -> Self {
        {
            let mut accounts = self.accounts.write().unwrap();
            let mut by_email = self.by_email.write().unwrap();

            by_email.insert(account.email().to_string(), account.id());
            accounts.insert(account.id(), account);
        }
        self
    }

    pub fn count(&self) -> usize {
        self.accounts.read().unwrap().len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, account: &Account) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().unwrap();
        let mut by_email = self.by_email.write().unwrap();

        if by_email.contains_key(account.email()) {
            return Err(DomainError::DuplicateAccount);
        }

        by_email.insert(account.email().to_string(), account.id());
        accounts.insert(account.id(), account.clone());

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let by_email = self.by_email.read().unwrap();
        let accounts = self.accounts.read().unwrap();

        if let Some(id) = by_email.get(email) {
            Ok(accounts.get(id).cloned())
        } else {
            Ok(None)
        }
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().unwrap();
        Ok(accounts.get(id).cloned())
    }
}

// ============================================================================
// In-Memory Ride Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryRideRepository {
    rides: Arc<RwLock<HashMap<RideId, Ride>>>,
}

impl InMemoryRideRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a ride for testing
    pub fn with_ride(self, ride: Ride) -> Self {
        self.rides.write().unwrap().insert(ride.id(), ride);
        self
    }

    pub fn count(&self) -> usize {
        self.rides.read().unwrap().len()
    }
}

#[async_trait]
impl RideRepository for InMemoryRideRepository {
    async fn save(&self, ride: &Ride) -> Result<(), DomainError> {
        let mut rides = self.rides.write().unwrap();

        // Mirrors the partial unique index on active rides in PostgreSQL
        let conflict = ride.is_active()
            && rides
                .values()
                .any(|r| r.passenger_id() == ride.passenger_id() && r.is_active());
        if conflict {
            return Err(DomainError::ActiveRideExists);
        }

        rides.insert(ride.id(), ride.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &RideId) -> Result<Option<Ride>, DomainError> {
        let rides = self.rides.read().unwrap();
        Ok(rides.get(id).cloned())
    }

    async fn has_active_ride_for(&self, passenger_id: &AccountId) -> Result<bool, DomainError> {
        let rides = self.rides.read().unwrap();
        Ok(rides
            .values()
            .any(|r| r.passenger_id() == *passenger_id && r.is_active()))
    }

    async fn update_status(&self, id: &RideId, status: RideStatus) -> Result<(), DomainError> {
        let mut rides = self.rides.write().unwrap();
        let ride = rides
            .get(id)
            .ok_or_else(|| DomainError::NotFound(format!("Ride {}", id)))?;

        let updated = Ride::restore(
            ride.id(),
            ride.passenger_id(),
            ride.driver_id(),
            ride.origin(),
            ride.destination(),
            ride.fare(),
            ride.distance(),
            status,
            ride.date(),
        );
        rides.insert(*id, updated);

        Ok(())
    }
}

// ============================================================================
// Stub Account Repository
// ============================================================================

/// Answers every lookup with a fixed account and discards saves
#[derive(Default)]
pub struct StubAccountRepository {
    by_email: Option<Account>,
    by_id: Option<Account>,
}

impl StubAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finding_by_email(mut self, account: Account) -> Self {
        self.by_email = Some(account);
        self
    }

    pub fn finding_by_id(mut self, account: Account) -> Self {
        self.by_id = Some(account);
        self
    }
}

#[async_trait]
impl AccountRepository for StubAccountRepository {
    async fn save(&self, _account: &Account) -> Result<(), DomainError> {
        Ok(())
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<Account>, DomainError> {
        Ok(self.by_email.clone())
    }

    async fn find_by_id(&self, _id: &AccountId) -> Result<Option<Account>, DomainError> {
        Ok(self.by_id.clone())
    }
}

// ============================================================================
// Spy Account Repository
// ============================================================================

/// A recorded repository call
#[derive(Debug, Clone, PartialEq)]
pub enum AccountCall {
    Save(AccountId),
    FindByEmail(String),
    FindById(AccountId),
}

/// Delegates to an inner repository and records every call
pub struct SpyAccountRepository<R> {
    inner: R,
    calls: Mutex<Vec<AccountCall>>,
}

impl<R: AccountRepository> SpyAccountRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<AccountCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, AccountCall::Save(_)))
            .count()
    }

    fn record(&self, call: AccountCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl<R: AccountRepository> AccountRepository for SpyAccountRepository<R> {
    async fn save(&self, account: &Account) -> Result<(), DomainError> {
        self.record(AccountCall::Save(account.id()));
        self.inner.save(account).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.record(AccountCall::FindByEmail(email.to_string()));
        self.inner.find_by_email(email).await
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        self.record(AccountCall::FindById(*id));
        self.inner.find_by_id(id).await
    }
}

// ============================================================================
// Failing Ride Repository
// ============================================================================

/// Every call fails with a database error
#[derive(Default)]
pub struct FailingRideRepository;

#[async_trait]
impl RideRepository for FailingRideRepository {
    async fn save(&self, _ride: &Ride) -> Result<(), DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: &RideId) -> Result<Option<Ride>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn has_active_ride_for(&self, _passenger_id: &AccountId) -> Result<bool, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn update_status(&self, _id: &RideId, _status: RideStatus) -> Result<(), DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }
}
