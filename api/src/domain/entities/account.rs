//! Account domain entity
//!
//! A registered person who can request rides (passenger), drive (driver), or both.
//! All invariants are checked once in [`Account::create`]; the entity is immutable
//! afterwards.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validators::{validate_password, validate_tax_id};
use crate::error::DomainError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

static CAR_PLATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").expect("valid car plate pattern"));

/// Unique identifier for an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data needed to create a new account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub tax_id: String,
    pub password: String,
    pub car_plate: Option<String>,
    pub is_passenger: bool,
    pub is_driver: bool,
}

/// A registered account
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    name: String,
    email: String,
    tax_id: String,
    password: String,
    car_plate: Option<String>,
    is_passenger: bool,
    is_driver: bool,
}

impl Account {
    /// Validate the data and build a new account with a fresh id
    pub fn create(data: NewAccount) -> Result<Self, DomainError> {
        if data.name.split_whitespace().count() < 2 {
            return Err(DomainError::InvalidName);
        }
        if !EMAIL_PATTERN.is_match(&data.email) {
            return Err(DomainError::InvalidEmail);
        }
        if !validate_tax_id(&data.tax_id) {
            return Err(DomainError::InvalidTaxId);
        }
        if !validate_password(&data.password) {
            return Err(DomainError::InvalidPassword);
        }
        if data.is_driver {
            let plate_ok = data
                .car_plate
                .as_deref()
                .is_some_and(|plate| CAR_PLATE_PATTERN.is_match(plate));
            if !plate_ok {
                return Err(DomainError::InvalidCarPlate);
            }
        }

        Ok(Self::restore(AccountId::new(), data))
    }

    /// Rebuild an account that was already validated and stored
    pub fn restore(id: AccountId, data: NewAccount) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            tax_id: data.tax_id,
            password: data.password,
            car_plate: data.car_plate,
            is_passenger: data.is_passenger,
            is_driver: data.is_driver,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    /// Stored as given; hashing is not this entity's concern
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn car_plate(&self) -> Option<&str> {
        self.car_plate.as_deref()
    }

    pub fn is_passenger(&self) -> bool {
        self.is_passenger
    }

    pub fn is_driver(&self) -> bool {
        self.is_driver
    }
}
