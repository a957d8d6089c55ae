//! Account handlers
//!
//! Endpoints for signup and account lookup.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Account, AccountId, NewAccount};
use super::json::JsonBody;
use crate::error::AppError;
use crate::AppState;

/// Request body for signup
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    #[serde(alias = "cpf")]
    pub tax_id: String,
    pub password: String,
    #[serde(default)]
    pub car_plate: Option<String>,
    #[serde(default)]
    pub is_passenger: bool,
    #[serde(default)]
    pub is_driver: bool,
}

impl From<SignupRequest> for NewAccount {
    fn from(request: SignupRequest) -> Self {
        NewAccount {
            name: request.name,
            email: request.email,
            tax_id: request.tax_id,
            password: request.password,
            car_plate: request.car_plate,
            is_passenger: request.is_passenger,
            is_driver: request.is_driver,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub account_id: AccountId,
}

/// A stored account as returned by the API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account_id: AccountId,
    pub name: String,
    pub email: String,
    pub tax_id: String,
    pub password: String,
    pub car_plate: Option<String>,
    pub is_passenger: bool,
    pub is_driver: bool,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.id(),
            name: account.name().to_string(),
            email: account.email().to_string(),
            tax_id: account.tax_id().to_string(),
            password: account.password().to_string(),
            car_plate: account.car_plate().map(str::to_string),
            is_passenger: account.is_passenger(),
            is_driver: account.is_driver(),
        }
    }
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> Result<Json<SignupResponse>, AppError> {
    let output = state.signup.execute(request.into()).await?;

    Ok(Json(SignupResponse {
        account_id: output.account_id,
    }))
}

/// GET /accounts/:accountId
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = state.get_account.execute(AccountId(account_id)).await?;

    Ok(Json(account.into()))
}
