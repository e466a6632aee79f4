//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::{BankAccountService, BankingEntityService};
use crate::domain::entity::{BankAccount, BankingEntity};
use crate::domain::repository::RecordStore;
use crate::error::BankResult;
use crate::presentation::dto::{
    AccountPayload, AccountResponse, EntityPayload, EntityResponse,
};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<S>
where
    S: RecordStore<Record = BankAccount> + Clone + Send + Sync + 'static,
{
    pub service: Arc<BankAccountService<S>>,
}

/// Shared state for banking entity handlers
#[derive(Clone)]
pub struct EntityAppState<S>
where
    S: RecordStore<Record = BankingEntity> + Clone + Send + Sync + 'static,
{
    pub service: Arc<BankingEntityService<S>>,
}

// ============================================================================
// Account handlers
// ============================================================================

/// POST /api/v1/accounts
pub async fn create_account<S>(
    State(state): State<AccountAppState<S>>,
    Json(payload): Json<AccountPayload>,
) -> BankResult<impl IntoResponse>
where
    S: RecordStore<Record = BankAccount> + Clone + Send + Sync + 'static,
{
    let account = payload.into_domain()?;
    let saved = state.service.create(account).await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(saved))))
}

/// GET /api/v1/accounts
pub async fn get_all_accounts<S>(
    State(state): State<AccountAppState<S>>,
) -> BankResult<Json<Vec<AccountResponse>>>
where
    S: RecordStore<Record = BankAccount> + Clone + Send + Sync + 'static,
{
    let accounts = state.service.get_all().await?;

    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/accounts/{id}
pub async fn get_account_by_id<S>(
    State(state): State<AccountAppState<S>>,
    Path(id): Path<i64>,
) -> BankResult<Json<AccountResponse>>
where
    S: RecordStore<Record = BankAccount> + Clone + Send + Sync + 'static,
{
    let account = state.service.get_by_id(id).await?;

    Ok(Json(account.into()))
}

/// GET /api/v1/accounts/number/{account_number}
pub async fn get_account_by_number<S>(
    State(state): State<AccountAppState<S>>,
    Path(account_number): Path<String>,
) -> BankResult<Json<AccountResponse>>
where
    S: RecordStore<Record = BankAccount> + Clone + Send + Sync + 'static,
{
    let account = state.service.get_by_natural_key(&account_number).await?;

    Ok(Json(account.into()))
}

/// GET /api/v1/accounts/holder/{account_holder}
pub async fn get_accounts_by_holder<S>(
    State(state): State<AccountAppState<S>>,
    Path(account_holder): Path<String>,
) -> BankResult<Json<Vec<AccountResponse>>>
where
    S: RecordStore<Record = BankAccount> + Clone + Send + Sync + 'static,
{
    let accounts = state.service.get_by_secondary_key(&account_holder).await?;

    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

/// PUT /api/v1/accounts/{id}
pub async fn update_account<S>(
    State(state): State<AccountAppState<S>>,
    Path(id): Path<i64>,
    Json(payload): Json<AccountPayload>,
) -> BankResult<Json<AccountResponse>>
where
    S: RecordStore<Record = BankAccount> + Clone + Send + Sync + 'static,
{
    let data = payload.into_domain()?;
    let saved = state.service.update(id, data).await?;

    Ok(Json(saved.into()))
}

/// DELETE /api/v1/accounts/{id}
pub async fn delete_account<S>(
    State(state): State<AccountAppState<S>>,
    Path(id): Path<i64>,
) -> BankResult<impl IntoResponse>
where
    S: RecordStore<Record = BankAccount> + Clone + Send + Sync + 'static,
{
    state.service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Banking entity handlers
// ============================================================================

/// POST /api/v1/entities
pub async fn create_entity<S>(
    State(state): State<EntityAppState<S>>,
    Json(payload): Json<EntityPayload>,
) -> BankResult<impl IntoResponse>
where
    S: RecordStore<Record = BankingEntity> + Clone + Send + Sync + 'static,
{
    let entity = payload.into_domain()?;
    let saved = state.service.create(entity).await?;

    Ok((StatusCode::CREATED, Json(EntityResponse::from(saved))))
}

/// GET /api/v1/entities
pub async fn get_all_entities<S>(
    State(state): State<EntityAppState<S>>,
) -> BankResult<Json<Vec<EntityResponse>>>
where
    S: RecordStore<Record = BankingEntity> + Clone + Send + Sync + 'static,
{
    let entities = state.service.get_all().await?;

    Ok(Json(entities.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/entities/{id}
pub async fn get_entity_by_id<S>(
    State(state): State<EntityAppState<S>>,
    Path(id): Path<i64>,
) -> BankResult<Json<EntityResponse>>
where
    S: RecordStore<Record = BankingEntity> + Clone + Send + Sync + 'static,
{
    let entity = state.service.get_by_id(id).await?;

    Ok(Json(entity.into()))
}

/// GET /api/v1/entities/code/{code}
pub async fn get_entity_by_code<S>(
    State(state): State<EntityAppState<S>>,
    Path(code): Path<String>,
) -> BankResult<Json<EntityResponse>>
where
    S: RecordStore<Record = BankingEntity> + Clone + Send + Sync + 'static,
{
    let entity = state.service.get_by_natural_key(&code).await?;

    Ok(Json(entity.into()))
}

/// GET /api/v1/entities/type/{entity_type}
pub async fn get_entities_by_type<S>(
    State(state): State<EntityAppState<S>>,
    Path(entity_type): Path<String>,
) -> BankResult<Json<Vec<EntityResponse>>>
where
    S: RecordStore<Record = BankingEntity> + Clone + Send + Sync + 'static,
{
    let entities = state.service.get_by_secondary_key(&entity_type).await?;

    Ok(Json(entities.into_iter().map(Into::into).collect()))
}

/// PUT /api/v1/entities/{id}
pub async fn update_entity<S>(
    State(state): State<EntityAppState<S>>,
    Path(id): Path<i64>,
    Json(payload): Json<EntityPayload>,
) -> BankResult<Json<EntityResponse>>
where
    S: RecordStore<Record = BankingEntity> + Clone + Send + Sync + 'static,
{
    let data = payload.into_domain()?;
    let saved = state.service.update(id, data).await?;

    Ok(Json(saved.into()))
}

/// DELETE /api/v1/entities/{id}
pub async fn delete_entity<S>(
    State(state): State<EntityAppState<S>>,
    Path(id): Path<i64>,
) -> BankResult<impl IntoResponse>
where
    S: RecordStore<Record = BankingEntity> + Clone + Send + Sync + 'static,
{
    state.service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
