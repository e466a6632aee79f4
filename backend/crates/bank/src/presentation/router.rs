//! Bank Routers

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::{BankAccountService, BankingEntityService};
use crate::domain::entity::{BankAccount, BankingEntity};
use crate::domain::repository::RecordStore;
use crate::infra::postgres::{PgAccountStore, PgBankingEntityStore};
use crate::presentation::handlers::{self, AccountAppState, EntityAppState};
use crate::presentation::reports;

/// Create the accounts router with the PostgreSQL store
pub fn accounts_router(store: PgAccountStore) -> Router {
    accounts_router_generic(store)
}

/// Create an accounts router for any store implementation
pub fn accounts_router_generic<S>(store: S) -> Router
where
    S: RecordStore<Record = BankAccount> + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        service: Arc::new(BankAccountService::for_accounts(Arc::new(store))),
    };

    Router::new()
        .route(
            "/",
            post(handlers::create_account::<S>).get(handlers::get_all_accounts::<S>),
        )
        .route(
            "/{id}",
            get(handlers::get_account_by_id::<S>)
                .put(handlers::update_account::<S>)
                .delete(handlers::delete_account::<S>),
        )
        .route(
            "/number/{account_number}",
            get(handlers::get_account_by_number::<S>),
        )
        .route(
            "/holder/{account_holder}",
            get(handlers::get_accounts_by_holder::<S>),
        )
        .with_state(state)
}

/// Create the banking entities router with the PostgreSQL store
pub fn entities_router(store: PgBankingEntityStore) -> Router {
    entities_router_generic(store)
}

/// Create a banking entities router for any store implementation
pub fn entities_router_generic<S>(store: S) -> Router
where
    S: RecordStore<Record = BankingEntity> + Clone + Send + Sync + 'static,
{
    let state = EntityAppState {
        service: Arc::new(BankingEntityService::for_entities(Arc::new(store))),
    };

    Router::new()
        .route(
            "/",
            post(handlers::create_entity::<S>).get(handlers::get_all_entities::<S>),
        )
        .route(
            "/{id}",
            get(handlers::get_entity_by_id::<S>)
                .put(handlers::update_entity::<S>)
                .delete(handlers::delete_entity::<S>),
        )
        .route("/code/{code}", get(handlers::get_entity_by_code::<S>))
        .route(
            "/type/{entity_type}",
            get(handlers::get_entities_by_type::<S>),
        )
        .with_state(state)
}

/// Create the reports router over the PostgreSQL account store
pub fn reports_router(store: PgAccountStore) -> Router {
    let state = AccountAppState {
        service: Arc::new(BankAccountService::for_accounts(Arc::new(store))),
    };

    Router::new()
        .route(
            "/accounts-by-holder/{account_holder}",
            get(reports::accounts_by_holder::<PgAccountStore>),
        )
        .route(
            "/general-summary",
            get(reports::general_summary::<PgAccountStore>),
        )
        .with_state(state)
}
