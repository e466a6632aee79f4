//! Use-case orchestration tests over an in-memory store

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use rust_decimal::Decimal;

use crate::application::{BankAccountService, BankingEntityService};
use crate::domain::entity::{BankAccount, BankingEntity};
use crate::domain::record::Record;
use crate::domain::repository::RecordStore;
use crate::domain::value_object::{AccountType, EntityCategory, EntityType};
use crate::error::{BankError, BankResult, FieldCode};
use std::sync::Arc;

/// HashMap-backed store with a save-call counter, so tests can assert
/// that rejected operations never reach persistence.
struct InMemoryStore<R: Record> {
    records: Mutex<HashMap<i64, R>>,
    next_id: AtomicI64,
    save_calls: AtomicUsize,
    set_id: fn(&mut R, i64),
    secondary_matches: fn(&R, &str) -> bool,
}

impl<R: Record> InMemoryStore<R> {
    fn new(set_id: fn(&mut R, i64), secondary_matches: fn(&R, &str) -> bool) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            save_calls: AtomicUsize::new(0),
            set_id,
            secondary_matches,
        })
    }

    fn save_count(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

impl<R: Record> RecordStore for InMemoryStore<R> {
    type Record = R;

    async fn save(&self, record: &R) -> BankResult<R> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let mut saved = record.clone();
        let id = match record.id() {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                (self.set_id)(&mut saved, id);
                id
            }
        };
        self.records
            .lock()
            .map_err(|_| BankError::Internal("store lock poisoned".into()))?
            .insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> BankResult<Option<R>> {
        Ok(self
            .records
            .lock()
            .map_err(|_| BankError::Internal("store lock poisoned".into()))?
            .get(&id)
            .cloned())
    }

    async fn find_by_natural_key(&self, key: &str) -> BankResult<Option<R>> {
        Ok(self
            .records
            .lock()
            .map_err(|_| BankError::Internal("store lock poisoned".into()))?
            .values()
            .find(|r| r.natural_key() == key)
            .cloned())
    }

    async fn find_all(&self) -> BankResult<Vec<R>> {
        Ok(self
            .records
            .lock()
            .map_err(|_| BankError::Internal("store lock poisoned".into()))?
            .values()
            .cloned()
            .collect())
    }

    async fn find_by_secondary_key(&self, value: &str) -> BankResult<Vec<R>> {
        Ok(self
            .records
            .lock()
            .map_err(|_| BankError::Internal("store lock poisoned".into()))?
            .values()
            .filter(|r| (self.secondary_matches)(r, value))
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: i64) -> BankResult<()> {
        self.records
            .lock()
            .map_err(|_| BankError::Internal("store lock poisoned".into()))?
            .remove(&id);
        Ok(())
    }
}

type AccountStore = InMemoryStore<BankAccount>;
type EntityStore = InMemoryStore<BankingEntity>;

fn account_store() -> Arc<AccountStore> {
    InMemoryStore::new(
        |a, id| a.id = Some(kernel::id::AccountId::from_i64(id)),
        |a, holder| a.account_holder == holder,
    )
}

fn entity_store() -> Arc<EntityStore> {
    InMemoryStore::new(
        |e, id| e.id = Some(kernel::id::BankingEntityId::from_i64(id)),
        |e, code| e.entity_type.map(|t| t.code() == code).unwrap_or(false),
    )
}

fn sample_account() -> BankAccount {
    BankAccount::new(
        "123456789",
        "John Doe",
        AccountType::Checking,
        Decimal::new(100000, 2), // 1000.00
        "USD",
    )
}

fn sample_entity() -> BankingEntity {
    BankingEntity::new(
        "ENT001",
        "Acme Corp",
        EntityType::Customer,
        EntityCategory::Corporate,
        "123456789",
    )
}

#[tokio::test]
async fn test_create_assigns_identity() {
    let store = account_store();
    let service = BankAccountService::for_accounts(Arc::clone(&store));

    let saved = service.create(sample_account()).await.unwrap();

    assert!(saved.id.is_some());
    assert_eq!(saved.account_number, "123456789");
    assert!(saved.is_active());
    assert_eq!(saved.created_at, saved.updated_at);
    assert_eq!(store.save_count(), 1);
}

#[tokio::test]
async fn test_duplicate_create_is_rejected_without_persisting() {
    let store = account_store();
    let service = BankAccountService::for_accounts(Arc::clone(&store));

    service.create(sample_account()).await.unwrap();

    let mut dup = sample_account();
    dup.account_holder = "Jane Doe".into();
    let err = service.create(dup).await.unwrap_err();

    match err {
        BankError::AlreadyExists { key, .. } => assert_eq!(key, "123456789"),
        other => panic!("expected AlreadyExists, got {other:?}"),
    }
    // Only the first create reached the store
    assert_eq!(store.save_count(), 1);
    assert_eq!(service.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_data_wins_over_duplicate_key() {
    let store = account_store();
    let service = BankAccountService::for_accounts(Arc::clone(&store));

    service.create(sample_account()).await.unwrap();

    // Same natural key AND a missing holder: validation reports first
    let mut bad = sample_account();
    bad.account_holder = String::new();
    let err = service.create(bad).await.unwrap_err();

    match err {
        BankError::InvalidData(code) => assert_eq!(code, FieldCode::AccountHolderRequired),
        other => panic!("expected InvalidData, got {other:?}"),
    }
    assert_eq!(store.save_count(), 1);
}

#[tokio::test]
async fn test_update_keeping_own_key_is_allowed() {
    let store = account_store();
    let service = BankAccountService::for_accounts(Arc::clone(&store));

    let saved = service.create(sample_account()).await.unwrap();
    let id = saved.id.unwrap().as_i64();

    let mut data = sample_account();
    data.account_holder = "Jane Doe".into();
    let updated = service.update(id, data).await.unwrap();

    assert_eq!(updated.account_number, "123456789");
    assert_eq!(updated.account_holder, "Jane Doe");
}

#[tokio::test]
async fn test_update_to_another_records_key_is_rejected() {
    let store = account_store();
    let service = BankAccountService::for_accounts(Arc::clone(&store));

    service.create(sample_account()).await.unwrap();
    let mut second = sample_account();
    second.account_number = "987654321".into();
    let second = service.create(second).await.unwrap();

    // Try to steal the first account's number
    let data = sample_account();
    let err = service
        .update(second.id.unwrap().as_i64(), data)
        .await
        .unwrap_err();

    assert!(matches!(err, BankError::AlreadyExists { .. }));
}

#[tokio::test]
async fn test_update_missing_target_is_not_found() {
    let service = BankAccountService::for_accounts(account_store());

    let err = service.update(999, sample_account()).await.unwrap_err();

    match err {
        BankError::NotFound { lookup, .. } => assert_eq!(lookup, "999"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_preserves_identity_and_created_at() {
    let store = account_store();
    let service = BankAccountService::for_accounts(Arc::clone(&store));

    let saved = service.create(sample_account()).await.unwrap();
    let id = saved.id.unwrap().as_i64();
    let created = saved.created_at;

    std::thread::sleep(std::time::Duration::from_millis(2));
    let mut data = sample_account();
    data.balance = Some(Decimal::new(200000, 2));
    let updated = service.update(id, data).await.unwrap();

    assert_eq!(updated.id.map(|i| i.as_i64()), Some(id));
    assert_eq!(updated.created_at, created);
    assert!(updated.updated_at > created);
    assert_eq!(updated.balance, Some(Decimal::new(200000, 2)));
}

#[tokio::test]
async fn test_get_by_id_absence_names_the_id() {
    let service = BankAccountService::for_accounts(account_store());

    let err = service.get_by_id(999).await.unwrap_err();

    assert_eq!(err.to_string(), "account not found: 999");
}

#[tokio::test]
async fn test_get_by_natural_key_absence_names_the_key() {
    let service = BankAccountService::for_accounts(account_store());

    let err = service.get_by_natural_key("000000000").await.unwrap_err();

    match err {
        BankError::NotFound { kind, lookup } => {
            assert_eq!(kind, "account");
            assert_eq!(lookup, "000000000");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_secondary_lookup_without_matches_is_empty_not_error() {
    let service = BankAccountService::for_accounts(account_store());

    let accounts = service.get_by_secondary_key("Nobody").await.unwrap();

    assert!(accounts.is_empty());
}

#[tokio::test]
async fn test_secondary_lookup_filters_by_holder() {
    let service = BankAccountService::for_accounts(account_store());

    service.create(sample_account()).await.unwrap();
    let mut other = sample_account();
    other.account_number = "987654321".into();
    other.account_holder = "Jane Doe".into();
    service.create(other).await.unwrap();

    let accounts = service.get_by_secondary_key("John Doe").await.unwrap();

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].account_number, "123456789");
}

#[tokio::test]
async fn test_delete_then_lookup_is_not_found() {
    let service = BankAccountService::for_accounts(account_store());

    let saved = service.create(sample_account()).await.unwrap();
    let id = saved.id.unwrap().as_i64();

    service.delete(id).await.unwrap();

    assert!(matches!(
        service.get_by_id(id).await.unwrap_err(),
        BankError::NotFound { .. }
    ));
}

#[tokio::test]
async fn test_delete_missing_target_is_not_found() {
    let service = BankAccountService::for_accounts(account_store());

    let err = service.delete(42).await.unwrap_err();

    assert!(matches!(err, BankError::NotFound { .. }));
}

#[tokio::test]
async fn test_entity_blank_name_is_rejected_without_persisting() {
    let store = entity_store();
    let service = BankingEntityService::for_entities(Arc::clone(&store));

    let mut entity = sample_entity();
    entity.name = "   ".into();
    let err = service.create(entity).await.unwrap_err();

    match err {
        BankError::InvalidData(code) => assert_eq!(code, FieldCode::EntityNameRequired),
        other => panic!("expected InvalidData, got {other:?}"),
    }
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn test_entity_duplicate_code_is_rejected() {
    let service = BankingEntityService::for_entities(entity_store());

    service.create(sample_entity()).await.unwrap();

    let mut dup = sample_entity();
    dup.name = "Acme Holdings".into();
    let err = service.create(dup).await.unwrap_err();

    match err {
        BankError::AlreadyExists { kind, key } => {
            assert_eq!(kind, "entity");
            assert_eq!(key, "ENT001");
        }
        other => panic!("expected AlreadyExists, got {other:?}"),
    }
}

#[tokio::test]
async fn test_entities_filtered_by_type_code() {
    let service = BankingEntityService::for_entities(entity_store());

    service.create(sample_entity()).await.unwrap();
    let mut supplier = sample_entity();
    supplier.code = "ENT002".into();
    supplier.entity_type = Some(EntityType::Supplier);
    service.create(supplier).await.unwrap();

    let customers = service.get_by_secondary_key("CUSTOMER").await.unwrap();
    let suppliers = service.get_by_secondary_key("SUPPLIER").await.unwrap();

    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].code, "ENT001");
    assert_eq!(suppliers.len(), 1);
    assert_eq!(suppliers[0].code, "ENT002");
}

#[tokio::test]
async fn test_entity_update_round_trip() {
    let service = BankingEntityService::for_entities(entity_store());

    let saved = service.create(sample_entity()).await.unwrap();
    let id = saved.id.unwrap().as_i64();

    let mut data = sample_entity();
    data.name = "Acme Corporation".into();
    data.email = Some("contact@acme.example".into());
    service.update(id, data).await.unwrap();

    let fetched = service.get_by_natural_key("ENT001").await.unwrap();
    assert_eq!(fetched.name, "Acme Corporation");
    assert_eq!(fetched.email.as_deref(), Some("contact@acme.example"));
}
