//! # IndexedDB record store: browser-side persistence
//!
//! [`IdbStore`] is the [`RecordStore`] implementation used on the **web platform**.
//! It keeps the site's records in the browser's IndexedDB via the [`rexie`]
//! crate, so accounts, requests and the signed-in session survive a reload.
//!
//! ## Database schema
//!
//! A single IndexedDB database named `"flexdesign"` (version 1) with one object
//! store per [`Table`] (`users`, `requests`, `messages`, `banners`, `session`).
//! Keys are record ids; values are the JSON bytes produced by
//! [`crate::Database`], wrapped with `serde_wasm_bindgen`.
//!
//! ## Connection management
//!
//! `IdbStore` only holds the database name and opens a fresh [`Rexie`]
//! connection per operation; `Rexie` does not implement `Clone` and the browser
//! caches IndexedDB connections internally.
//!
//! ## Error handling
//!
//! All trait methods swallow errors (returning `None`/empty for reads, doing
//! nothing for writes) and log them. An unavailable IndexedDB degrades to an
//! empty site rather than a crash.

use crate::database::{RecordStore, Table};
use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

const DEFAULT_DB_NAME: &str = "flexdesign";
const DB_VERSION: u32 = 1;

/// IndexedDB-backed RecordStore for the web platform.
#[derive(Clone, Debug)]
pub struct IdbStore {
    db_name: String,
}

impl Default for IdbStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdbStore {
    /// Store using the default `"flexdesign"` database.
    pub fn new() -> Self {
        Self::with_name(DEFAULT_DB_NAME)
    }

    pub fn with_name(db_name: &str) -> Self {
        Self {
            db_name: db_name.to_string(),
        }
    }

    async fn open_db(&self) -> Option<Rexie> {
        let mut builder = Rexie::builder(&self.db_name).version(DB_VERSION);
        for table in Table::ALL {
            builder = builder.add_object_store(RexieObjectStore::new(table.name()));
        }
        match builder.build().await {
            Ok(db) => Some(db),
            Err(e) => {
                tracing::error!("Failed to open IndexedDB {}: {}", self.db_name, e);
                None
            }
        }
    }
}

impl RecordStore for IdbStore {
    async fn get(&self, table: Table, key: &str) -> Option<Vec<u8>> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[table.name()], TransactionMode::ReadOnly)
            .ok()?;
        let store = tx.store(table.name()).ok()?;

        let value = store.get(JsValue::from_str(key)).await.ok()?;

        let js_val = value?;
        serde_wasm_bindgen::from_value(js_val).ok()
    }

    async fn put(&self, table: Table, key: &str, data: Vec<u8>) {
        let Some(db) = self.open_db().await else {
            return;
        };
        let Ok(tx) = db.transaction(&[table.name()], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(table.name()) else {
            return;
        };

        let key = JsValue::from_str(key);
        let value = serde_wasm_bindgen::to_value(&data).unwrap_or(JsValue::NULL);
        if let Err(e) = store.put(&value, Some(&key)).await {
            tracing::error!("Failed to write {} record: {}", table.name(), e);
        }
        let _ = tx.done().await;
    }

    async fn remove(&self, table: Table, key: &str) {
        let Some(db) = self.open_db().await else {
            return;
        };
        let Ok(tx) = db.transaction(&[table.name()], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(table.name()) else {
            return;
        };

        if let Err(e) = store.delete(JsValue::from_str(key)).await {
            tracing::error!("Failed to delete {} record: {}", table.name(), e);
        }
        let _ = tx.done().await;
    }

    async fn values(&self, table: Table) -> Vec<Vec<u8>> {
        let Some(db) = self.open_db().await else {
            return Vec::new();
        };
        let Ok(tx) = db.transaction(&[table.name()], TransactionMode::ReadOnly) else {
            return Vec::new();
        };
        let Ok(store) = tx.store(table.name()) else {
            return Vec::new();
        };
        let Ok(entries) = store.get_all(None, None, None, None).await else {
            return Vec::new();
        };

        entries
            .into_iter()
            .filter_map(|(_, value)| serde_wasm_bindgen::from_value(value).ok())
            .collect()
    }
}
