//! # Database: typed record access over an abstract record store
//!
//! [`Database`] is the persistence layer behind the mocked auth-and-data
//! service. It stores every record as JSON bytes through the [`RecordStore`]
//! trait, so the same logic runs against an in-memory store (native builds and
//! tests) or IndexedDB (the browser).
//!
//! ## [`RecordStore`] trait
//!
//! An async key/value interface partitioned by [`Table`]: `get`/`put`/`remove`
//! for a single key and `values` for a whole table. Implementations live in
//! sibling modules ([`crate::memory`], `crate::idb`).
//!
//! ## Tables
//!
//! | Table | Key | Value |
//! |-------|-----|-------|
//! | `users` | user id | [`User`] |
//! | `requests` | request id | [`DesignRequest`] |
//! | `messages` | message id | [`Message`] |
//! | `banners` | banner id | [`Banner`] |
//! | `session` | `"current"` | id of the signed-in user |
//!
//! Records that fail to decode are skipped with a warning rather than failing
//! the whole listing. Listings come back newest first.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Banner, DesignRequest, Message, User};

const SESSION_KEY: &str = "current";
const BANNERS_SEEDED_KEY: &str = "bannersSeeded";

/// Partition of the record store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Users,
    Requests,
    Messages,
    Banners,
    Session,
}

impl Table {
    pub const ALL: [Table; 5] = [
        Table::Users,
        Table::Requests,
        Table::Messages,
        Table::Banners,
        Table::Session,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Requests => "requests",
            Table::Messages => "messages",
            Table::Banners => "banners",
            Table::Session => "session",
        }
    }
}

/// Async trait for storing and retrieving raw records.
pub trait RecordStore {
    fn get(
        &self,
        table: Table,
        key: &str,
    ) -> impl std::future::Future<Output = Option<Vec<u8>>>;
    fn put(
        &self,
        table: Table,
        key: &str,
        data: Vec<u8>,
    ) -> impl std::future::Future<Output = ()>;
    fn remove(
        &self,
        table: Table,
        key: &str,
    ) -> impl std::future::Future<Output = ()>;
    fn values(
        &self,
        table: Table,
    ) -> impl std::future::Future<Output = Vec<Vec<u8>>>;
}

/// Typed access to the site's records.
#[derive(Clone, Debug)]
pub struct Database<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> Database<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn load<T: DeserializeOwned>(&self, table: Table, key: &str) -> Option<T> {
        let raw = self.store.get(table, key).await?;
        match serde_json::from_slice(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping undecodable {} record {}: {}", table.name(), key, e);
                None
            }
        }
    }

    async fn save<T: Serialize>(&self, table: Table, key: &str, record: &T) {
        match serde_json::to_vec(record) {
            Ok(data) => self.store.put(table, key, data).await,
            Err(e) => tracing::error!("Failed to encode {} record {}: {}", table.name(), key, e),
        }
    }

    async fn load_all<T: DeserializeOwned>(&self, table: Table) -> Vec<T> {
        self.store
            .values(table)
            .await
            .into_iter()
            .filter_map(|raw| match serde_json::from_slice(&raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping undecodable {} record: {}", table.name(), e);
                    None
                }
            })
            .collect()
    }

    // Users

    pub async fn get_user(&self, id: &str) -> Option<User> {
        self.load(Table::Users, id).await
    }

    /// Look up a user by email, ignoring case and surrounding whitespace.
    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        let wanted = email.trim().to_lowercase();
        self.list_users()
            .await
            .into_iter()
            .find(|u| u.email.to_lowercase() == wanted)
    }

    pub async fn put_user(&self, user: &User) {
        self.save(Table::Users, &user.id, user).await;
    }

    /// All users, newest first.
    pub async fn list_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.load_all(Table::Users).await;
        users.sort_by(|a, b| b.joined_at.cmp(&a.joined_at));
        users
    }

    // Requests

    pub async fn get_request(&self, id: &str) -> Option<DesignRequest> {
        self.load(Table::Requests, id).await
    }

    pub async fn put_request(&self, request: &DesignRequest) {
        self.save(Table::Requests, &request.id, request).await;
    }

    /// All requests, newest first.
    pub async fn list_requests(&self) -> Vec<DesignRequest> {
        let mut requests: Vec<DesignRequest> = self.load_all(Table::Requests).await;
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        requests
    }

    /// Requests owned by one user, newest first.
    pub async fn list_requests_for_user(&self, user_id: &str) -> Vec<DesignRequest> {
        self.list_requests()
            .await
            .into_iter()
            .filter(|r| r.user_id.as_deref() == Some(user_id))
            .collect()
    }

    // Messages

    pub async fn get_message(&self, id: &str) -> Option<Message> {
        self.load(Table::Messages, id).await
    }

    pub async fn put_message(&self, message: &Message) {
        self.save(Table::Messages, &message.id, message).await;
    }

    /// All messages, newest first.
    pub async fn list_messages(&self) -> Vec<Message> {
        let mut messages: Vec<Message> = self.load_all(Table::Messages).await;
        messages.sort_by(|a, b| b.date.cmp(&a.date));
        messages
    }

    // Banners

    pub async fn get_banner(&self, id: &str) -> Option<Banner> {
        self.load(Table::Banners, id).await
    }

    pub async fn put_banner(&self, banner: &Banner) {
        self.save(Table::Banners, &banner.id, banner).await;
    }

    pub async fn remove_banner(&self, id: &str) {
        self.store.remove(Table::Banners, id).await;
    }

    /// All banners, newest first.
    pub async fn list_banners(&self) -> Vec<Banner> {
        let mut banners: Vec<Banner> = self.load_all(Table::Banners).await;
        banners.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        banners
    }

    // Session

    /// Id of the signed-in user, if a session was persisted.
    pub async fn session_user_id(&self) -> Option<String> {
        self.load(Table::Session, SESSION_KEY).await
    }

    pub async fn set_session_user_id(&self, user_id: &str) {
        self.save(Table::Session, SESSION_KEY, &user_id).await;
    }

    pub async fn clear_session(&self) {
        self.store.remove(Table::Session, SESSION_KEY).await;
    }

    /// Whether the configured banners were inserted once already.
    pub async fn banners_seeded(&self) -> bool {
        self.load::<bool>(Table::Session, BANNERS_SEEDED_KEY)
            .await
            .unwrap_or(false)
    }

    pub async fn mark_banners_seeded(&self) {
        self.save(Table::Session, BANNERS_SEEDED_KEY, &true).await;
    }
}
