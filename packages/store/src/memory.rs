use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::database::{RecordStore, Table};

type Tables = HashMap<Table, BTreeMap<String, Vec<u8>>>;

/// In-memory RecordStore for testing and native builds.
///
/// Clones share the same tables.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordStore for MemoryStore {
    async fn get(&self, table: Table, key: &str) -> Option<Vec<u8>> {
        self.tables().get(&table)?.get(key).cloned()
    }

    async fn put(&self, table: Table, key: &str, data: Vec<u8>) {
        self.tables()
            .entry(table)
            .or_default()
            .insert(key.to_string(), data);
    }

    async fn remove(&self, table: Table, key: &str) {
        if let Some(rows) = self.tables().get_mut(&table) {
            rows.remove(key);
        }
    }

    async fn values(&self, table: Table) -> Vec<Vec<u8>> {
        self.tables()
            .get(&table)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use crate::models::*;
    use chrono::{Duration, Utc};

    fn user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            name: id.to_string(),
            email: email.to_string(),
            password: None,
            avatar: None,
            role: UserRole::User,
            status: Some(UserStatus::Active),
            joined_at: Utc::now(),
        }
    }

    fn request(id: &str, user_id: Option<&str>, age_minutes: i64) -> DesignRequest {
        DesignRequest {
            id: id.to_string(),
            user_id: user_id.map(str::to_string),
            client_name: "client".to_string(),
            email: "client@example.com".to_string(),
            project_type: ProjectType::Logo,
            description: "a logo".to_string(),
            budget: None,
            status: RequestStatus::Pending,
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[tokio::test]
    async fn test_put_and_get_user() {
        let db = Database::new(MemoryStore::new());

        assert!(db.get_user("u1").await.is_none());
        assert!(db.list_users().await.is_empty());

        db.put_user(&user("u1", "Sara@Example.com")).await;

        let loaded = db.get_user("u1").await.unwrap();
        assert_eq!(loaded.email, "Sara@Example.com");
        assert_eq!(db.list_users().await.len(), 1);
    }

    #[tokio::test]
    async fn test_find_user_by_email_ignores_case() {
        let db = Database::new(MemoryStore::new());
        db.put_user(&user("u1", "Sara@Example.com")).await;
        db.put_user(&user("u2", "omar@example.com")).await;

        let found = db.find_user_by_email("  sara@example.COM ").await.unwrap();
        assert_eq!(found.id, "u1");
        assert!(db.find_user_by_email("nobody@example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_requests_newest_first_and_scoped() {
        let db = Database::new(MemoryStore::new());
        db.put_request(&request("old", Some("u1"), 30)).await;
        db.put_request(&request("new", Some("u1"), 1)).await;
        db.put_request(&request("anon", None, 10)).await;

        let all = db.list_requests().await;
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["new", "anon", "old"]);

        let mine = db.list_requests_for_user("u1").await;
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.user_id.as_deref() == Some("u1")));
        assert!(db.list_requests_for_user("u2").await.is_empty());
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_record() {
        let db = Database::new(MemoryStore::new());
        let mut req = request("r1", None, 0);
        db.put_request(&req).await;

        req.status = RequestStatus::InProgress;
        db.put_request(&req).await;

        assert_eq!(db.list_requests().await.len(), 1);
        assert_eq!(
            db.get_request("r1").await.unwrap().status,
            RequestStatus::InProgress
        );
    }

    #[tokio::test]
    async fn test_remove_banner() {
        let db = Database::new(MemoryStore::new());
        let banner = Banner {
            id: "b1".to_string(),
            image_url: "https://example.com/a.png".to_string(),
            title: "عرض".to_string(),
            is_active: true,
            created_at: Utc::now(),
        };
        db.put_banner(&banner).await;
        assert_eq!(db.list_banners().await, vec![banner]);

        db.remove_banner("b1").await;
        assert!(db.list_banners().await.is_empty());

        // Removing a missing key is a no-op
        db.remove_banner("b1").await;
    }

    #[tokio::test]
    async fn test_session_roundtrip() {
        let db = Database::new(MemoryStore::new());
        assert!(db.session_user_id().await.is_none());

        db.set_session_user_id("u1").await;
        assert_eq!(db.session_user_id().await.as_deref(), Some("u1"));

        db.clear_session().await;
        assert!(db.session_user_id().await.is_none());
    }

    #[tokio::test]
    async fn test_undecodable_records_are_skipped() {
        let store = MemoryStore::new();
        let db = Database::new(store.clone());

        db.put_user(&user("u1", "a@example.com")).await;
        store.put(Table::Users, "broken", b"{not json".to_vec()).await;

        assert!(db.get_user("broken").await.is_none());
        assert_eq!(db.list_users().await.len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_tables() {
        let store = MemoryStore::new();
        let a = Database::new(store.clone());
        let b = Database::new(store);

        a.set_session_user_id("u1").await;
        assert_eq!(b.session_user_id().await.as_deref(), Some("u1"));
    }
}
