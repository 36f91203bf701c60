//! # Mock backend: the site's auth-and-data service, run in-process
//!
//! [`MockBackend`] implements [`AuthService`] and [`DataService`] on top of a
//! [`Database`]. It stands in for a hosted auth/database product: accounts,
//! sessions and records all live in the configured [`RecordStore`]
//! (IndexedDB in the browser, memory elsewhere).
//!
//! ## Session lifecycle
//!
//! 1. [`MockBackend::seed`] creates the configured admin account and seed
//!    banners when they are missing.
//! 2. [`MockBackend::restore_session`] resolves the persisted session and
//!    makes the first auth announcement. Until then subscribers hear nothing,
//!    which is what keeps the UI on its loading screen.
//! 3. `login`/`register` persist the session and announce the user; `logout`
//!    clears it and announces `None`.
//!
//! Users handed out by this module never carry their password hash.

use chrono::Utc;
use store::config::{AuthPolicy, SiteConfig};
use store::models::new_id;
use store::{
    Banner, Database, DesignRequest, Message, RecordStore, RequestStatus, User, UserRole,
    UserStatus,
};

use crate::auth::{hash_password, verify_password, AuthListeners, Subscription};
use crate::service::{AuthService, DataService, NewMessage, NewRequest, ProfileUpdate};
use crate::ApiError;

/// In-process implementation of the site's auth-and-data service.
#[derive(Clone)]
pub struct MockBackend<S: RecordStore> {
    db: Database<S>,
    listeners: AuthListeners,
    policy: AuthPolicy,
}

impl<S: RecordStore> MockBackend<S> {
    pub fn new(db: Database<S>, policy: AuthPolicy) -> Self {
        Self {
            db,
            listeners: AuthListeners::new(),
            policy,
        }
    }

    /// Number of live auth subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Create the configured admin account and seed banners when missing.
    pub async fn seed(&self, config: &SiteConfig) -> Result<(), ApiError> {
        let admin = &config.admin;
        if self.db.find_user_by_email(&admin.email).await.is_none() {
            let user = User {
                id: new_id(),
                name: admin.name.clone(),
                email: normalize_email(&admin.email),
                password: Some(hash_password(&admin.password)?),
                avatar: None,
                role: UserRole::Admin,
                status: Some(UserStatus::Active),
                joined_at: Utc::now(),
            };
            self.db.put_user(&user).await;
            tracing::info!("Seeded admin account {}", user.email);
        }

        // Banners are seeded once per database; later deletions stick.
        if !self.db.banners_seeded().await {
            if self.db.list_banners().await.is_empty() {
                for seed in &config.banners {
                    self.insert_banner(&seed.title, &seed.image_url).await?;
                }
            }
            self.db.mark_banners_seeded().await;
        }
        Ok(())
    }

    /// Resolve the persisted session and make the first auth announcement.
    pub async fn restore_session(&self) -> Option<User> {
        let user = match self.db.session_user_id().await {
            Some(id) => match self.db.get_user(&id).await {
                Some(user) if user.is_banned() => {
                    tracing::info!("Dropping session of banned user {}", user.email);
                    self.db.clear_session().await;
                    None
                }
                Some(user) => Some(user.without_password()),
                None => {
                    tracing::warn!("Session refers to unknown user {}", id);
                    self.db.clear_session().await;
                    None
                }
            },
            None => None,
        };
        self.listeners.notify(user.clone());
        user
    }

    async fn start_session(&self, user: &User) -> User {
        self.db.set_session_user_id(&user.id).await;
        let public = user.without_password();
        self.listeners.notify(Some(public.clone()));
        public
    }

    async fn insert_banner(&self, title: &str, image_url: &str) -> Result<Banner, ApiError> {
        let title = title.trim();
        let image_url = image_url.trim();
        if title.is_empty() || image_url.is_empty() {
            return Err(ApiError::validation("عنوان البانر ورابط الصورة مطلوبان"));
        }
        let banner = Banner {
            id: new_id(),
            image_url: image_url.to_string(),
            title: title.to_string(),
            is_active: true,
            created_at: Utc::now(),
        };
        self.db.put_banner(&banner).await;
        Ok(banner)
    }

    fn validate_registration(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        if name.is_empty() {
            return Err(ApiError::validation("الاسم مطلوب"));
        }
        if !is_plausible_email(email) {
            return Err(ApiError::validation("يرجى إدخال بريد إلكتروني صحيح"));
        }
        if password.chars().count() < self.policy.min_password_length {
            return Err(ApiError::validation(format!(
                "كلمة المرور يجب أن تكون {} أحرف على الأقل",
                self.policy.min_password_length
            )));
        }
        Ok(())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Loose shape check: a non-empty local part and a dotted domain.
pub fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl<S: RecordStore> AuthService for MockBackend<S> {
    fn subscribe(&self, callback: impl Fn(Option<User>) + 'static) -> Subscription {
        self.listeners.subscribe(callback)
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let Some(user) = self.db.find_user_by_email(email).await else {
            return Err(ApiError::InvalidCredentials);
        };
        let matches = user
            .password
            .as_deref()
            .is_some_and(|hash| verify_password(password, hash));
        if !matches {
            return Err(ApiError::InvalidCredentials);
        }
        if user.is_banned() {
            return Err(ApiError::AccountBanned);
        }

        tracing::info!("User {} logged in", user.email);
        Ok(self.start_session(&user).await)
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let name = name.trim();
        let email = normalize_email(email);
        self.validate_registration(name, &email, password)?;

        if self.db.find_user_by_email(&email).await.is_some() {
            return Err(ApiError::EmailTaken);
        }

        let user = User {
            id: new_id(),
            name: name.to_string(),
            email,
            password: Some(hash_password(password)?),
            avatar: None,
            role: UserRole::User,
            status: Some(UserStatus::Active),
            joined_at: Utc::now(),
        };
        self.db.put_user(&user).await;

        tracing::info!("Registered user {}", user.email);
        Ok(self.start_session(&user).await)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.db.clear_session().await;
        self.listeners.notify(None);
        Ok(())
    }
}

impl<S: RecordStore> DataService for MockBackend<S> {
    async fn create_request(&self, request: NewRequest) -> Result<DesignRequest, ApiError> {
        let client_name = request.client_name.trim().to_string();
        let email = normalize_email(&request.email);
        let description = request.description.trim().to_string();
        if client_name.is_empty() || description.is_empty() {
            return Err(ApiError::validation("يرجى تعبئة الاسم ووصف المشروع"));
        }
        if !is_plausible_email(&email) {
            return Err(ApiError::validation("يرجى إدخال بريد إلكتروني صحيح"));
        }

        let request = DesignRequest {
            id: new_id(),
            user_id: request.user_id,
            client_name,
            email,
            project_type: request.project_type,
            description,
            budget: non_empty(request.budget),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        };
        self.db.put_request(&request).await;
        tracing::info!(
            "New {:?} request {} from {}",
            request.project_type,
            request.id,
            request.email
        );
        Ok(request)
    }

    async fn list_requests(&self) -> Vec<DesignRequest> {
        self.db.list_requests().await
    }

    async fn list_requests_for_user(&self, user_id: &str) -> Vec<DesignRequest> {
        self.db.list_requests_for_user(user_id).await
    }

    async fn update_request_status(
        &self,
        id: &str,
        status: RequestStatus,
    ) -> Result<DesignRequest, ApiError> {
        let mut request = self
            .db
            .get_request(id)
            .await
            .ok_or_else(|| ApiError::not_found("request", id))?;
        if !request.status.can_transition_to(status) {
            return Err(ApiError::InvalidTransition {
                from: request.status,
                to: status,
            });
        }
        request.status = status;
        self.db.put_request(&request).await;
        Ok(request)
    }

    async fn send_message(&self, message: NewMessage) -> Result<Message, ApiError> {
        let name = message.name.trim().to_string();
        let phone = message.phone.trim().to_string();
        let text = message.text.trim().to_string();
        if name.is_empty() || phone.is_empty() || text.is_empty() {
            return Err(ApiError::validation("يرجى تعبئة جميع الحقول"));
        }

        let message = Message {
            id: new_id(),
            name,
            phone,
            text,
            date: Utc::now(),
            read: false,
        };
        self.db.put_message(&message).await;
        Ok(message)
    }

    async fn list_messages(&self) -> Vec<Message> {
        self.db.list_messages().await
    }

    async fn mark_message_read(&self, id: &str) -> Result<Message, ApiError> {
        let mut message = self
            .db
            .get_message(id)
            .await
            .ok_or_else(|| ApiError::not_found("message", id))?;
        if !message.read {
            message.read = true;
            self.db.put_message(&message).await;
        }
        Ok(message)
    }

    async fn list_banners(&self) -> Vec<Banner> {
        self.db.list_banners().await
    }

    async fn active_banners(&self) -> Vec<Banner> {
        self.db
            .list_banners()
            .await
            .into_iter()
            .filter(|b| b.is_active)
            .collect()
    }

    async fn add_banner(&self, title: &str, image_url: &str) -> Result<Banner, ApiError> {
        self.insert_banner(title, image_url).await
    }

    async fn set_banner_active(&self, id: &str, active: bool) -> Result<Banner, ApiError> {
        let mut banner = self
            .db
            .get_banner(id)
            .await
            .ok_or_else(|| ApiError::not_found("banner", id))?;
        banner.is_active = active;
        self.db.put_banner(&banner).await;
        Ok(banner)
    }

    async fn delete_banner(&self, id: &str) -> Result<(), ApiError> {
        if self.db.get_banner(id).await.is_none() {
            return Err(ApiError::not_found("banner", id));
        }
        self.db.remove_banner(id).await;
        Ok(())
    }

    async fn list_users(&self) -> Vec<User> {
        self.db
            .list_users()
            .await
            .iter()
            .map(User::without_password)
            .collect()
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User, ApiError> {
        let mut user = self
            .db
            .get_user(user_id)
            .await
            .ok_or_else(|| ApiError::not_found("user", user_id))?;
        let name = update.name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("الاسم مطلوب"));
        }
        user.name = name.to_string();
        user.avatar = non_empty(update.avatar);
        self.db.put_user(&user).await;

        let public = user.without_password();
        if self.db.session_user_id().await.as_deref() == Some(user_id) {
            self.listeners.notify(Some(public.clone()));
        }
        Ok(public)
    }

    async fn set_user_status(&self, user_id: &str, status: UserStatus) -> Result<User, ApiError> {
        let mut user = self
            .db
            .get_user(user_id)
            .await
            .ok_or_else(|| ApiError::not_found("user", user_id))?;
        if user.is_admin() {
            return Err(ApiError::Forbidden);
        }
        user.status = Some(status);
        self.db.put_user(&user).await;

        // A banned user loses a live session immediately.
        if status == UserStatus::Banned
            && self.db.session_user_id().await.as_deref() == Some(user_id)
        {
            self.db.clear_session().await;
            self.listeners.notify(None);
        }
        Ok(user.without_password())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use store::{MemoryStore, ProjectType};

    fn backend() -> MockBackend<MemoryStore> {
        MockBackend::new(Database::new(MemoryStore::new()), AuthPolicy::default())
    }

    fn new_request(user_id: Option<&str>) -> NewRequest {
        NewRequest {
            user_id: user_id.map(str::to_string),
            client_name: "سارة".to_string(),
            email: "sara@example.com".to_string(),
            project_type: ProjectType::Branding,
            description: "هوية كاملة لمقهى".to_string(),
            budget: Some("  ".to_string()),
        }
    }

    fn record_auth(backend: &MockBackend<MemoryStore>) -> (Rc<RefCell<Vec<Option<String>>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let sub = backend.subscribe(move |u| sink.borrow_mut().push(u.map(|u| u.email)));
        (seen, sub)
    }

    #[tokio::test]
    async fn test_register_logs_in_and_hides_password() {
        let backend = backend();
        let (seen, _sub) = record_auth(&backend);

        let user = backend
            .register(" Sara ", "Sara@Example.com", "secret1")
            .await
            .unwrap();

        assert_eq!(user.name, "Sara");
        assert_eq!(user.email, "sara@example.com");
        assert_eq!(user.role, UserRole::User);
        assert!(user.password.is_none());
        assert_eq!(*seen.borrow(), vec![Some("sara@example.com".to_string())]);

        // Stored copy keeps the hash
        let stored = backend.db.get_user(&user.id).await.unwrap();
        assert!(stored.password.unwrap().starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicates_and_bad_input() {
        let backend = backend();
        backend.register("Sara", "sara@example.com", "secret1").await.unwrap();

        assert_eq!(
            backend.register("Other", "SARA@example.com", "secret1").await,
            Err(ApiError::EmailTaken)
        );
        assert!(matches!(
            backend.register("", "x@example.com", "secret1").await,
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            backend.register("X", "not-an-email", "secret1").await,
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            backend.register("X", "x@example.com", "123").await,
            Err(ApiError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_login_checks_password() {
        let backend = backend();
        backend.register("Sara", "sara@example.com", "secret1").await.unwrap();
        backend.logout().await.unwrap();

        assert_eq!(
            backend.login("sara@example.com", "wrong").await,
            Err(ApiError::InvalidCredentials)
        );
        assert_eq!(
            backend.login("nobody@example.com", "secret1").await,
            Err(ApiError::InvalidCredentials)
        );

        let user = backend.login("SARA@example.com", "secret1").await.unwrap();
        assert_eq!(user.email, "sara@example.com");
        assert_eq!(backend.db.session_user_id().await, Some(user.id));
    }

    #[tokio::test]
    async fn test_seed_creates_admin_once() {
        let backend = backend();
        let mut config = SiteConfig::default();
        config.banners.push(store::config::BannerSeed {
            title: "عرض".to_string(),
            image_url: "https://example.com/a.png".to_string(),
        });

        backend.seed(&config).await.unwrap();
        backend.seed(&config).await.unwrap();

        let users = backend.list_users().await;
        assert_eq!(users.len(), 1);
        assert!(users[0].is_admin());
        assert!(users[0].password.is_none());
        assert_eq!(backend.list_banners().await.len(), 1);

        let admin = backend
            .login(&config.admin.email, &config.admin.password)
            .await
            .unwrap();
        assert!(admin.is_admin());
    }

    #[tokio::test]
    async fn test_restore_session_announces_once_resolved() {
        let backend = backend();
        let user = backend.register("Sara", "sara@example.com", "secret1").await.unwrap();

        // A fresh backend over the same storage, as after a page reload
        let reloaded = MockBackend::new(backend.db.clone(), AuthPolicy::default());
        let (seen, _sub) = record_auth(&reloaded);
        assert!(seen.borrow().is_empty());

        let restored = reloaded.restore_session().await;
        assert_eq!(restored, Some(user));
        assert_eq!(*seen.borrow(), vec![Some("sara@example.com".to_string())]);
    }

    #[tokio::test]
    async fn test_restore_session_without_session_announces_none() {
        let backend = backend();
        let (seen, _sub) = record_auth(&backend);
        assert_eq!(backend.restore_session().await, None);
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[tokio::test]
    async fn test_logout_announces_none() {
        let backend = backend();
        backend.restore_session().await;
        let (seen, _sub) = record_auth(&backend);
        backend.register("Sara", "sara@example.com", "secret1").await.unwrap();
        backend.logout().await.unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![None, Some("sara@example.com".to_string()), None]
        );
        assert!(backend.db.session_user_id().await.is_none());
    }

    #[tokio::test]
    async fn test_subscription_release() {
        let backend = backend();
        let sub = backend.subscribe(|_| {});
        assert_eq!(backend.listener_count(), 1);
        drop(sub);
        assert_eq!(backend.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_banned_user_cannot_login_and_loses_session() {
        let backend = backend();
        let user = backend.register("Sara", "sara@example.com", "secret1").await.unwrap();
        let (seen, _sub) = record_auth(&backend);

        let banned = backend.set_user_status(&user.id, UserStatus::Banned).await.unwrap();
        assert!(banned.is_banned());
        assert_eq!(seen.borrow().last(), Some(&None));

        assert_eq!(
            backend.login("sara@example.com", "secret1").await,
            Err(ApiError::AccountBanned)
        );

        backend.set_user_status(&user.id, UserStatus::Active).await.unwrap();
        assert!(backend.login("sara@example.com", "secret1").await.is_ok());
    }

    #[tokio::test]
    async fn test_admin_cannot_be_banned() {
        let backend = backend();
        backend.seed(&SiteConfig::default()).await.unwrap();
        let admin = backend.list_users().await.remove(0);
        assert_eq!(
            backend.set_user_status(&admin.id, UserStatus::Banned).await,
            Err(ApiError::Forbidden)
        );
    }

    #[tokio::test]
    async fn test_create_request_starts_pending() {
        let backend = backend();
        let request = backend.create_request(new_request(Some("u1"))).await.unwrap();

        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.user_id.as_deref(), Some("u1"));
        assert_eq!(request.budget, None);
        assert_eq!(backend.list_requests_for_user("u1").await, vec![request]);

        let anonymous = backend.create_request(new_request(None)).await.unwrap();
        assert!(anonymous.user_id.is_none());
        assert_eq!(backend.list_requests().await.len(), 2);

        let mut empty = new_request(None);
        empty.description = " ".to_string();
        assert!(matches!(
            backend.create_request(empty).await,
            Err(ApiError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_request_status_follows_lifecycle() {
        let backend = backend();
        let request = backend.create_request(new_request(None)).await.unwrap();

        assert_eq!(
            backend
                .update_request_status(&request.id, RequestStatus::Completed)
                .await,
            Err(ApiError::InvalidTransition {
                from: RequestStatus::Pending,
                to: RequestStatus::Completed,
            })
        );

        let started = backend
            .update_request_status(&request.id, RequestStatus::InProgress)
            .await
            .unwrap();
        assert_eq!(started.status, RequestStatus::InProgress);

        let done = backend
            .update_request_status(&request.id, RequestStatus::Completed)
            .await
            .unwrap();
        assert_eq!(done.status, RequestStatus::Completed);

        assert!(backend
            .update_request_status(&request.id, RequestStatus::Rejected)
            .await
            .is_err());
        assert_eq!(
            backend.update_request_status("missing", RequestStatus::InProgress).await,
            Err(ApiError::not_found("request", "missing"))
        );
    }

    #[tokio::test]
    async fn test_messages_marked_read_once() {
        let backend = backend();
        let message = backend
            .send_message(NewMessage {
                name: "عمر".to_string(),
                phone: "0500000000".to_string(),
                text: "أريد تصميم شعار".to_string(),
            })
            .await
            .unwrap();
        assert!(!message.read);

        let read = backend.mark_message_read(&message.id).await.unwrap();
        assert!(read.read);
        let again = backend.mark_message_read(&message.id).await.unwrap();
        assert_eq!(again, read);

        assert!(backend
            .send_message(NewMessage {
                name: String::new(),
                phone: "1".to_string(),
                text: "x".to_string(),
            })
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_banner_management() {
        let backend = backend();
        let banner = backend
            .add_banner("عرض رمضان", "https://example.com/r.png")
            .await
            .unwrap();
        assert!(banner.is_active);
        assert_eq!(backend.active_banners().await.len(), 1);

        backend.set_banner_active(&banner.id, false).await.unwrap();
        assert!(backend.active_banners().await.is_empty());
        assert_eq!(backend.list_banners().await.len(), 1);

        backend.delete_banner(&banner.id).await.unwrap();
        assert!(backend.list_banners().await.is_empty());
        assert!(backend.delete_banner(&banner.id).await.is_err());
        assert!(backend.add_banner(" ", "https://example.com").await.is_err());
    }

    #[tokio::test]
    async fn test_update_profile() {
        let backend = backend();
        let user = backend.register("Sara", "sara@example.com", "secret1").await.unwrap();

        let updated = backend
            .update_profile(
                &user.id,
                ProfileUpdate {
                    name: "Sara A.".to_string(),
                    avatar: Some("https://example.com/me.png".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Sara A.");
        assert_eq!(updated.avatar.as_deref(), Some("https://example.com/me.png"));
        assert_eq!(updated.role, user.role);
        assert!(updated.password.is_none());

        assert!(backend
            .update_profile(&user.id, ProfileUpdate::default())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_update_profile_announces_session_user() {
        let backend = backend();
        let user = backend.register("Sara", "sara@example.com", "secret1").await.unwrap();
        let other = backend.register("Omar", "omar@example.com", "secret1").await.unwrap();
        backend.login("sara@example.com", "secret1").await.unwrap();
        let (seen, _sub) = record_auth(&backend);
        let before = seen.borrow().len();

        let update = |name: &str| ProfileUpdate {
            name: name.to_string(),
            avatar: None,
        };

        // Someone else's profile leaves the session alone.
        backend.update_profile(&other.id, update("Omar B.")).await.unwrap();
        assert_eq!(seen.borrow().len(), before);

        let updated = backend.update_profile(&user.id, update("Sara A.")).await.unwrap();
        assert_eq!(seen.borrow().len(), before + 1);
        assert_eq!(backend.listeners.current(), Some(Some(updated)));
    }

    #[tokio::test]
    async fn test_deleted_seed_banners_stay_deleted() {
        let db = Database::new(MemoryStore::new());
        let mut config = SiteConfig::default();
        config.banners.push(store::config::BannerSeed {
            title: "عرض".to_string(),
            image_url: "https://example.com/a.png".to_string(),
        });

        let backend = MockBackend::new(db.clone(), AuthPolicy::default());
        backend.seed(&config).await.unwrap();
        for banner in backend.list_banners().await {
            backend.delete_banner(&banner.id).await.unwrap();
        }

        // A fresh backend over the same records, as after a page reload.
        let reloaded = MockBackend::new(db, AuthPolicy::default());
        reloaded.seed(&config).await.unwrap();
        assert!(reloaded.list_banners().await.is_empty());
    }
}
