//! Capabilities the site's UI needs from its auth-and-data service.
//!
//! [`AuthService`] covers identity: the auth-change feed, login, registration
//! and logout. [`DataService`] covers the records the pages read and write.
//! [`crate::MockBackend`] implements both over a [`store::Database`].

use serde::{Deserialize, Serialize};
use store::{Banner, DesignRequest, Message, ProjectType, RequestStatus, User, UserStatus};

use crate::auth::Subscription;
use crate::ApiError;

/// Identity capabilities.
pub trait AuthService {
    /// Register a callback for auth changes. Dropping the guard unsubscribes.
    fn subscribe(&self, callback: impl Fn(Option<User>) + 'static) -> Subscription;

    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<User, ApiError>>;

    fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<User, ApiError>>;

    fn logout(&self) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

/// Fields collected by the request form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRequest {
    pub user_id: Option<String>,
    pub client_name: String,
    pub email: String,
    pub project_type: ProjectType,
    pub description: String,
    pub budget: Option<String>,
}

/// Fields collected by the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMessage {
    pub name: String,
    pub phone: String,
    pub text: String,
}

/// Editable parts of a user's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    pub avatar: Option<String>,
}

/// Record capabilities.
pub trait DataService {
    fn create_request(
        &self,
        request: NewRequest,
    ) -> impl std::future::Future<Output = Result<DesignRequest, ApiError>>;

    fn list_requests(&self) -> impl std::future::Future<Output = Vec<DesignRequest>>;

    fn list_requests_for_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Vec<DesignRequest>>;

    fn update_request_status(
        &self,
        id: &str,
        status: RequestStatus,
    ) -> impl std::future::Future<Output = Result<DesignRequest, ApiError>>;

    fn send_message(
        &self,
        message: NewMessage,
    ) -> impl std::future::Future<Output = Result<Message, ApiError>>;

    fn list_messages(&self) -> impl std::future::Future<Output = Vec<Message>>;

    fn mark_message_read(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Message, ApiError>>;

    fn list_banners(&self) -> impl std::future::Future<Output = Vec<Banner>>;

    fn active_banners(&self) -> impl std::future::Future<Output = Vec<Banner>>;

    fn add_banner(
        &self,
        title: &str,
        image_url: &str,
    ) -> impl std::future::Future<Output = Result<Banner, ApiError>>;

    fn set_banner_active(
        &self,
        id: &str,
        active: bool,
    ) -> impl std::future::Future<Output = Result<Banner, ApiError>>;

    fn delete_banner(&self, id: &str) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn list_users(&self) -> impl std::future::Future<Output = Vec<User>>;

    fn update_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> impl std::future::Future<Output = Result<User, ApiError>>;

    fn set_user_status(
        &self,
        user_id: &str,
        status: UserStatus,
    ) -> impl std::future::Future<Output = Result<User, ApiError>>;
}
