//! # Domain records for the agency site
//!
//! Plain data shared by every layer of the workspace. The records serialise with
//! camelCase field names and SCREAMING_SNAKE_CASE enum values, so a stored
//! record reads the same way the site's original JSON did.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A registered account. `role` decides which dashboard the account sees; `status` marks banned accounts. |
//! | [`DesignRequest`] | A project request submitted through the request form, by a signed-in user or anonymously. |
//! | [`Message`] | A contact-form submission. |
//! | [`Banner`] | A promotional image shown on the home page while active. |
//!
//! Records carry no behaviour beyond small predicates. Lifecycle rules such as
//! [`RequestStatus::can_transition_to`] are enforced by the data service, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authorization attribute of a [`User`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// Moderation state of a [`User`]. Accounts created before moderation existed have none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Banned,
}

/// A registered account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string while stored. Always `None` on copies handed to the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub status: Option<UserStatus>,
    pub joined_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_banned(&self) -> bool {
        self.status == Some(UserStatus::Banned)
    }

    /// Copy of the record without the password hash.
    pub fn without_password(&self) -> User {
        User {
            password: None,
            ..self.clone()
        }
    }

    /// First character of the name, used for avatar placeholders.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Kind of work requested in a [`DesignRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    VoiceAgencies,
    Logo,
    Branding,
    WebDesign,
    SocialMedia,
    VideoEditing,
    Other,
}

impl ProjectType {
    /// Every project type, in the order the request form lists them.
    pub const ALL: [ProjectType; 7] = [
        ProjectType::VoiceAgencies,
        ProjectType::Logo,
        ProjectType::Branding,
        ProjectType::WebDesign,
        ProjectType::SocialMedia,
        ProjectType::VideoEditing,
        ProjectType::Other,
    ];

    /// Display label shown to visitors.
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::VoiceAgencies => "تصاميم وكالات وإدارات صوتية",
            ProjectType::Logo => "تصميم شعار",
            ProjectType::Branding => "هوية بصرية",
            ProjectType::WebDesign => "تصميم مواقع UI/UX",
            ProjectType::SocialMedia => "تصاميم سوشيال ميديا",
            ProjectType::VideoEditing => "مونتاج فيديو",
            ProjectType::Other => "أخرى",
        }
    }

    /// Stable key used as the `<option>` value in forms.
    pub fn key(self) -> &'static str {
        match self {
            ProjectType::VoiceAgencies => "VOICE_AGENCIES",
            ProjectType::Logo => "LOGO",
            ProjectType::Branding => "BRANDING",
            ProjectType::WebDesign => "WEB_DESIGN",
            ProjectType::SocialMedia => "SOCIAL_MEDIA",
            ProjectType::VideoEditing => "VIDEO_EDITING",
            ProjectType::Other => "OTHER",
        }
    }

    pub fn from_key(key: &str) -> Option<ProjectType> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Lifecycle state of a [`DesignRequest`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl RequestStatus {
    /// Whether a request may move from `self` to `next`.
    ///
    /// PENDING → IN_PROGRESS | REJECTED, IN_PROGRESS → COMPLETED | REJECTED.
    /// COMPLETED and REJECTED are terminal.
    pub fn can_transition_to(self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (RequestStatus::Pending, RequestStatus::InProgress)
                | (RequestStatus::Pending, RequestStatus::Rejected)
                | (RequestStatus::InProgress, RequestStatus::Completed)
                | (RequestStatus::InProgress, RequestStatus::Rejected)
        )
    }

    /// Statuses reachable in one step from `self`.
    pub fn next_statuses(self) -> &'static [RequestStatus] {
        match self {
            RequestStatus::Pending => &[RequestStatus::InProgress, RequestStatus::Rejected],
            RequestStatus::InProgress => &[RequestStatus::Completed, RequestStatus::Rejected],
            RequestStatus::Completed | RequestStatus::Rejected => &[],
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next_statuses().is_empty()
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "قيد المراجعة",
            RequestStatus::InProgress => "قيد التنفيذ",
            RequestStatus::Completed => "مكتمل",
            RequestStatus::Rejected => "مرفوض",
        }
    }
}

/// A project request submitted through the request form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequest {
    pub id: String,
    /// Owner when submitted while signed in.
    #[serde(default)]
    pub user_id: Option<String>,
    pub client_name: String,
    pub email: String,
    pub project_type: ProjectType,
    pub description: String,
    #[serde(default)]
    pub budget: Option<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

/// A contact-form submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub read: bool,
}

/// A promotional entry on the home page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Fresh UUID v4 string for a new record.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
