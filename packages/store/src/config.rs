//! # Site configuration: `site.toml`
//!
//! Static settings the site is built with: branding, the contact details shown
//! on the contact page and footer, the admin account seeded into an empty
//! database, the password policy, and the banners seeded on first run.
//!
//! ## Structure
//!
//! ```toml
//! [site]
//! name = "Flex Design Academy"
//! tagline = "..."
//!
//! [contact]
//! phone = "+966 50 000 0000"
//! email = "hello@flexdesign.academy"
//! address = "..."
//!
//! [admin]
//! name = "..."
//! email = "admin@flexdesign.academy"
//! password = "change-me"
//!
//! [auth]
//! min_password_length = 6
//!
//! [[banners]]
//! title = "..."
//! image_url = "https://..."
//! ```
//!
//! Every section has serde defaults, so a missing or partial file is
//! equivalent to the default configuration for the missing parts.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub admin: AdminAccount,
    #[serde(default)]
    pub auth: AuthPolicy,
    #[serde(default)]
    pub banners: Vec<BannerSeed>,
}

/// Branding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

fn default_site_name() -> String {
    "Flex Design Academy".to_string()
}

fn default_tagline() -> String {
    "نحوّل أفكارك إلى تصاميم تترك أثراً".to_string()
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_tagline(),
        }
    }
}

/// Contact details shown on the contact page and in the footer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

/// Admin account created when the database has no user with this email.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminAccount {
    #[serde(default = "default_admin_name")]
    pub name: String,
    #[serde(default = "default_admin_email")]
    pub email: String,
    #[serde(default = "default_admin_password")]
    pub password: String,
}

fn default_admin_name() -> String {
    "مدير الموقع".to_string()
}

fn default_admin_email() -> String {
    "admin@flexdesign.academy".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

impl Default for AdminAccount {
    fn default() -> Self {
        Self {
            name: default_admin_name(),
            email: default_admin_email(),
            password: default_admin_password(),
        }
    }
}

/// Rules applied when accounts are registered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthPolicy {
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

fn default_min_password_length() -> usize {
    6
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
        }
    }
}

/// A banner inserted when the banner table is empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BannerSeed {
    pub title: String,
    pub image_url: String,
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
