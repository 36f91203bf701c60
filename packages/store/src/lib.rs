//! Records, storage and site configuration shared by every crate in the workspace.

pub mod config;
pub mod database;
pub mod models;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod idb;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use idb::IdbStore;

pub use config::{AuthPolicy, SiteConfig};
pub use database::{Database, RecordStore, Table};
pub use models::{
    new_id, Banner, DesignRequest, Message, ProjectType, RequestStatus, User, UserRole, UserStatus,
};
