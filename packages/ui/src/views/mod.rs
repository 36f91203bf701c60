mod loading;
pub use loading::LoadingScreen;

mod hero;
pub use hero::Hero;

mod contact;
pub use contact::Contact;

mod auth_form;
pub use auth_form::AuthForm;

mod request_form;
pub use request_form::RequestForm;

mod success;
pub use success::Success;

mod dashboard;
pub use dashboard::Dashboard;

mod admin_dashboard;
pub use admin_dashboard::{unread_count, AdminDashboard, AdminTab};
