//! # View-state machine for the root controller
//!
//! The site has no router. Which page is on screen is a value in
//! [`AppState`], changed only by applying [`AppEvent`]s. What actually renders
//! is derived from that state by [`AppState::screen`], which applies the
//! access-control fallbacks:
//!
//! | Page | Signed out | Signed in (USER) | Signed in (ADMIN) |
//! |------|-----------|------------------|-------------------|
//! | `Dashboard` | login form | dashboard | dashboard |
//! | `AdminDashboard` | login form | dashboard | admin dashboard |
//! | anything else | the page | the page | the page |
//!
//! While the auth service has not reported yet, every page resolves to
//! [`Screen::Loading`].
//!
//! Nothing in this module touches Dioxus; it is exercised directly by tests.

use store::User;

/// Top-level pages the controller can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageView {
    #[default]
    Home,
    RequestForm,
    Success,
    Login,
    Register,
    Dashboard,
    AdminDashboard,
    Contact,
}

impl PageView {
    pub const ALL: [PageView; 8] = [
        PageView::Home,
        PageView::RequestForm,
        PageView::Success,
        PageView::Login,
        PageView::Register,
        PageView::Dashboard,
        PageView::AdminDashboard,
        PageView::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PageView::Home => "الرئيسية",
            PageView::RequestForm => "اطلب تصميمك",
            PageView::Success => "تم الإرسال",
            PageView::Login => "تسجيل الدخول",
            PageView::Register => "إنشاء حساب",
            PageView::Dashboard => "لوحة التحكم",
            PageView::AdminDashboard => "لوحة الإدارة",
            PageView::Contact => "تواصل معنا",
        }
    }
}

/// Which of the two auth forms to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    /// The page the "switch mode" link leads to.
    pub fn other_page(self) -> PageView {
        match self {
            AuthMode::Login => PageView::Register,
            AuthMode::Register => PageView::Login,
        }
    }
}

/// Something that happened which may change the view state.
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    /// The auth service reported the current user.
    AuthChanged(Option<User>),
    /// The hero's "start your project" button.
    HeroStart,
    /// The auth form logged in or registered this user.
    AuthSucceeded(User),
    /// The dashboard saved a profile change.
    UserUpdated(User),
    /// The external logout completed.
    LoggedOut,
    /// Direct navigation (navbar, auth mode switch, success page buttons).
    Navigate(PageView),
    /// The request form stored a request.
    RequestSubmitted,
    /// The request form was abandoned.
    RequestCancelled,
}

/// State owned by the root controller.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub current_page: PageView,
    pub user: Option<User>,
    pub auth_loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_page: PageView::Home,
            user: None,
            auth_loading: true,
        }
    }
}

impl AppState {
    /// Apply one event.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::AuthChanged(user) => {
                self.user = user;
                self.auth_loading = false;
            }
            AppEvent::HeroStart => {
                self.current_page = if self.user.is_some() {
                    PageView::RequestForm
                } else {
                    PageView::Register
                };
            }
            AppEvent::AuthSucceeded(user) => {
                self.current_page = landing_page(&user);
                self.user = Some(user);
            }
            AppEvent::UserUpdated(user) => {
                self.user = Some(user);
            }
            AppEvent::LoggedOut => {
                self.user = None;
                self.current_page = PageView::Home;
            }
            AppEvent::Navigate(page) => {
                self.current_page = page;
            }
            AppEvent::RequestSubmitted => {
                self.current_page = PageView::Success;
            }
            AppEvent::RequestCancelled => {
                self.current_page = PageView::Home;
            }
        }
        tracing::debug!(
            page = ?self.current_page,
            signed_in = self.user.is_some(),
            "View state updated"
        );
    }

    /// What the controller should render right now.
    pub fn screen(&self) -> Screen {
        if self.auth_loading {
            Screen::Loading
        } else {
            Screen::Page(View::select(self.current_page, self.user.as_ref()))
        }
    }
}

/// Dashboard a user lands on after logging in.
pub fn landing_page(user: &User) -> PageView {
    if user.is_admin() {
        PageView::AdminDashboard
    } else {
        PageView::Dashboard
    }
}

/// Where the success page's follow-up button leads.
pub fn success_follow_up(signed_in: bool) -> PageView {
    if signed_in {
        PageView::Dashboard
    } else {
        PageView::RequestForm
    }
}

/// The component the controller renders for a page.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Hero,
    Contact,
    Auth(AuthMode),
    RequestForm(Option<User>),
    Success { signed_in: bool },
    Dashboard(User),
    AdminDashboard(User),
}

impl View {
    /// Resolve a page against the current user, applying role fallbacks.
    pub fn select(page: PageView, user: Option<&User>) -> View {
        match page {
            PageView::Home => View::Hero,
            PageView::Contact => View::Contact,
            PageView::Login => View::Auth(AuthMode::Login),
            PageView::Register => View::Auth(AuthMode::Register),
            PageView::RequestForm => View::RequestForm(user.cloned()),
            PageView::Success => View::Success {
                signed_in: user.is_some(),
            },
            PageView::Dashboard => match user {
                Some(user) => View::Dashboard(user.clone()),
                None => View::Auth(AuthMode::Login),
            },
            PageView::AdminDashboard => match user {
                Some(user) if user.is_admin() => View::AdminDashboard(user.clone()),
                Some(user) => View::Dashboard(user.clone()),
                None => View::Auth(AuthMode::Login),
            },
        }
    }
}

/// Top-level render decision.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Loading,
    Page(View),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use store::UserRole;

    fn user(role: UserRole) -> User {
        User {
            id: "u1".to_string(),
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            password: None,
            avatar: None,
            role,
            status: None,
            joined_at: Utc::now(),
        }
    }

    fn ready(page: PageView, user: Option<User>) -> AppState {
        AppState {
            current_page: page,
            user,
            auth_loading: false,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.current_page, PageView::Home);
        assert!(state.user.is_none());
        assert!(state.auth_loading);
    }

    #[test]
    fn test_auth_change_sets_user_and_clears_loading() {
        let member = user(UserRole::User);
        let mut state = AppState::default();
        state.apply(AppEvent::AuthChanged(Some(member.clone())));
        assert_eq!(state.user, Some(member));
        assert!(!state.auth_loading);
        assert_eq!(state.current_page, PageView::Home);

        state.apply(AppEvent::AuthChanged(None));
        assert!(state.user.is_none());
        assert!(!state.auth_loading);
    }

    #[test]
    fn test_loading_hides_every_page() {
        for page in PageView::ALL {
            for u in [None, Some(user(UserRole::User)), Some(user(UserRole::Admin))] {
                let state = AppState {
                    current_page: page,
                    user: u,
                    auth_loading: true,
                };
                assert_eq!(state.screen(), Screen::Loading, "{page:?}");
            }
        }
    }

    #[test]
    fn test_login_lands_on_role_dashboard() {
        let admin = user(UserRole::Admin);
        let mut state = ready(PageView::Login, None);
        state.apply(AppEvent::AuthSucceeded(admin.clone()));
        assert_eq!(state.current_page, PageView::AdminDashboard);
        assert_eq!(state.screen(), Screen::Page(View::AdminDashboard(admin)));

        let member = user(UserRole::User);
        let mut state = ready(PageView::Register, None);
        state.apply(AppEvent::AuthSucceeded(member.clone()));
        assert_eq!(state.current_page, PageView::Dashboard);
        assert_eq!(state.screen(), Screen::Page(View::Dashboard(member)));
    }

    #[test]
    fn test_admin_dashboard_fallbacks() {
        assert_eq!(
            View::select(PageView::AdminDashboard, None),
            View::select(PageView::Login, None)
        );

        let member = user(UserRole::User);
        assert_eq!(
            View::select(PageView::AdminDashboard, Some(&member)),
            View::select(PageView::Dashboard, Some(&member))
        );
        assert_eq!(
            View::select(PageView::AdminDashboard, Some(&member)),
            View::Dashboard(member)
        );
    }

    #[test]
    fn test_dashboard_requires_user() {
        assert_eq!(
            View::select(PageView::Dashboard, None),
            View::Auth(AuthMode::Login)
        );
        let admin = user(UserRole::Admin);
        assert_eq!(
            View::select(PageView::Dashboard, Some(&admin)),
            View::Dashboard(admin)
        );
    }

    #[test]
    fn test_ungated_pages_render_regardless_of_user() {
        let member = user(UserRole::User);
        for u in [None, Some(&member)] {
            assert_eq!(View::select(PageView::Home, u), View::Hero);
            assert_eq!(View::select(PageView::Contact, u), View::Contact);
            assert_eq!(
                View::select(PageView::Register, u),
                View::Auth(AuthMode::Register)
            );
            assert_eq!(
                View::select(PageView::RequestForm, u),
                View::RequestForm(u.cloned())
            );
        }
    }

    #[test]
    fn test_logout_from_any_page() {
        for page in PageView::ALL {
            let mut state = ready(page, Some(user(UserRole::Admin)));
            state.apply(AppEvent::LoggedOut);
            assert_eq!(state.current_page, PageView::Home);
            assert!(state.user.is_none());
        }
    }

    #[test]
    fn test_hero_start() {
        let mut state = ready(PageView::Home, None);
        state.apply(AppEvent::HeroStart);
        assert_eq!(state.current_page, PageView::Register);

        let mut state = ready(PageView::Home, Some(user(UserRole::User)));
        state.apply(AppEvent::HeroStart);
        assert_eq!(state.current_page, PageView::RequestForm);
    }

    #[test]
    fn test_request_form_flow() {
        let mut state = ready(PageView::RequestForm, None);
        state.apply(AppEvent::RequestSubmitted);
        assert_eq!(state.current_page, PageView::Success);
        assert_eq!(
            state.screen(),
            Screen::Page(View::Success { signed_in: false })
        );

        // Signed out: "submit another" goes back to the form
        state.apply(AppEvent::Navigate(success_follow_up(false)));
        assert_eq!(state.current_page, PageView::RequestForm);

        state.apply(AppEvent::RequestCancelled);
        assert_eq!(state.current_page, PageView::Home);
    }

    #[test]
    fn test_success_continue_with_user() {
        let member = user(UserRole::User);
        let mut state = ready(PageView::Success, Some(member.clone()));
        assert_eq!(
            state.screen(),
            Screen::Page(View::Success { signed_in: true })
        );
        state.apply(AppEvent::Navigate(success_follow_up(true)));
        assert_eq!(state.current_page, PageView::Dashboard);
        assert_eq!(state.screen(), Screen::Page(View::Dashboard(member)));
    }

    #[test]
    fn test_navigate_is_unguarded() {
        let mut state = ready(PageView::Home, None);
        state.apply(AppEvent::Navigate(PageView::AdminDashboard));
        assert_eq!(state.current_page, PageView::AdminDashboard);
        assert_eq!(state.screen(), Screen::Page(View::Auth(AuthMode::Login)));
    }

    #[test]
    fn test_user_update_keeps_page() {
        let member = user(UserRole::User);
        let mut state = ready(PageView::Dashboard, Some(member.clone()));
        let renamed = User {
            name: "Sara A.".to_string(),
            ..member
        };
        state.apply(AppEvent::UserUpdated(renamed.clone()));
        assert_eq!(state.current_page, PageView::Dashboard);
        assert_eq!(state.user, Some(renamed));
    }

    #[test]
    fn test_auth_mode_switch_targets() {
        assert_eq!(AuthMode::Login.other_page(), PageView::Register);
        assert_eq!(AuthMode::Register.other_page(), PageView::Login);
    }
}
