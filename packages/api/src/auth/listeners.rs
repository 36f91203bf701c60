//! Auth-change listener registry and its RAII [`Subscription`] guard.
//!
//! The registry remembers the last user it announced. A listener registered
//! after the first announcement is told the current state straight away; later
//! announcements reach listeners only when the user value actually changed.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use store::User;

type Listener = Rc<dyn Fn(Option<User>)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    /// `None` until the first announcement, then the last announced user.
    current: Option<Option<User>>,
}

/// Shared, single-threaded set of auth-change listeners.
#[derive(Clone, Default)]
pub struct AuthListeners {
    inner: Rc<RefCell<Registry>>,
}

impl AuthListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`. It stays registered until the returned guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(Option<User>) + 'static) -> Subscription {
        let listener: Listener = Rc::new(callback);
        let (id, current) = {
            let mut registry = self.inner.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, listener.clone()));
            (id, registry.current.clone())
        };
        tracing::debug!(listener = id, "Auth listener subscribed");

        if let Some(user) = current {
            listener(user);
        }

        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Announce `user` to every listener unless it equals the last announcement.
    pub fn notify(&self, user: Option<User>) {
        let listeners: Vec<Listener> = {
            let mut registry = self.inner.borrow_mut();
            if registry.current.as_ref() == Some(&user) {
                return;
            }
            registry.current = Some(user.clone());
            registry.listeners.iter().map(|(_, l)| l.clone()).collect()
        };

        // Callbacks run outside the borrow so they may subscribe or unsubscribe.
        for listener in listeners {
            listener(user.clone());
        }
    }

    /// Last announced user, or `None` before the first announcement.
    pub fn current(&self) -> Option<Option<User>> {
        self.inner.borrow().current.clone()
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard for one registered listener. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Release the listener now. Same as dropping the guard.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
            tracing::debug!(listener = self.id, "Auth listener released");
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use store::UserRole;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: id.to_string(),
            email: format!("{id}@example.com"),
            password: None,
            avatar: None,
            role: UserRole::User,
            status: None,
            joined_at: Utc::now(),
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<Option<String>>>>, impl Fn(Option<User>) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |u: Option<User>| sink.borrow_mut().push(u.map(|u| u.id)))
    }

    #[test]
    fn test_no_callback_before_first_announcement() {
        let listeners = AuthListeners::new();
        let (seen, callback) = recorder();
        let _sub = listeners.subscribe(callback);
        assert!(seen.borrow().is_empty());
        assert_eq!(listeners.current(), None);

        listeners.notify(None);
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn test_late_subscriber_gets_current_state() {
        let listeners = AuthListeners::new();
        listeners.notify(Some(user("u1")));

        let (seen, callback) = recorder();
        let _sub = listeners.subscribe(callback);
        assert_eq!(*seen.borrow(), vec![Some("u1".to_string())]);
    }

    #[test]
    fn test_identical_announcements_are_delivered_once() {
        let listeners = AuthListeners::new();
        let (seen, callback) = recorder();
        let _sub = listeners.subscribe(callback);

        listeners.notify(Some(user("u1")));
        let same = listeners.current().flatten();
        listeners.notify(same);
        listeners.notify(None);
        listeners.notify(None);

        assert_eq!(*seen.borrow(), vec![Some("u1".to_string()), None]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let listeners = AuthListeners::new();
        let (seen, callback) = recorder();
        let sub = listeners.subscribe(callback);
        assert_eq!(listeners.len(), 1);

        drop(sub);
        assert!(listeners.is_empty());

        listeners.notify(Some(user("u1")));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe_only_releases_its_own_listener() {
        let listeners = AuthListeners::new();
        let (first_seen, first) = recorder();
        let (second_seen, second) = recorder();
        let a = listeners.subscribe(first);
        let _b = listeners.subscribe(second);

        a.unsubscribe();
        assert_eq!(listeners.len(), 1);

        listeners.notify(None);
        assert!(first_seen.borrow().is_empty());
        assert_eq!(*second_seen.borrow(), vec![None]);
    }

    #[test]
    fn test_guard_outliving_registry_is_harmless() {
        let listeners = AuthListeners::new();
        let sub = listeners.subscribe(|_| {});
        drop(listeners);
        drop(sub);
    }
}
