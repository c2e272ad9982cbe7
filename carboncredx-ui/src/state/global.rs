//! Global Application State
//!
//! Reactive state shared by every page: the section router, the mobile
//! drawer, the simulation settings and toast messages.

use gloo_timers::callback::Timeout;
use leptos::*;

use carboncredx::navigation::{NavDrawer, Route, Router, Section};
use carboncredx::Config;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Active section
    pub router: RwSignal<Router>,
    /// Mobile navigation drawer
    pub drawer: RwSignal<NavDrawer>,
    /// Simulation timings, wallet identity
    pub config: StoredValue<Config>,
    /// Toast currently on screen
    pub notice: RwSignal<Option<Notice>>,
    /// Clears `notice`; replaced by every new toast
    notice_timer: StoredValue<Option<Timeout>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// How long the toast stays up
    fn lifetime_ms(self) -> u32 {
        match self {
            NoticeKind::Success => 3000,
            NoticeKind::Error => 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    let state = AppState {
        router: create_rw_signal(Router::new()),
        drawer: create_rw_signal(NavDrawer::default()),
        config: store_value(Config::default()),
        notice: create_rw_signal(None),
        notice_timer: store_value(None),
    };

    provide_context(state);
}

impl AppState {
    /// Select a known section
    pub fn go(&self, section: Section) {
        self.router.update(|router| router.go(section));
    }

    /// Select from the drawer, closing it
    pub fn choose(&self, section: Section) {
        let router = self.router;
        self.drawer.update(|drawer| {
            router.update(|r| drawer.choose(r, section));
        });
    }

    /// Current route
    pub fn route(&self) -> Route {
        self.router.with(|router| router.current().clone())
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.router.with(|router| router.is_active(section))
    }

    pub fn show_success(&self, message: &str) {
        self.notify(NoticeKind::Success, message);
    }

    pub fn show_error(&self, message: &str) {
        self.notify(NoticeKind::Error, message);
    }

    pub fn dismiss(&self) {
        self.notice.set(None);
        self.notice_timer.set_value(None);
    }

    /// Replace the current toast; it clears itself after its lifetime
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notice.set(Some(Notice {
            kind,
            text: message.to_string(),
        }));

        let notice = self.notice;
        let clear = Timeout::new(kind.lifetime_ms(), move || notice.set(None));
        self.notice_timer.set_value(Some(clear));
    }
}
