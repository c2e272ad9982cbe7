//! Section Router
//!
//! The application shows exactly one section at a time. Selecting a section
//! replaces the current one synchronously; there is no history and no URL.
//! Unknown names are accepted and render no page body.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A top-level page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Dashboard,
    Upload,
    Kyc,
    Wallet,
    Explorer,
    Market,
    Defi,
    Rwa,
}

impl Section {
    /// All sections in navigation order
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Dashboard,
            Section::Upload,
            Section::Kyc,
            Section::Wallet,
            Section::Explorer,
            Section::Market,
            Section::Defi,
            Section::Rwa,
        ]
    }

    /// Stable identifier used by links and the CLI
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Dashboard => "dashboard",
            Section::Upload => "upload",
            Section::Kyc => "kyc",
            Section::Wallet => "wallet",
            Section::Explorer => "explorer",
            Section::Market => "market",
            Section::Defi => "defi",
            Section::Rwa => "rwa",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Dashboard => "Dashboard",
            Section::Upload => "Upload",
            Section::Kyc => "KYC",
            Section::Wallet => "Wallet",
            Section::Explorer => "Explorer",
            Section::Market => "Market",
            Section::Defi => "DeFi",
            Section::Rwa => "RWA",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::all().iter().copied().find(|s| s.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::from_id(s).ok_or_else(|| format!("Unknown section: {}", s))
    }
}

/// What the router currently points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Section(Section),
    /// A name that matches no section; nothing is rendered for it
    Unknown(String),
}

impl Route {
    pub fn section(&self) -> Option<Section> {
        match self {
            Route::Section(section) => Some(*section),
            Route::Unknown(_) => None,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Route::Section(section) => section.id(),
            Route::Unknown(name) => name,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Section(Section::Home)
    }
}

/// Holds the active section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Router {
    current: Route,
}

impl Router {
    /// Start on the home page
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a section by name. Any string is accepted.
    pub fn select(&mut self, name: &str) -> &Route {
        self.current = match Section::from_id(name) {
            Some(section) => Route::Section(section),
            None => Route::Unknown(name.to_string()),
        };
        tracing::debug!(route = %self.current.id(), "Section selected");
        &self.current
    }

    /// Select a known section
    pub fn go(&mut self, section: Section) {
        self.current = Route::Section(section);
        tracing::debug!(route = %section, "Section selected");
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// The section whose page body is rendered, if any
    pub fn rendered(&self) -> Option<Section> {
        self.current.section()
    }

    /// Whether the navigation entry for `section` is highlighted
    pub fn is_active(&self, section: Section) -> bool {
        self.rendered() == Some(section)
    }
}

/// Collapsible navigation drawer used on narrow screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pick an entry: selects the section and closes the drawer
    pub fn choose(&mut self, router: &mut Router, section: Section) {
        router.go(section);
        self.open = false;
    }
}
