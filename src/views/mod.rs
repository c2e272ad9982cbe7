//! Page view models
//!
//! Each page owns its mock data and local state. Nothing here reads the
//! global store.

pub mod dashboard;
pub mod defi;
pub mod explorer;
pub mod home;
pub mod market;
pub mod rwa;
pub mod wallet;

use serde::Serialize;

/// Direction of a change figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Read the sign of a preformatted change (`+8.7%`, `-1`)
    pub fn of(change: &str) -> Self {
        if change.trim_start().starts_with('-') {
            Trend::Down
        } else {
            Trend::Up
        }
    }
}

/// Headline figure with its change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

impl StatCard {
    pub const fn new(title: &'static str, value: &'static str, change: &'static str) -> Self {
        Self { title, value, change }
    }

    pub fn trend(&self) -> Trend {
        Trend::of(self.change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_from_sign() {
        assert_eq!(Trend::of("+8.7%"), Trend::Up);
        assert_eq!(Trend::of("-1"), Trend::Down);
        assert_eq!(StatCard::new("Active Trades", "7", "-1").trend(), Trend::Down);
    }
}
