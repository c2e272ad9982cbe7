//! Dashboard page

use serde::Serialize;

use super::StatCard;
use crate::navigation::Section;
use crate::store::TxDirection;

pub const STATS: [StatCard; 4] = [
    StatCard::new("Total Carbon Tokens", "12,847", "+15.3%"),
    StatCard::new("Portfolio Value", "₹2,34,567", "+8.7%"),
    StatCard::new("Verified Projects", "23", "+2"),
    StatCard::new("Active Trades", "7", "-1"),
];

pub const MARKET_INSIGHTS: [StatCard; 4] = [
    StatCard::new("Market Cap", "₹142.9M", "+8.7%"),
    StatCard::new("24h Volume", "₹7.7M", "+12.3%"),
    StatCard::new("Active Projects", "156", "+5"),
    StatCard::new("Avg. Price", "₹18.45", "+2.1%"),
];

/// Recent activity row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: u32,
    pub direction: TxDirection,
    pub amount: &'static str,
    /// Sender, recipient or project, depending on direction
    pub counterparty: &'static str,
    pub when: &'static str,
    pub status: &'static str,
    pub value: &'static str,
}

impl Activity {
    pub fn description(&self) -> String {
        match self.direction {
            TxDirection::Received => format!("From {}", self.counterparty),
            TxDirection::Sent => format!("To {}", self.counterparty),
            TxDirection::Minted => format!("Project: {}", self.counterparty),
        }
    }
}

pub const RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        id: 1,
        direction: TxDirection::Received,
        amount: "150 CCX",
        counterparty: "Forest Conservation Ltd.",
        when: "2 hours ago",
        status: "completed",
        value: "₹2,760",
    },
    Activity {
        id: 2,
        direction: TxDirection::Sent,
        amount: "75 CCX",
        counterparty: "GreenTech Solutions",
        when: "1 day ago",
        status: "completed",
        value: "₹1,380",
    },
    Activity {
        id: 3,
        direction: TxDirection::Minted,
        amount: "500 CCX",
        counterparty: "Amazon Reforestation",
        when: "3 days ago",
        status: "verified",
        value: "₹9,200",
    },
    Activity {
        id: 4,
        direction: TxDirection::Received,
        amount: "200 REDD",
        counterparty: "Coastal Restoration Fund",
        when: "5 days ago",
        status: "completed",
        value: "₹4,550",
    },
];

/// Shortcut tile that jumps to another section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub description: &'static str,
    pub target: Section,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Upload Document",
        description: "Verify new carbon credits",
        target: Section::Upload,
    },
    QuickAction {
        label: "Complete KYC",
        description: "Secure your account",
        target: Section::Kyc,
    },
    QuickAction {
        label: "View Wallet",
        description: "Manage your tokens",
        target: Section::Wallet,
    },
    QuickAction {
        label: "Explore Market",
        description: "Trade carbon credits",
        target: Section::Market,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        title: "First Verification",
        description: "Completed your first carbon credit verification",
        earned: true,
    },
    Achievement {
        title: "Portfolio Builder",
        description: "Reached 10,000+ carbon tokens",
        earned: true,
    },
    Achievement {
        title: "Active Trader",
        description: "Completed 50+ transactions",
        earned: false,
    },
    Achievement {
        title: "Global Impact",
        description: "Contributed to 5+ countries",
        earned: false,
    },
];

pub fn earned_count() -> usize {
    ACHIEVEMENTS.iter().filter(|a| a.earned).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Router;

    #[test]
    fn test_quick_actions_select_sections() {
        let mut router = Router::new();
        for action in QUICK_ACTIONS {
            router.go(action.target);
            assert_eq!(router.rendered(), Some(action.target));
        }
    }

    #[test]
    fn test_activity_description() {
        assert_eq!(RECENT_ACTIVITY[1].description(), "To GreenTech Solutions");
        assert_eq!(RECENT_ACTIVITY[2].description(), "Project: Amazon Reforestation");
        assert_eq!(earned_count(), 2);
    }
}
