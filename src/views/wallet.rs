//! Wallet page
//!
//! Balances can be hidden; every amount then renders as [`MASK`].

use serde::Serialize;

use super::Trend;
use crate::clipboard::{self, Clipboard, ClipboardError};
use crate::format::{group_indian, inr, masked, MASK};
use crate::store::TxDirection;

pub const TOTAL_TOKENS: u64 = 12_847;
pub const TOTAL_VALUE: u64 = 234_567;
pub const MONTHLY_CHANGE: &str = "+15.3% from last month";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalletToken {
    pub symbol: &'static str,
    pub name: &'static str,
    pub balance: u64,
    pub value: u64,
    pub change: &'static str,
}

impl WalletToken {
    pub fn trend(&self) -> Trend {
        Trend::of(self.change)
    }
}

pub const HOLDINGS: [WalletToken; 3] = [
    WalletToken {
        symbol: "CCX",
        name: "Carbon Credit Token",
        balance: 8500,
        value: 156_780,
        change: "+12.5%",
    },
    WalletToken {
        symbol: "REDD",
        name: "REDD+ Forest Token",
        balance: 2200,
        value: 45_600,
        change: "+8.2%",
    },
    WalletToken {
        symbol: "AFFOR",
        name: "Afforestation Token",
        balance: 2147,
        value: 32_187,
        change: "-2.1%",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalletTransaction {
    pub id: u32,
    pub direction: TxDirection,
    pub token: &'static str,
    pub amount: u64,
    pub value: u64,
    pub counterparty: &'static str,
    pub when: &'static str,
    pub hash: &'static str,
}

impl WalletTransaction {
    pub fn description(&self) -> String {
        match self.direction {
            TxDirection::Received => format!("From {}", self.counterparty),
            TxDirection::Sent => format!("To {}", self.counterparty),
            TxDirection::Minted => format!("Minted from {}", self.counterparty),
        }
    }
}

pub const TRANSACTIONS: [WalletTransaction; 3] = [
    WalletTransaction {
        id: 1,
        direction: TxDirection::Received,
        token: "CCX",
        amount: 150,
        value: 2760,
        counterparty: "Forest Conservation Ltd.",
        when: "2 hours ago",
        hash: "0x1234...5678",
    },
    WalletTransaction {
        id: 2,
        direction: TxDirection::Sent,
        token: "CCX",
        amount: 75,
        value: 1380,
        counterparty: "GreenTech Solutions",
        when: "1 day ago",
        hash: "0x8765...4321",
    },
    WalletTransaction {
        id: 3,
        direction: TxDirection::Minted,
        token: "REDD",
        amount: 500,
        value: 10_350,
        counterparty: "Amazon Reforestation",
        when: "3 days ago",
        hash: "0x2468...1357",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletTab {
    #[default]
    Overview,
    Transactions,
    Settings,
}

impl WalletTab {
    pub fn all() -> [WalletTab; 3] {
        [WalletTab::Overview, WalletTab::Transactions, WalletTab::Settings]
    }

    pub fn label(self) -> &'static str {
        match self {
            WalletTab::Overview => "Overview",
            WalletTab::Transactions => "Transactions",
            WalletTab::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletView {
    address: String,
    show_balance: bool,
    tab: WalletTab,
}

impl WalletView {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            show_balance: true,
            tab: WalletTab::default(),
        }
    }

    pub fn toggle_balance(&mut self) {
        self.show_balance = !self.show_balance;
    }

    pub fn is_balance_visible(&self) -> bool {
        self.show_balance
    }

    pub fn select_tab(&mut self, tab: WalletTab) {
        self.tab = tab;
    }

    pub fn tab(&self) -> WalletTab {
        self.tab
    }

    pub fn total_value_label(&self) -> String {
        masked(self.show_balance, &inr(TOTAL_VALUE))
    }

    pub fn total_tokens_label(&self) -> String {
        masked(self.show_balance, &group_indian(TOTAL_TOKENS))
    }

    pub fn balance_label(&self, token: &WalletToken) -> String {
        if self.show_balance {
            format!("{} {}", group_indian(token.balance), token.symbol)
        } else {
            format!("{} {}", MASK, token.symbol)
        }
    }

    pub fn value_label(&self, token: &WalletToken) -> String {
        masked(self.show_balance, &inr(token.value))
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// `0x742d35...C90A8`
    pub fn short_address(&self) -> String {
        let chars: Vec<char> = self.address.chars().collect();
        if chars.len() <= 13 {
            return self.address.clone();
        }
        let head: String = chars[..8].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{}...{}", head, tail)
    }

    /// Copy the full address, not the shortened one
    pub fn copy_address(&self, clipboard: &dyn Clipboard) -> Result<(), ClipboardError> {
        clipboard::copy(clipboard, &self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    fn view() -> WalletView {
        WalletView::new("0x742d35Cc4Ca0bC90A8")
    }

    #[test]
    fn test_totals_visible() {
        let view = view();
        assert_eq!(view.total_value_label(), "₹2,34,567");
        assert_eq!(view.total_tokens_label(), "12,847");
        assert_eq!(view.balance_label(&HOLDINGS[0]), "8,500 CCX");
        assert_eq!(view.value_label(&HOLDINGS[0]), "₹1,56,780");
    }

    #[test]
    fn test_hidden_balances_are_masked() {
        let mut view = view();
        view.toggle_balance();
        assert_eq!(view.total_value_label(), MASK);
        assert_eq!(view.total_tokens_label(), MASK);
        assert_eq!(view.balance_label(&HOLDINGS[1]), "•••••• REDD");
        assert_eq!(view.value_label(&HOLDINGS[2]), MASK);
    }

    #[test]
    fn test_holdings_add_up() {
        let tokens: u64 = HOLDINGS.iter().map(|t| t.balance).sum();
        let value: u64 = HOLDINGS.iter().map(|t| t.value).sum();
        assert_eq!(tokens, TOTAL_TOKENS);
        assert_eq!(value, TOTAL_VALUE);
        assert_eq!(HOLDINGS[2].trend(), Trend::Down);
    }

    #[test]
    fn test_copy_address_uses_full_address() {
        let clipboard = MemoryClipboard::new();
        let view = view();
        assert_eq!(view.short_address(), "0x742d35...C90A8");
        view.copy_address(&clipboard).unwrap();
        assert_eq!(clipboard.last().as_deref(), Some("0x742d35Cc4Ca0bC90A8"));
    }

    #[test]
    fn test_tabs_and_descriptions() {
        let mut view = view();
        assert_eq!(view.tab(), WalletTab::Overview);
        view.select_tab(WalletTab::Settings);
        assert_eq!(view.tab().label(), "Settings");
        assert_eq!(TRANSACTIONS[2].description(), "Minted from Amazon Reforestation");
    }
}
