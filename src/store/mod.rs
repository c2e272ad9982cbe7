//! Application Store
//!
//! Holds the signed-in user, token balances and the transaction feed.
//! Updates go through [`reduce`], a pure function from the previous state and
//! an action to the next state. No page reads the store; page data lives in
//! [`crate::views`].
//!
//! ```rust
//! use carboncredx::store::{AppStore, StoreAction, TokenHolding};
//!
//! let mut store = AppStore::default();
//! store.dispatch(StoreAction::AddToken(TokenHolding {
//!     id: "ccx".into(),
//!     symbol: "CCX".into(),
//!     name: "Carbon Credit Token".into(),
//!     balance: 8500.0,
//!     value: 156780.0,
//!     price: 18.45,
//! }));
//! store.dispatch(StoreAction::UpdateTokenBalance {
//!     token_id: "ccx".into(),
//!     balance: 9000.0,
//! });
//! assert_eq!(store.tokens[0].balance, 9000.0);
//! ```

pub mod types;

use serde::{Deserialize, Serialize};

pub use types::{KycStatus, TokenHolding, Transaction, TxDirection, TxStatus, User};

/// Everything the store knows
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppStore {
    pub user: Option<User>,
    pub tokens: Vec<TokenHolding>,
    /// Newest first
    pub transactions: Vec<Transaction>,
}

/// A single store mutation
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// Replace the current user
    SetUser(User),
    /// Append a token to the holdings list
    AddToken(TokenHolding),
    /// Put a transaction at the head of the feed
    AddTransaction(Transaction),
    /// Replace one token's balance; other fields are untouched
    UpdateTokenBalance { token_id: String, balance: f64 },
}

/// Compute the state that follows `action`
pub fn reduce(state: &AppStore, action: StoreAction) -> AppStore {
    let mut next = state.clone();
    match action {
        StoreAction::SetUser(user) => {
            next.user = Some(user);
        }
        StoreAction::AddToken(token) => {
            next.tokens.push(token);
        }
        StoreAction::AddTransaction(transaction) => {
            next.transactions.insert(0, transaction);
        }
        StoreAction::UpdateTokenBalance { token_id, balance } => {
            let mut found = false;
            for token in next.tokens.iter_mut().filter(|t| t.id == token_id) {
                token.balance = balance;
                found = true;
            }
            if !found {
                tracing::debug!(token_id = %token_id, "Balance update for unknown token ignored");
            }
        }
    }
    next
}

impl AppStore {
    /// Apply an action in place
    pub fn dispatch(&mut self, action: StoreAction) {
        *self = reduce(self, action);
    }

    pub fn token(&self, token_id: &str) -> Option<&TokenHolding> {
        self.tokens.iter().find(|t| t.id == token_id)
    }

    /// Sum of the fiat value of all holdings
    pub fn total_value(&self) -> f64 {
        self.tokens.iter().map(|t| t.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn token(id: &str, balance: f64) -> TokenHolding {
        TokenHolding {
            id: id.to_string(),
            symbol: id.to_uppercase(),
            name: format!("{} token", id),
            balance,
            value: balance * 18.45,
            price: 18.45,
        }
    }

    fn transaction(id: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            direction: TxDirection::Received,
            amount: 150.0,
            token: "CCX".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            status: TxStatus::Completed,
            hash: "0x1234...5678".to_string(),
        }
    }

    #[test]
    fn test_reduce_is_pure() {
        let state = AppStore::default();
        let next = reduce(&state, StoreAction::AddToken(token("ccx", 10.0)));
        assert!(state.tokens.is_empty());
        assert_eq!(next.tokens.len(), 1);
    }

    #[test]
    fn test_set_user_replaces() {
        let mut store = AppStore::default();
        let mut user = User {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            kyc_status: KycStatus::Pending,
            wallet_address: "0x742d35Cc4Ca0bC90A8".to_string(),
        };
        store.dispatch(StoreAction::SetUser(user.clone()));
        user.kyc_status = KycStatus::Verified;
        store.dispatch(StoreAction::SetUser(user));
        assert_eq!(store.user.map(|u| u.kyc_status), Some(KycStatus::Verified));
    }

    #[test]
    fn test_tokens_append_and_transactions_prepend() {
        let mut store = AppStore::default();
        store.dispatch(StoreAction::AddToken(token("ccx", 1.0)));
        store.dispatch(StoreAction::AddToken(token("redd", 2.0)));
        store.dispatch(StoreAction::AddTransaction(transaction("t1")));
        store.dispatch(StoreAction::AddTransaction(transaction("t2")));

        let symbols: Vec<_> = store.tokens.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["CCX", "REDD"]);

        let ids: Vec<_> = store.transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t1"]);
    }

    #[test]
    fn test_update_balance_touches_only_target() {
        let mut store = AppStore::default();
        store.dispatch(StoreAction::AddToken(token("ccx", 1.0)));
        store.dispatch(StoreAction::AddToken(token("redd", 2.0)));

        store.dispatch(StoreAction::UpdateTokenBalance {
            token_id: "redd".to_string(),
            balance: 42.0,
        });

        assert_eq!(store.token("ccx").map(|t| t.balance), Some(1.0));
        assert_eq!(store.token("redd").map(|t| t.balance), Some(42.0));
        // Value is not recomputed
        assert_eq!(store.token("redd").map(|t| t.value), Some(2.0 * 18.45));
    }

    #[test]
    fn test_update_unknown_token_is_noop() {
        let mut store = AppStore::default();
        store.dispatch(StoreAction::AddToken(token("ccx", 1.0)));
        let before = store.clone();
        store.dispatch(StoreAction::UpdateTokenBalance {
            token_id: "missing".to_string(),
            balance: 9.0,
        });
        assert_eq!(store, before);
    }
}
