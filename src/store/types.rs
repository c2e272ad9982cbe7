//! Store entities
//!
//! - `User`: signed-in profile with KYC status
//! - `TokenHolding`: balance of one token
//! - `Transaction`: one entry of the activity feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity verification state of a user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KycStatus::Pending => write!(f, "pending"),
            KycStatus::Verified => write!(f, "verified"),
            KycStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub kyc_status: KycStatus,
    pub wallet_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenHolding {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub balance: f64,
    /// Fiat value of the whole balance
    pub value: f64,
    /// Fiat price of one token
    pub price: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TxDirection {
    Sent,
    Received,
    Minted,
}

impl fmt::Display for TxDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxDirection::Sent => write!(f, "sent"),
            TxDirection::Received => write!(f, "received"),
            TxDirection::Minted => write!(f, "minted"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub direction: TxDirection,
    pub amount: f64,
    /// Token symbol
    pub token: String,
    pub timestamp: DateTime<Utc>,
    pub status: TxStatus,
    /// Opaque display hash, not a real chain reference
    pub hash: String,
}
