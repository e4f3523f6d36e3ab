//! Payload records for the buy/sell slice.

use serde::{Deserialize, Serialize};

/// Payment card on file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub state: CardState,
    /// Display label, issuer plus last four digits.
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardState {
    Pending,
    Active,
    Blocked,
    Expired,
}

/// Custodial balance for one coin, minor units as the API serializes them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoinBalance {
    pub available: String,
    pub pending: String,
    pub withdrawable: String,
}

/// Withdrawal-lock check for the active payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawLockCheck {
    /// The applicable rule, absent when funds are not locked at all.
    pub rule: Option<WithdrawLockRule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawLockRule {
    /// Seconds deposited funds stay locked before withdrawal.
    pub lock_time: u64,
}
