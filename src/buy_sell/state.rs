//! State for the buy/sell slice.

use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::flow::StoreState;
use crate::remote::Remote;

use super::model::{Card, CoinBalance, WithdrawLockCheck};

/// Buy/sell slice: remote trading data plus the active display currency.
#[derive(Debug, Clone, PartialEq)]
pub struct BuySellState {
    pub balances: Remote<ApiError, BTreeMap<String, CoinBalance>>,
    pub cards: Remote<ApiError, Vec<Card>>,
    pub fiat_currency: String,
    pub withdraw_lock_check: Remote<ApiError, WithdrawLockCheck>,
}

impl Default for BuySellState {
    fn default() -> Self {
        Self {
            balances: Remote::NotAsked,
            cards: Remote::NotAsked,
            fiat_currency: "USD".to_string(),
            withdraw_lock_check: Remote::NotAsked,
        }
    }
}

impl StoreState for BuySellState {}
