//! Intents for the buy/sell slice.

use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::flow::Intent;

use super::model::{Card, CoinBalance, WithdrawLockCheck};

#[derive(Debug, Clone)]
pub enum BuySellIntent {
    FetchBalancesLoading,
    FetchBalancesSuccess {
        balances: BTreeMap<String, CoinBalance>,
    },
    FetchBalancesFailure {
        error: ApiError,
    },

    FetchCardsLoading,
    FetchCardsSuccess {
        cards: Vec<Card>,
    },
    FetchCardsFailure {
        error: ApiError,
    },

    FetchWithdrawLockCheckLoading,
    FetchWithdrawLockCheckSuccess {
        check: WithdrawLockCheck,
    },
    FetchWithdrawLockCheckFailure {
        error: ApiError,
    },

    /// User switched the display currency.
    SetFiatCurrency {
        currency: String,
    },
}

impl Intent for BuySellIntent {}
