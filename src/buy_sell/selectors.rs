//! Read access to the buy/sell slice.

use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::remote::Remote;
use crate::root::RootState;

use super::model::{Card, CoinBalance, WithdrawLockCheck};

pub fn get_balances(state: &RootState) -> &Remote<ApiError, BTreeMap<String, CoinBalance>> {
    &state.buy_sell.balances
}

pub fn get_cards(state: &RootState) -> &Remote<ApiError, Vec<Card>> {
    &state.buy_sell.cards
}

pub fn get_fiat_currency(state: &RootState) -> &str {
    &state.buy_sell.fiat_currency
}

pub fn get_withdraw_lock_check(state: &RootState) -> &Remote<ApiError, WithdrawLockCheck> {
    &state.buy_sell.withdraw_lock_check
}
