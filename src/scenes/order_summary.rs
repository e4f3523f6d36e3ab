//! Data for the buy/sell order-summary screen.

use crate::buy_sell::{selectors as buy_sell_selectors, Card};
use crate::error::ApiError;
use crate::profile::{selectors as profile_selectors, UserData};
use crate::recurring_buy::{selectors as recurring_buy_selectors, RecurringBuy};
use crate::remote::{lift4, Remote};
use crate::root::RootState;

/// Everything the order-summary screen needs before it can render.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummaryData {
    pub cards: Vec<Card>,
    /// Seconds deposited funds stay locked; 0 when no rule applies.
    pub lock_time: u64,
    pub recurring_buys: Vec<RecurringBuy>,
    pub user_data: UserData,
}

/// Combine the screen's four remote sources into one value: ready only when
/// all four have succeeded, otherwise the first failure, else loading, else
/// not-asked.
pub fn get_data(state: &RootState) -> Remote<ApiError, OrderSummaryData> {
    let cards = buy_sell_selectors::get_cards(state);
    let user_data = profile_selectors::get_user_data(state);
    let withdraw_lock = buy_sell_selectors::get_withdraw_lock_check(state);
    let recurring_buys = recurring_buy_selectors::get_registered_list(state);

    lift4(
        cards,
        user_data,
        withdraw_lock,
        recurring_buys,
        |cards, user_data, check, recurring_buys| OrderSummaryData {
            cards: cards.clone(),
            lock_time: check.rule.map(|rule| rule.lock_time).unwrap_or(0),
            recurring_buys: recurring_buys.clone(),
            user_data: user_data.clone(),
        },
    )
}
