//! Intents for the recurring-buy slice.

use crate::error::ApiError;
use crate::flow::Intent;

use super::model::RecurringBuy;

#[derive(Debug, Clone)]
pub enum RecurringBuyIntent {
    FetchRegisteredListLoading,
    FetchRegisteredListSuccess { buys: Vec<RecurringBuy> },
    FetchRegisteredListFailure { error: ApiError },
}

impl Intent for RecurringBuyIntent {}
