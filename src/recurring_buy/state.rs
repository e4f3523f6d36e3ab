//! State for the recurring-buy slice.

use crate::error::ApiError;
use crate::flow::StoreState;
use crate::remote::Remote;

use super::model::RecurringBuy;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecurringBuyState {
    pub registered_list: Remote<ApiError, Vec<RecurringBuy>>,
}

impl StoreState for RecurringBuyState {}
