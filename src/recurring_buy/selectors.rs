//! Read access to the recurring-buy slice.

use crate::error::ApiError;
use crate::remote::Remote;
use crate::root::RootState;

use super::model::RecurringBuy;

pub fn get_registered_list(state: &RootState) -> &Remote<ApiError, Vec<RecurringBuy>> {
    &state.recurring_buy.registered_list
}
