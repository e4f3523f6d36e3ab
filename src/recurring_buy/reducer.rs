use crate::flow::Reducer;
use crate::remote::Remote;

use super::intent::RecurringBuyIntent;
use super::state::RecurringBuyState;

pub struct RecurringBuyReducer;

impl Reducer for RecurringBuyReducer {
    type State = RecurringBuyState;
    type Intent = RecurringBuyIntent;

    // The slice has a single field, so every arm rebuilds the state whole.
    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RecurringBuyIntent::FetchRegisteredListLoading => RecurringBuyState {
                registered_list: Remote::Loading,
            },
            RecurringBuyIntent::FetchRegisteredListSuccess { buys } => RecurringBuyState {
                registered_list: Remote::Success(buys),
            },
            RecurringBuyIntent::FetchRegisteredListFailure { error } => RecurringBuyState {
                registered_list: Remote::Failure(error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::recurring_buy::model::{RecurringBuy, RecurringBuyPeriod};

    #[test]
    fn registered_list_follows_the_fetch_lifecycle() {
        let state = RecurringBuyReducer::reduce(
            RecurringBuyState::default(),
            RecurringBuyIntent::FetchRegisteredListLoading,
        );
        assert!(state.registered_list.is_loading());

        let buy = RecurringBuy {
            id: "rb-1".to_string(),
            coin: "BTC".to_string(),
            period: RecurringBuyPeriod::Weekly,
        };
        let state = RecurringBuyReducer::reduce(
            state,
            RecurringBuyIntent::FetchRegisteredListSuccess {
                buys: vec![buy.clone()],
            },
        );
        assert_eq!(state.registered_list, Remote::Success(vec![buy]));
    }

    #[test]
    fn failure_carries_the_error() {
        let error = ApiError::new("RB_UNAVAILABLE", "recurring buy service down");
        let state = RecurringBuyReducer::reduce(
            RecurringBuyState::default(),
            RecurringBuyIntent::FetchRegisteredListFailure {
                error: error.clone(),
            },
        );
        assert_eq!(state.registered_list, Remote::Failure(error));
    }
}
