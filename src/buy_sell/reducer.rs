use crate::flow::Reducer;
use crate::remote::Remote;

use super::intent::BuySellIntent;
use super::state::BuySellState;

pub struct BuySellReducer;

impl Reducer for BuySellReducer {
    type State = BuySellState;
    type Intent = BuySellIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BuySellIntent::FetchBalancesLoading => BuySellState {
                balances: Remote::Loading,
                ..state
            },
            BuySellIntent::FetchBalancesSuccess { balances } => BuySellState {
                balances: Remote::Success(balances),
                ..state
            },
            BuySellIntent::FetchBalancesFailure { error } => BuySellState {
                balances: Remote::Failure(error),
                ..state
            },

            BuySellIntent::FetchCardsLoading => BuySellState {
                cards: Remote::Loading,
                ..state
            },
            BuySellIntent::FetchCardsSuccess { cards } => BuySellState {
                cards: Remote::Success(cards),
                ..state
            },
            BuySellIntent::FetchCardsFailure { error } => BuySellState {
                cards: Remote::Failure(error),
                ..state
            },

            BuySellIntent::FetchWithdrawLockCheckLoading => BuySellState {
                withdraw_lock_check: Remote::Loading,
                ..state
            },
            BuySellIntent::FetchWithdrawLockCheckSuccess { check } => BuySellState {
                withdraw_lock_check: Remote::Success(check),
                ..state
            },
            BuySellIntent::FetchWithdrawLockCheckFailure { error } => BuySellState {
                withdraw_lock_check: Remote::Failure(error),
                ..state
            },

            BuySellIntent::SetFiatCurrency { currency } => BuySellState {
                fiat_currency: currency,
                ..state
            },
        }
    }
}
