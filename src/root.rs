//! Root state tree and reducer composition.

use crate::buy_sell::{BuySellIntent, BuySellReducer, BuySellState};
use crate::flow::{Intent, Reducer, Store, StoreState};
use crate::profile::{ProfileIntent, ProfileReducer, ProfileState};
use crate::recurring_buy::{RecurringBuyIntent, RecurringBuyReducer, RecurringBuyState};

/// Global state tree. One field per slice; each slice's reducer is the sole
/// writer of its field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub buy_sell: BuySellState,
    pub profile: ProfileState,
    pub recurring_buy: RecurringBuyState,
}

impl StoreState for RootState {}

/// Union of the slice intents.
#[derive(Debug, Clone)]
pub enum RootIntent {
    BuySell(BuySellIntent),
    Profile(ProfileIntent),
    RecurringBuy(RecurringBuyIntent),
}

impl Intent for RootIntent {}

/// Delegates each intent to its slice's reducer; the other slices pass
/// through untouched.
pub struct RootReducer;

impl Reducer for RootReducer {
    type State = RootState;
    type Intent = RootIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let RootState {
            buy_sell,
            profile,
            recurring_buy,
        } = state;

        match intent {
            RootIntent::BuySell(intent) => RootState {
                buy_sell: BuySellReducer::reduce(buy_sell, intent),
                profile,
                recurring_buy,
            },
            RootIntent::Profile(intent) => RootState {
                buy_sell,
                profile: ProfileReducer::reduce(profile, intent),
                recurring_buy,
            },
            RootIntent::RecurringBuy(intent) => RootState {
                buy_sell,
                profile,
                recurring_buy: RecurringBuyReducer::reduce(recurring_buy, intent),
            },
        }
    }
}

/// Store specialized to the wallet's root reducer.
pub type WalletStore = Store<RootReducer>;
