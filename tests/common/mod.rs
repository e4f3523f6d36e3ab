//! Shared fixture builders.

#![allow(dead_code, unused_imports)]

use walletflow::buy_sell::{Card, CardState, WithdrawLockCheck, WithdrawLockRule};
use walletflow::error::ApiError;
use walletflow::profile::UserData;
use walletflow::recurring_buy::{RecurringBuy, RecurringBuyPeriod};

/// A generic API error with the given id.
pub fn api_error(id: &str) -> ApiError {
    ApiError::new(id, "request failed")
}

pub fn visa_card() -> Card {
    Card {
        id: "card-1".to_string(),
        state: CardState::Active,
        label: "Visa 4242".to_string(),
    }
}

pub fn user_with_email() -> UserData {
    UserData {
        email: Some("user@example.com".to_string()),
        email_verified: Some(true),
        ..UserData::default()
    }
}

pub fn user_with_guid() -> UserData {
    UserData {
        wallet_guid: Some("guid-123".to_string()),
        ..UserData::default()
    }
}

pub fn three_day_lock() -> WithdrawLockCheck {
    WithdrawLockCheck {
        rule: Some(WithdrawLockRule { lock_time: 259200 }),
    }
}

pub fn weekly_btc_buy() -> RecurringBuy {
    RecurringBuy {
        id: "rb-1".to_string(),
        coin: "BTC".to_string(),
        period: RecurringBuyPeriod::Weekly,
    }
}
