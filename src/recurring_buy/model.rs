//! Payload records for the recurring-buy slice.

use serde::{Deserialize, Serialize};

/// One registered recurring buy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringBuy {
    pub id: String,
    pub coin: String,
    pub period: RecurringBuyPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurringBuyPeriod {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
}
