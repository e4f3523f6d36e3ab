//! Intents for the profile slice.

use serde_json::Value;

use crate::error::ApiError;
use crate::flow::Intent;
use crate::remote::RequestToken;

use super::model::{
    Campaign, SofiData, SofiLinkData, SofiMigratedBalance, SofiUserMigrationStatus, UserCampaign,
    UserData, UserRiskSettings, UserTiers,
};

/// Intents dispatched by the side-effect layer around profile requests, plus
/// a few direct writes from deep links and polling.
#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// Drop the cached user record (sign-out, account switch).
    ClearProfileState,

    FetchUserDataLoading {
        token: RequestToken,
    },
    /// Merges into the previous record. `token` is `None` for direct
    /// patches; when present it must match the token recorded at loading or
    /// the response is dropped as stale.
    FetchUserDataSuccess {
        token: Option<RequestToken>,
        user_data: UserData,
    },
    FetchUserDataFailure {
        token: Option<RequestToken>,
        error: ApiError,
    },

    FetchTiersLoading,
    FetchTiersSuccess { tiers: UserTiers },
    FetchTiersFailure { error: ApiError },

    FetchUserCampaignsLoading,
    FetchUserCampaignsSuccess { campaigns: Vec<UserCampaign> },
    FetchUserCampaignsFailure { error: ApiError },

    FetchUserRiskSettingsLoading,
    FetchUserRiskSettingsSuccess { settings: UserRiskSettings },
    FetchUserRiskSettingsFailure { error: ApiError },

    SetApiTokenLoading,
    SetApiTokenSuccess { token: String },
    SetApiTokenFailure { error: ApiError },
    SetApiTokenNotAsked,

    SetCampaign { campaign: Campaign },

    LinkFromExchangeAccountLoading,
    LinkFromExchangeAccountSuccess { data: Value },
    LinkFromExchangeAccountFailure { error: ApiError },

    LinkToExchangeAccountLoading,
    LinkToExchangeAccountSuccess,
    LinkToExchangeAccountFailure { error: ApiError },
    /// Abandon the linking flow: clears the pending deeplink and the
    /// from-exchange status.
    LinkToExchangeAccountReset,

    SetLinkToExchangeAccountDeeplink { deeplink: String },

    ShareWalletAddressesWithExchangeLoading,
    ShareWalletAddressesWithExchangeSuccess { data: Value },
    ShareWalletAddressesWithExchangeFailure { error: ApiError },

    FetchSofiMigrationStatusLoading,
    FetchSofiMigrationStatusSuccess { data: SofiData },
    FetchSofiMigrationStatusFailure { error: ApiError },

    MigrateSofiUserLoading,
    MigrateSofiUserSuccess { status: SofiUserMigrationStatus },
    MigrateSofiUserFailure { error: ApiError },

    AssociateSofiUserLoading,
    AssociateSofiUserSuccess { associated: bool },
    AssociateSofiUserFailure { error: ApiError },

    SetSofiLinkData { link_data: SofiLinkData },
    SetSofiUserStatus { status: SofiUserMigrationStatus },
    /// Polling result; wraps straight into `Success`.
    SetSofiUserStatusFromPolling { status: SofiUserMigrationStatus },
    SetSofiMigratedBalances { balances: Vec<SofiMigratedBalance> },
}

impl Intent for ProfileIntent {}
