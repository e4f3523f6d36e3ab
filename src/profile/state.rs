//! State for the profile slice.

use crate::error::ApiError;
use crate::flow::StoreState;
use crate::remote::{Remote, RequestToken};

use super::model::{
    Campaign, SofiData, SofiLinkData, SofiMigratedBalance, SofiUserMigrationStatus, UserCampaign,
    UserData, UserRiskSettings, UserTiers, INITIAL_TIERS,
};

/// Wallet ↔ exchange account linking state.
///
/// Nested so the linking flow's fields transition together without touching
/// the rest of the profile; updates to one sub-field leave its siblings
/// untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExchangeOnboarding {
    pub link_from_exchange_account_status: Remote<ApiError, serde_json::Value>,
    pub link_to_exchange_account_deeplink: Option<String>,
    pub link_to_exchange_account_status: Remote<ApiError, bool>,
    pub share_wallet_addresses_with_exchange: Remote<ApiError, serde_json::Value>,
}

/// Profile slice: one remote field per asynchronous workflow, each with an
/// independent lifecycle, plus a few plain fields written directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileState {
    pub api_token: Remote<ApiError, String>,
    pub campaign: Option<Campaign>,
    pub exchange_onboarding: ExchangeOnboarding,
    pub sofi_associate_nabu_user: Remote<ApiError, bool>,
    pub sofi_data: Remote<ApiError, SofiData>,
    pub sofi_link_data: SofiLinkData,
    pub sofi_migrated_balances: Remote<ApiError, Vec<SofiMigratedBalance>>,
    pub sofi_migration_status: Remote<ApiError, SofiUserMigrationStatus>,
    pub sofi_migration_status_from_polling: Remote<ApiError, SofiUserMigrationStatus>,
    pub sofi_user_migration_status: Option<SofiUserMigrationStatus>,
    pub user_campaigns: Remote<ApiError, Vec<UserCampaign>>,
    pub user_data: Remote<ApiError, UserData>,
    /// Token of the user-data request currently owning the field.
    pub user_data_request: Option<RequestToken>,
    pub user_risk_settings: Remote<ApiError, UserRiskSettings>,
    pub user_tiers: Remote<ApiError, UserTiers>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            api_token: Remote::NotAsked,
            campaign: None,
            exchange_onboarding: ExchangeOnboarding::default(),
            sofi_associate_nabu_user: Remote::NotAsked,
            sofi_data: Remote::NotAsked,
            sofi_link_data: SofiLinkData::default(),
            sofi_migrated_balances: Remote::NotAsked,
            sofi_migration_status: Remote::NotAsked,
            sofi_migration_status_from_polling: Remote::NotAsked,
            sofi_user_migration_status: None,
            user_campaigns: Remote::NotAsked,
            user_data: Remote::NotAsked,
            user_data_request: None,
            user_risk_settings: Remote::NotAsked,
            // Tiers render as level 0 until the first fetch lands.
            user_tiers: Remote::Success(INITIAL_TIERS),
        }
    }
}

impl StoreState for ProfileState {}
