//! Read access to the profile slice.
//!
//! Selectors are pure `(RootState) -> value` functions; scenes compose them
//! with the `lift` combinators to build derived views.

use crate::error::ApiError;
use crate::remote::Remote;
use crate::root::RootState;

use super::model::{
    Campaign, SofiData, SofiLinkData, SofiMigratedBalance, SofiUserMigrationStatus, UserCampaign,
    UserData, UserRiskSettings, UserTiers,
};
use super::state::ExchangeOnboarding;

pub fn get_api_token(state: &RootState) -> &Remote<ApiError, String> {
    &state.profile.api_token
}

pub fn get_campaign(state: &RootState) -> Option<&Campaign> {
    state.profile.campaign.as_ref()
}

pub fn get_exchange_onboarding(state: &RootState) -> &ExchangeOnboarding {
    &state.profile.exchange_onboarding
}

pub fn get_sofi_associate_nabu_user(state: &RootState) -> &Remote<ApiError, bool> {
    &state.profile.sofi_associate_nabu_user
}

pub fn get_sofi_data(state: &RootState) -> &Remote<ApiError, SofiData> {
    &state.profile.sofi_data
}

pub fn get_sofi_link_data(state: &RootState) -> &SofiLinkData {
    &state.profile.sofi_link_data
}

pub fn get_sofi_migrated_balances(
    state: &RootState,
) -> &Remote<ApiError, Vec<SofiMigratedBalance>> {
    &state.profile.sofi_migrated_balances
}

pub fn get_sofi_migration_status(
    state: &RootState,
) -> &Remote<ApiError, SofiUserMigrationStatus> {
    &state.profile.sofi_migration_status
}

pub fn get_sofi_migration_status_from_polling(
    state: &RootState,
) -> &Remote<ApiError, SofiUserMigrationStatus> {
    &state.profile.sofi_migration_status_from_polling
}

pub fn get_sofi_user_migration_status(state: &RootState) -> Option<SofiUserMigrationStatus> {
    state.profile.sofi_user_migration_status
}

pub fn get_user_campaigns(state: &RootState) -> &Remote<ApiError, Vec<UserCampaign>> {
    &state.profile.user_campaigns
}

pub fn get_user_data(state: &RootState) -> &Remote<ApiError, UserData> {
    &state.profile.user_data
}

pub fn get_user_risk_settings(state: &RootState) -> &Remote<ApiError, UserRiskSettings> {
    &state.profile.user_risk_settings
}

pub fn get_user_tiers(state: &RootState) -> &Remote<ApiError, UserTiers> {
    &state.profile.user_tiers
}
