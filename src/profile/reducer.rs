use tracing::warn;

use crate::flow::Reducer;
use crate::remote::{Remote, RequestToken};

use super::intent::ProfileIntent;
use super::state::ProfileState;

pub struct ProfileReducer;

/// A tokened terminal intent only applies while its request still owns the
/// user-data field. Untokened intents are direct patches and always apply.
fn stale_user_data_response(state: &ProfileState, token: Option<RequestToken>) -> bool {
    match token {
        Some(token) => state.user_data_request != Some(token),
        None => false,
    }
}

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::ClearProfileState => ProfileState {
                user_data: Remote::NotAsked,
                user_data_request: None,
                ..state
            },

            ProfileIntent::FetchUserDataLoading { token } => ProfileState {
                user_data: Remote::Loading,
                user_data_request: Some(token),
                ..state
            },
            ProfileIntent::FetchUserDataSuccess { token, user_data } => {
                if stale_user_data_response(&state, token) {
                    warn!("dropping stale user data response");
                    return state;
                }
                let previous = state.user_data.success().cloned().unwrap_or_default();
                ProfileState {
                    user_data: Remote::Success(previous.merge(user_data)),
                    ..state
                }
            }
            ProfileIntent::FetchUserDataFailure { token, error } => {
                if stale_user_data_response(&state, token) {
                    warn!("dropping stale user data failure");
                    return state;
                }
                ProfileState {
                    user_data: Remote::Failure(error),
                    ..state
                }
            }

            ProfileIntent::FetchTiersLoading => ProfileState {
                user_tiers: Remote::Loading,
                ..state
            },
            ProfileIntent::FetchTiersSuccess { tiers } => ProfileState {
                user_tiers: Remote::Success(tiers),
                ..state
            },
            ProfileIntent::FetchTiersFailure { error } => ProfileState {
                user_tiers: Remote::Failure(error),
                ..state
            },

            ProfileIntent::FetchUserCampaignsLoading => ProfileState {
                user_campaigns: Remote::Loading,
                ..state
            },
            ProfileIntent::FetchUserCampaignsSuccess { campaigns } => ProfileState {
                user_campaigns: Remote::Success(campaigns),
                ..state
            },
            ProfileIntent::FetchUserCampaignsFailure { error } => ProfileState {
                user_campaigns: Remote::Failure(error),
                ..state
            },

            ProfileIntent::FetchUserRiskSettingsLoading => ProfileState {
                user_risk_settings: Remote::Loading,
                ..state
            },
            ProfileIntent::FetchUserRiskSettingsSuccess { settings } => ProfileState {
                user_risk_settings: Remote::Success(settings),
                ..state
            },
            ProfileIntent::FetchUserRiskSettingsFailure { error } => ProfileState {
                user_risk_settings: Remote::Failure(error),
                ..state
            },

            ProfileIntent::SetApiTokenLoading => ProfileState {
                api_token: Remote::Loading,
                ..state
            },
            ProfileIntent::SetApiTokenSuccess { token } => ProfileState {
                api_token: Remote::Success(token),
                ..state
            },
            ProfileIntent::SetApiTokenFailure { error } => ProfileState {
                api_token: Remote::Failure(error),
                ..state
            },
            ProfileIntent::SetApiTokenNotAsked => ProfileState {
                api_token: Remote::NotAsked,
                ..state
            },

            ProfileIntent::SetCampaign { campaign } => ProfileState {
                campaign: Some(campaign),
                ..state
            },

            ProfileIntent::LinkFromExchangeAccountLoading => {
                let mut state = state;
                state.exchange_onboarding.link_from_exchange_account_status = Remote::Loading;
                state
            }
            ProfileIntent::LinkFromExchangeAccountSuccess { data } => {
                let mut state = state;
                state.exchange_onboarding.link_from_exchange_account_status =
                    Remote::Success(data);
                state
            }
            ProfileIntent::LinkFromExchangeAccountFailure { error } => {
                let mut state = state;
                state.exchange_onboarding.link_from_exchange_account_status =
                    Remote::Failure(error);
                state
            }

            ProfileIntent::LinkToExchangeAccountLoading => {
                let mut state = state;
                state.exchange_onboarding.link_to_exchange_account_status = Remote::Loading;
                state
            }
            ProfileIntent::LinkToExchangeAccountSuccess => {
                let mut state = state;
                state.exchange_onboarding.link_to_exchange_account_status = Remote::Success(true);
                state
            }
            ProfileIntent::LinkToExchangeAccountFailure { error } => {
                let mut state = state;
                state.exchange_onboarding.link_to_exchange_account_status = Remote::Failure(error);
                state
            }
            ProfileIntent::LinkToExchangeAccountReset => {
                // The to-exchange status keeps its terminal value; only the
                // pending deeplink and the from-exchange status reset.
                let mut state = state;
                state.exchange_onboarding.link_from_exchange_account_status = Remote::NotAsked;
                state.exchange_onboarding.link_to_exchange_account_deeplink = None;
                state
            }

            ProfileIntent::SetLinkToExchangeAccountDeeplink { deeplink } => {
                let mut state = state;
                state.exchange_onboarding.link_to_exchange_account_deeplink = Some(deeplink);
                state
            }

            ProfileIntent::ShareWalletAddressesWithExchangeLoading => {
                let mut state = state;
                state.exchange_onboarding.share_wallet_addresses_with_exchange = Remote::Loading;
                state
            }
            ProfileIntent::ShareWalletAddressesWithExchangeSuccess { data } => {
                let mut state = state;
                state.exchange_onboarding.share_wallet_addresses_with_exchange =
                    Remote::Success(data);
                state
            }
            ProfileIntent::ShareWalletAddressesWithExchangeFailure { error } => {
                let mut state = state;
                state.exchange_onboarding.share_wallet_addresses_with_exchange =
                    Remote::Failure(error);
                state
            }

            ProfileIntent::FetchSofiMigrationStatusLoading => ProfileState {
                sofi_data: Remote::Loading,
                ..state
            },
            ProfileIntent::FetchSofiMigrationStatusSuccess { data } => ProfileState {
                sofi_data: Remote::Success(data),
                ..state
            },
            ProfileIntent::FetchSofiMigrationStatusFailure { error } => ProfileState {
                sofi_data: Remote::Failure(error),
                ..state
            },

            ProfileIntent::MigrateSofiUserLoading => ProfileState {
                sofi_migration_status: Remote::Loading,
                ..state
            },
            ProfileIntent::MigrateSofiUserSuccess { status } => ProfileState {
                sofi_migration_status: Remote::Success(status),
                ..state
            },
            ProfileIntent::MigrateSofiUserFailure { error } => ProfileState {
                sofi_migration_status: Remote::Failure(error),
                ..state
            },

            ProfileIntent::AssociateSofiUserLoading => ProfileState {
                sofi_associate_nabu_user: Remote::Loading,
                ..state
            },
            ProfileIntent::AssociateSofiUserSuccess { associated } => ProfileState {
                sofi_associate_nabu_user: Remote::Success(associated),
                ..state
            },
            ProfileIntent::AssociateSofiUserFailure { error } => ProfileState {
                sofi_associate_nabu_user: Remote::Failure(error),
                ..state
            },

            ProfileIntent::SetSofiLinkData { link_data } => ProfileState {
                sofi_link_data: link_data,
                ..state
            },
            ProfileIntent::SetSofiUserStatus { status } => ProfileState {
                sofi_user_migration_status: Some(status),
                ..state
            },
            ProfileIntent::SetSofiUserStatusFromPolling { status } => ProfileState {
                sofi_migration_status_from_polling: Remote::Success(status),
                ..state
            },
            ProfileIntent::SetSofiMigratedBalances { balances } => ProfileState {
                sofi_migrated_balances: Remote::Success(balances),
                ..state
            },
        }
    }
}
