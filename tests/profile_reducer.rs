mod common;

use common::{api_error, user_with_email, user_with_guid};
use walletflow::error::ApiError;
use walletflow::flow::Reducer;
use walletflow::profile::{
    Campaign, ProfileIntent, ProfileReducer, ProfileState, SofiLinkData, SofiMigratedBalance,
    SofiUserMigrationStatus, UserData, UserTiers, INITIAL_TIERS,
};
use walletflow::remote::{Remote, RequestToken};

fn reduce(state: ProfileState, intent: ProfileIntent) -> ProfileState {
    ProfileReducer::reduce(state, intent)
}

// -- fetch user data ----------------------------------------------------------

#[test]
fn user_data_loading_then_success() {
    let token = RequestToken::issue();
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::FetchUserDataLoading { token },
    );
    assert!(state.user_data.is_loading());

    let state = reduce(
        state,
        ProfileIntent::FetchUserDataSuccess {
            token: Some(token),
            user_data: user_with_email(),
        },
    );
    assert_eq!(state.user_data, Remote::Success(user_with_email()));
}

#[test]
fn user_data_loading_then_failure() {
    let token = RequestToken::issue();
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::FetchUserDataLoading { token },
    );
    let state = reduce(
        state,
        ProfileIntent::FetchUserDataFailure {
            token: Some(token),
            error: api_error("NABU_UNAVAILABLE"),
        },
    );
    assert_eq!(
        state.user_data,
        Remote::Failure(api_error("NABU_UNAVAILABLE"))
    );
}

#[test]
fn user_data_success_merges_into_previous_record() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::FetchUserDataSuccess {
            token: None,
            user_data: user_with_email(),
        },
    );
    // A second partial response adds the guid without dropping the email.
    let state = reduce(
        state,
        ProfileIntent::FetchUserDataSuccess {
            token: None,
            user_data: user_with_guid(),
        },
    );

    let merged = state.user_data.success().expect("expected Success");
    assert_eq!(merged.email.as_deref(), Some("user@example.com"));
    assert_eq!(merged.wallet_guid.as_deref(), Some("guid-123"));
}

#[test]
fn user_data_success_from_not_asked_stores_the_payload() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::FetchUserDataSuccess {
            token: None,
            user_data: user_with_guid(),
        },
    );
    assert_eq!(state.user_data, Remote::Success(user_with_guid()));
}

#[test]
fn user_data_merge_prefers_incoming_value_on_overlap() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::FetchUserDataSuccess {
            token: None,
            user_data: user_with_email(),
        },
    );
    let state = reduce(
        state,
        ProfileIntent::FetchUserDataSuccess {
            token: None,
            user_data: UserData {
                email: Some("new@example.com".to_string()),
                ..UserData::default()
            },
        },
    );

    let merged = state.user_data.success().expect("expected Success");
    assert_eq!(merged.email.as_deref(), Some("new@example.com"));
    // Untouched fields survive the overlap.
    assert_eq!(merged.email_verified, Some(true));
}

#[test]
fn clear_profile_state_resets_user_data() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::FetchUserDataSuccess {
            token: None,
            user_data: user_with_email(),
        },
    );
    let state = reduce(state, ProfileIntent::ClearProfileState);
    assert!(state.user_data.is_not_asked());
    assert_eq!(state.user_data_request, None);
}

// -- stale response guard -----------------------------------------------------

#[test]
fn stale_success_is_dropped() {
    let first = RequestToken::issue();
    let second = RequestToken::issue();

    let state = reduce(
        ProfileState::default(),
        ProfileIntent::FetchUserDataLoading { token: first },
    );
    // A newer request takes over the field before the first one answers.
    let state = reduce(state, ProfileIntent::FetchUserDataLoading { token: second });
    let state = reduce(
        state,
        ProfileIntent::FetchUserDataSuccess {
            token: Some(first),
            user_data: user_with_email(),
        },
    );
    assert!(state.user_data.is_loading());

    let state = reduce(
        state,
        ProfileIntent::FetchUserDataSuccess {
            token: Some(second),
            user_data: user_with_guid(),
        },
    );
    assert_eq!(state.user_data, Remote::Success(user_with_guid()));
}

#[test]
fn stale_failure_is_dropped() {
    let first = RequestToken::issue();
    let second = RequestToken::issue();

    let state = reduce(
        ProfileState::default(),
        ProfileIntent::FetchUserDataLoading { token: first },
    );
    let state = reduce(state, ProfileIntent::FetchUserDataLoading { token: second });
    let state = reduce(
        state,
        ProfileIntent::FetchUserDataFailure {
            token: Some(first),
            error: api_error("TIMEOUT"),
        },
    );
    assert!(state.user_data.is_loading());
}

#[test]
fn untokened_patch_applies_while_a_request_is_in_flight() {
    let token = RequestToken::issue();
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::FetchUserDataLoading { token },
    );
    let state = reduce(
        state,
        ProfileIntent::FetchUserDataSuccess {
            token: None,
            user_data: user_with_email(),
        },
    );
    assert!(state.user_data.is_success());
}

// -- tiers --------------------------------------------------------------------

#[test]
fn tiers_start_preloaded_with_level_zero() {
    assert_eq!(
        ProfileState::default().user_tiers,
        Remote::Success(INITIAL_TIERS)
    );
}

#[test]
fn tiers_lifecycle() {
    let state = reduce(ProfileState::default(), ProfileIntent::FetchTiersLoading);
    assert!(state.user_tiers.is_loading());

    let tiers = UserTiers {
        current: 2,
        next: 2,
        selected: 2,
    };
    let state = reduce(state, ProfileIntent::FetchTiersSuccess { tiers });
    assert_eq!(state.user_tiers, Remote::Success(tiers));

    let state = reduce(
        state,
        ProfileIntent::FetchTiersFailure {
            error: api_error("TIERS_UNAVAILABLE"),
        },
    );
    assert_eq!(
        state.user_tiers,
        Remote::Failure(api_error("TIERS_UNAVAILABLE"))
    );
}

// -- api token ----------------------------------------------------------------

#[test]
fn api_token_lifecycle_with_reset() {
    let state = reduce(ProfileState::default(), ProfileIntent::SetApiTokenLoading);
    assert!(state.api_token.is_loading());

    let state = reduce(
        state,
        ProfileIntent::SetApiTokenSuccess {
            token: "jwt-abc".to_string(),
        },
    );
    assert_eq!(state.api_token, Remote::Success("jwt-abc".to_string()));

    let state = reduce(state, ProfileIntent::SetApiTokenNotAsked);
    assert!(state.api_token.is_not_asked());
}

// -- campaigns ----------------------------------------------------------------

#[test]
fn set_campaign_stores_the_campaign() {
    let campaign = Campaign {
        name: "sunriver".to_string(),
        attributes: serde_json::json!({"smart-contract-address": "0xabc"}),
    };
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::SetCampaign {
            campaign: campaign.clone(),
        },
    );
    assert_eq!(state.campaign, Some(campaign));
}

#[test]
fn user_campaigns_failure_carries_the_error() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::FetchUserCampaignsFailure {
            error: api_error("CAMPAIGNS_UNAVAILABLE"),
        },
    );
    assert_eq!(
        state.user_campaigns,
        Remote::Failure(api_error("CAMPAIGNS_UNAVAILABLE"))
    );
}

// -- exchange onboarding (nested sub-record) ----------------------------------

#[test]
fn link_to_exchange_loading_preserves_sibling_sub_fields() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::SetLinkToExchangeAccountDeeplink {
            deeplink: "exchange://link/xyz".to_string(),
        },
    );
    let state = reduce(
        state,
        ProfileIntent::ShareWalletAddressesWithExchangeSuccess {
            data: serde_json::json!({"status": "shared"}),
        },
    );
    let state = reduce(state, ProfileIntent::LinkToExchangeAccountLoading);

    let onboarding = &state.exchange_onboarding;
    assert!(onboarding.link_to_exchange_account_status.is_loading());
    assert_eq!(
        onboarding.link_to_exchange_account_deeplink.as_deref(),
        Some("exchange://link/xyz")
    );
    assert!(onboarding.share_wallet_addresses_with_exchange.is_success());
    assert!(onboarding.link_from_exchange_account_status.is_not_asked());
}

#[test]
fn link_to_exchange_success_stores_true() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::LinkToExchangeAccountSuccess,
    );
    assert_eq!(
        state.exchange_onboarding.link_to_exchange_account_status,
        Remote::Success(true)
    );
}

#[test]
fn link_to_exchange_reset_clears_deeplink_and_from_status() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::SetLinkToExchangeAccountDeeplink {
            deeplink: "exchange://link/xyz".to_string(),
        },
    );
    let state = reduce(
        state,
        ProfileIntent::LinkFromExchangeAccountSuccess {
            data: serde_json::json!({"linked": true}),
        },
    );
    let state = reduce(state, ProfileIntent::LinkToExchangeAccountSuccess);
    let state = reduce(state, ProfileIntent::LinkToExchangeAccountReset);

    let onboarding = &state.exchange_onboarding;
    assert!(onboarding.link_from_exchange_account_status.is_not_asked());
    assert_eq!(onboarding.link_to_exchange_account_deeplink, None);
    // The to-exchange status keeps its terminal value.
    assert_eq!(
        onboarding.link_to_exchange_account_status,
        Remote::Success(true)
    );
}

#[test]
fn share_wallet_addresses_failure_carries_the_error() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::ShareWalletAddressesWithExchangeFailure {
            error: api_error("EXCHANGE_UNAVAILABLE"),
        },
    );
    assert_eq!(
        state
            .exchange_onboarding
            .share_wallet_addresses_with_exchange,
        Remote::Failure(api_error("EXCHANGE_UNAVAILABLE"))
    );
}

// -- SoFi migration -----------------------------------------------------------

#[test]
fn sofi_migration_status_lifecycle() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::MigrateSofiUserLoading,
    );
    assert!(state.sofi_migration_status.is_loading());

    let state = reduce(
        state,
        ProfileIntent::MigrateSofiUserSuccess {
            status: SofiUserMigrationStatus::Pending,
        },
    );
    assert_eq!(
        state.sofi_migration_status,
        Remote::Success(SofiUserMigrationStatus::Pending)
    );
}

#[test]
fn sofi_migration_failure_carries_the_error() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::MigrateSofiUserFailure {
            error: ApiError::new(walletflow::error::SSN_ERROR, "ssn rejected"),
        },
    );
    let error = state.sofi_migration_status.failure().expect("expected Failure");
    assert!(error.is_ssn_error());
}

#[test]
fn associate_sofi_user_lifecycle() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::AssociateSofiUserLoading,
    );
    assert!(state.sofi_associate_nabu_user.is_loading());

    let state = reduce(
        state,
        ProfileIntent::AssociateSofiUserSuccess { associated: true },
    );
    assert_eq!(state.sofi_associate_nabu_user, Remote::Success(true));
}

#[test]
fn sofi_link_data_is_a_plain_write() {
    let link_data = SofiLinkData {
        aes_ciphertext: "ct".to_string(),
        aes_iv: "iv".to_string(),
        aes_key_ciphertext: "kct".to_string(),
        aes_tag: "tag".to_string(),
    };
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::SetSofiLinkData {
            link_data: link_data.clone(),
        },
    );
    assert_eq!(state.sofi_link_data, link_data);
}

#[test]
fn polling_status_wraps_straight_into_success() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::SetSofiUserStatusFromPolling {
            status: SofiUserMigrationStatus::Success,
        },
    );
    assert_eq!(
        state.sofi_migration_status_from_polling,
        Remote::Success(SofiUserMigrationStatus::Success)
    );
    // The fetch-based status field is untouched by polling.
    assert!(state.sofi_data.is_not_asked());
}

#[test]
fn migrated_balances_wrap_straight_into_success() {
    let balances = vec![SofiMigratedBalance {
        coin: "BTC".to_string(),
        amount: "12345678".to_string(),
    }];
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::SetSofiMigratedBalances {
            balances: balances.clone(),
        },
    );
    assert_eq!(state.sofi_migrated_balances, Remote::Success(balances));
}

#[test]
fn set_sofi_user_status_is_a_plain_write() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::SetSofiUserStatus {
            status: SofiUserMigrationStatus::AwaitingUser,
        },
    );
    assert_eq!(
        state.sofi_user_migration_status,
        Some(SofiUserMigrationStatus::AwaitingUser)
    );
}

// -- sibling isolation --------------------------------------------------------

#[test]
fn tiers_loading_leaves_every_other_field_unchanged() {
    let token = RequestToken::issue();
    let before = reduce(
        ProfileState::default(),
        ProfileIntent::FetchUserDataSuccess {
            token: None,
            user_data: user_with_email(),
        },
    );
    let before = reduce(before, ProfileIntent::FetchUserDataLoading { token });
    let before = reduce(
        before,
        ProfileIntent::SetLinkToExchangeAccountDeeplink {
            deeplink: "exchange://link/xyz".to_string(),
        },
    );

    let after = reduce(before.clone(), ProfileIntent::FetchTiersLoading);

    assert!(after.user_tiers.is_loading());
    assert_eq!(after.user_data, before.user_data);
    assert_eq!(after.user_data_request, before.user_data_request);
    assert_eq!(after.exchange_onboarding, before.exchange_onboarding);
    assert_eq!(after.sofi_data, before.sofi_data);
    assert_eq!(after.campaign, before.campaign);
}

#[test]
fn risk_settings_lifecycle_is_independent_of_user_data() {
    let state = reduce(
        ProfileState::default(),
        ProfileIntent::FetchUserRiskSettingsLoading,
    );
    assert!(state.user_risk_settings.is_loading());
    assert!(state.user_data.is_not_asked());
}
