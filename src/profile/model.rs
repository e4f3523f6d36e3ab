//! Payload records for profile workflows, shaped as the API returns them.

use serde::{Deserialize, Serialize};

/// Tier levels shown before the first tiers fetch completes.
pub const INITIAL_TIERS: UserTiers = UserTiers {
    current: 0,
    next: 0,
    selected: 0,
};

/// KYC tier levels for the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTiers {
    pub current: u8,
    pub next: u8,
    pub selected: u8,
}

/// Nabu user record.
///
/// Responses are partial: each endpoint returns only the fields it owns, so
/// the reducer merges every response into the previous record instead of
/// replacing it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserData {
    pub id: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub mobile: Option<String>,
    pub mobile_verified: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub wallet_guid: Option<String>,
    pub kyc_state: Option<String>,
}

impl UserData {
    /// Shallow merge: fields present in `incoming` win, fields it omits keep
    /// their previous values.
    pub fn merge(self, incoming: UserData) -> UserData {
        UserData {
            id: incoming.id.or(self.id),
            email: incoming.email.or(self.email),
            email_verified: incoming.email_verified.or(self.email_verified),
            mobile: incoming.mobile.or(self.mobile),
            mobile_verified: incoming.mobile_verified.or(self.mobile_verified),
            first_name: incoming.first_name.or(self.first_name),
            last_name: incoming.last_name.or(self.last_name),
            wallet_guid: incoming.wallet_guid.or(self.wallet_guid),
            kyc_state: incoming.kyc_state.or(self.kyc_state),
        }
    }
}

/// Campaign the wallet is currently attributing signups to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    pub name: String,
    /// Campaign-specific attributes; shape varies per campaign.
    pub attributes: serde_json::Value,
}

/// One campaign the user is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCampaign {
    pub campaign_name: String,
    pub campaign_state: CampaignState,
}

/// Enrollment state of a campaign, as Nabu reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignState {
    None,
    Registered,
    TaskFinished,
}

/// Risk settings Nabu reports for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRiskSettings {
    pub blocking_enabled: bool,
}

/// Where a SoFi account migration currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SofiUserMigrationStatus {
    AwaitingUser,
    Pending,
    Success,
    Failure,
}

/// Response of the SoFi migration-status fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SofiData {
    pub migration_status: SofiUserMigrationStatus,
}

/// Encrypted payload a SoFi deep link hands the wallet to associate the two
/// accounts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SofiLinkData {
    pub aes_ciphertext: String,
    pub aes_iv: String,
    pub aes_key_ciphertext: String,
    pub aes_tag: String,
}

/// One balance carried over by a completed SoFi migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SofiMigratedBalance {
    pub coin: String,
    /// Amount in the coin's minor units, serialized as a string by the API.
    pub amount: String,
}
