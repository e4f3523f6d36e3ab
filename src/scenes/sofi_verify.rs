//! Child selection for the SoFi identity-verification flyout.

use crate::profile::selectors;
use crate::root::RootState;

/// Which child the flyout shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SofiVerifyStep {
    /// Collect SSN / identity details (also shown again after an SSN
    /// rejection).
    VerifyForm,
    Loading,
    /// Migration accepted, waiting on the backend to finish.
    MigrationPending,
    Error,
}

pub fn current_step(state: &RootState) -> SofiVerifyStep {
    selectors::get_sofi_migration_status(state).cata(
        || SofiVerifyStep::VerifyForm,
        || SofiVerifyStep::Loading,
        |error| {
            // An SSN rejection re-shows the form with inline validation.
            if error.is_ssn_error() {
                SofiVerifyStep::VerifyForm
            } else {
                SofiVerifyStep::Error
            }
        },
        |_| SofiVerifyStep::MigrationPending,
    )
}
