//! DryGripPro storefront core
//!
//! This crate holds everything the storefront computes: the fixed plan
//! catalog, the referral code table, the landing-page plan selector and the
//! checkout total. It performs no I/O and is shared by the server render and
//! the browser build of the site.

pub mod catalog;
pub mod checkout;
pub mod money;
pub mod referral;
pub mod routes;
pub mod selector;

use thiserror::Error;

pub use catalog::{Plan, PlanTier};
pub use checkout::{ApplyOutcome, CheckoutSelection};
pub use money::Price;
pub use referral::ReferralCode;
pub use routes::CheckoutRequest;
pub use selector::{CatalogTab, PlanSelector};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    #[error("Plan is not sold through checkout: {0}")]
    NotPurchasable(String),

    #[error("Unknown referral code: {0}")]
    UnknownReferralCode(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownReferralCode("FAKE123".into());
        assert_eq!(err.to_string(), "Unknown referral code: FAKE123");

        let err = CoreError::NotPurchasable("Pack 100 unidades".into());
        assert_eq!(
            err.to_string(),
            "Plan is not sold through checkout: Pack 100 unidades"
        );
    }
}
