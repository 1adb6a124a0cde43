//! Site paths and the landing-to-checkout hand-off

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const HOME_PATH: &str = "/";
pub const CHECKOUT_PATH: &str = "/checkout";
pub const PLAN_QUERY_KEY: &str = "plan";

// Keep RFC 3986 unreserved characters readable; spaces become %20, never '+'.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Navigation to the checkout view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckoutRequest {
    /// Name of the selected plan, if any
    pub plan: Option<String>,
}

impl CheckoutRequest {
    pub fn for_plan(name: impl Into<String>) -> Self {
        Self {
            plan: Some(name.into()),
        }
    }

    pub fn to_path(&self) -> String {
        match &self.plan {
            Some(plan) => format!(
                "{CHECKOUT_PATH}?{PLAN_QUERY_KEY}={}",
                utf8_percent_encode(plan, QUERY_VALUE)
            ),
            None => CHECKOUT_PATH.to_string(),
        }
    }
}
