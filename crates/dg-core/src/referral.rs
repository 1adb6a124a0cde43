//! Referral codes
//!
//! Each code belongs to a professional player who endorses the product and
//! takes a fixed amount off the checkout total.

use crate::money::Price;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferralCode {
    /// Uppercase code as typed by the customer
    pub code: &'static str,
    /// Player the code belongs to
    pub endorser: &'static str,
    pub discount: Price,
}

static REFERRAL_CODES: [ReferralCode; 3] = [
    ReferralCode {
        code: "PAQUITO",
        endorser: "Paquito Navarro",
        discount: Price::from_euros(5),
    },
    ReferralCode {
        code: "LEBRON",
        endorser: "Juan Lebrón",
        discount: Price::from_euros(5),
    },
    ReferralCode {
        code: "GALAN",
        endorser: "Alejandro Galán",
        discount: Price::from_euros(5),
    },
];

pub fn all_codes() -> &'static [ReferralCode] {
    &REFERRAL_CODES
}

/// Trim and uppercase user input so it can be compared against the table
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Look up a code, ignoring case and surrounding whitespace
pub fn redeem(input: &str) -> CoreResult<&'static ReferralCode> {
    let code = normalize(input);
    REFERRAL_CODES
        .iter()
        .find(|entry| entry.code == code)
        .ok_or(CoreError::UnknownReferralCode(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redeem_known_codes() {
        for entry in all_codes() {
            let found = redeem(entry.code).unwrap();
            assert_eq!(found.endorser, entry.endorser);
            assert_eq!(found.discount, Price::from_euros(5));
        }
    }

    #[test]
    fn test_redeem_is_case_insensitive() {
        assert_eq!(redeem("paquito").unwrap().endorser, "Paquito Navarro");
        assert_eq!(redeem("  Galan ").unwrap().endorser, "Alejandro Galán");
    }

    #[test]
    fn test_redeem_unknown() {
        assert_eq!(
            redeem("fake123"),
            Err(CoreError::UnknownReferralCode("FAKE123".into()))
        );
        assert!(redeem("").is_err());
    }

    #[test]
    fn test_table_codes_are_normalized() {
        assert!(all_codes().iter().all(|c| normalize(c.code) == c.code));
    }
}
