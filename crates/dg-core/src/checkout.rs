//! Checkout calculator
//!
//! State behind the checkout view: the plan being bought, the referral code
//! currently typed into the input and the code that has been applied. The
//! view never surfaces an error; bad plan names fall back to the default plan
//! and unknown codes are ignored.

use crate::catalog::{self, Plan};
use crate::money::Price;
use crate::referral::{self, ReferralCode};

/// Result of an "apply code" attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied(&'static ReferralCode),
    /// Unknown code, state left untouched
    Ignored,
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSelection {
    plan: &'static Plan,
    applied: Option<&'static ReferralCode>,
    draft: String,
}

impl CheckoutSelection {
    pub fn new(plan: &'static Plan) -> Self {
        Self {
            plan,
            applied: None,
            draft: String::new(),
        }
    }

    /// Resolve the plan carried by navigation. Missing, unknown and
    /// business-only names all land on the default plan.
    pub fn from_plan_param(param: Option<&str>) -> Self {
        let plan = match param {
            None => catalog::default_plan(),
            Some(name) => catalog::find_purchasable(name).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "falling back to default plan");
                catalog::default_plan()
            }),
        };
        Self::new(plan)
    }

    /// Re-resolve after navigation. A different plan starts a fresh checkout;
    /// the same plan keeps the draft and the applied code.
    pub fn follow_plan_param(&mut self, param: Option<&str>) {
        let next = Self::from_plan_param(param);
        if next.plan.name != self.plan.name {
            *self = next;
        }
    }

    pub fn plan(&self) -> &'static Plan {
        self.plan
    }

    pub fn applied(&self) -> Option<&'static ReferralCode> {
        self.applied
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Mirror the code input; text is uppercased as it is typed.
    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_uppercase();
    }

    pub fn apply_draft(&mut self) -> ApplyOutcome {
        let draft = self.draft.clone();
        self.apply_code(&draft)
    }

    pub fn apply_code(&mut self, input: &str) -> ApplyOutcome {
        match referral::redeem(input) {
            Ok(code) => {
                tracing::info!(code = code.code, plan = self.plan.name, "referral code applied");
                self.applied = Some(code);
                if self.discount_exceeds_price() {
                    tracing::warn!(
                        code = code.code,
                        plan = self.plan.name,
                        total = %self.total(),
                        "discount exceeds plan price"
                    );
                }
                ApplyOutcome::Applied(code)
            }
            Err(err) => {
                tracing::debug!(error = %err, "referral code ignored");
                ApplyOutcome::Ignored
            }
        }
    }

    pub fn discount(&self) -> Price {
        self.applied.map_or(Price::ZERO, |code| code.discount)
    }

    /// Plan price minus the applied discount. Not floored at zero.
    pub fn total(&self) -> Price {
        self.plan.price - self.discount()
    }

    pub fn discount_exceeds_price(&self) -> bool {
        self.discount() > self.plan.price
    }

    /// "1 unidad" or "N unidades"
    pub fn unit_label(&self) -> String {
        match self.plan.unit_count {
            1 => "1 unidad".to_string(),
            n => format!("{n} unidades"),
        }
    }
}

impl Default for CheckoutSelection {
    fn default() -> Self {
        Self::new(catalog::default_plan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{player_packs, PlanTier};
    use crate::selector::PlanSelector;

    #[test]
    fn test_default_checkout() {
        let checkout = CheckoutSelection::from_plan_param(None);
        assert_eq!(checkout.plan().name, "Pack Individual");
        assert_eq!(checkout.plan().price.to_string(), "10€");
        assert_eq!(checkout.total().to_string(), "10€");
        assert!(checkout.applied().is_none());
    }

    #[test]
    fn test_every_player_pack_reaches_checkout_unmodified() {
        for pack in player_packs() {
            let mut selector = PlanSelector::new();
            selector.select(pack);
            let request = selector.purchase().unwrap();

            let checkout = CheckoutSelection::from_plan_param(request.plan.as_deref());
            assert_eq!(checkout.plan().name, pack.name);
            assert_eq!(checkout.plan().unit_count, pack.unit_count);
            assert_eq!(checkout.plan().price, pack.price);
            assert_eq!(checkout.total(), pack.price);
        }
    }

    #[test]
    fn test_valid_code_takes_exact_discount() {
        let mut checkout = CheckoutSelection::from_plan_param(Some("Pack Individual"));
        let before = checkout.total();
        let outcome = checkout.apply_code("PAQUITO");

        assert!(outcome.is_applied());
        assert_eq!(before - checkout.total(), Price::from_euros(5));
        assert_eq!(checkout.applied().unwrap().endorser, "Paquito Navarro");
    }

    #[test]
    fn test_duo_with_lebron() {
        let mut checkout = CheckoutSelection::from_plan_param(Some("Pack Dúo"));
        assert_eq!(checkout.plan().price, Price::from_euros(18));

        checkout.set_draft("LEBRON");
        checkout.apply_draft();
        assert_eq!(checkout.total(), Price::from_euros(13));
        assert_eq!(checkout.applied().unwrap().endorser, "Juan Lebrón");
    }

    #[test]
    fn test_familia_with_invalid_code() {
        let mut checkout = CheckoutSelection::from_plan_param(Some("Pack Familia"));
        checkout.set_draft("ZZZ");
        assert_eq!(checkout.apply_draft(), ApplyOutcome::Ignored);
        assert_eq!(checkout.total(), Price::from_euros(28));
        assert!(checkout.applied().is_none());
        assert_eq!(checkout.draft(), "ZZZ");
    }

    #[test]
    fn test_invalid_code_keeps_previous_code() {
        let mut checkout = CheckoutSelection::default();
        checkout.apply_code("GALAN");
        let before = checkout.clone();

        assert_eq!(checkout.apply_code("FAKE123"), ApplyOutcome::Ignored);
        assert_eq!(checkout, before);
        assert_eq!(checkout.total(), Price::from_euros(5));
    }

    #[test]
    fn test_draft_is_uppercased() {
        let mut checkout = CheckoutSelection::default();
        checkout.set_draft("lebron");
        assert_eq!(checkout.draft(), "LEBRON");
        assert!(checkout.apply_draft().is_applied());
    }

    #[test]
    fn test_bad_plan_params_fall_back() {
        for param in ["", "Pack Duo", "Pack 250 unidades"] {
            let checkout = CheckoutSelection::from_plan_param(Some(param));
            assert_eq!(checkout.plan().name, "Pack Individual", "param {param:?}");
        }
    }

    #[test]
    fn test_follow_plan_param() {
        let mut checkout = CheckoutSelection::from_plan_param(Some("Pack Dúo"));
        checkout.apply_code("LEBRON");

        checkout.follow_plan_param(Some("Pack Dúo"));
        assert_eq!(checkout.total(), Price::from_euros(13));

        checkout.follow_plan_param(Some("Pack Familia"));
        assert_eq!(checkout.plan().name, "Pack Familia");
        assert!(checkout.applied().is_none());
        assert_eq!(checkout.total(), Price::from_euros(28));

        checkout.follow_plan_param(None);
        assert_eq!(checkout.plan().name, "Pack Individual");
    }

    #[test]
    fn test_unit_label() {
        assert_eq!(CheckoutSelection::default().unit_label(), "1 unidad");
        let familia = CheckoutSelection::from_plan_param(Some("Pack Familia"));
        assert_eq!(familia.unit_label(), "4 unidades");
    }

    #[test]
    fn test_total_is_not_floored() {
        static SAMPLE: Plan = Plan {
            name: "Muestra",
            unit_count: 1,
            price: Price::from_euros(3),
            tier: PlanTier::Player,
            blurb: "Spray de prueba",
        };

        let mut checkout = CheckoutSelection::new(&SAMPLE);
        assert!(checkout.apply_code("PAQUITO").is_applied());
        assert!(checkout.discount_exceeds_price());
        assert_eq!(checkout.total(), Price::from_euros(-2));
    }
}
