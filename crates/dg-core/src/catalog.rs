//! Plan catalog
//!
//! The two fixed pack lists shown on the landing page. Only player packs can
//! be bought through checkout; business packs are sold by contact.

use crate::money::Price;
use crate::{CoreError, CoreResult};

/// Who a pack is sold to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanTier {
    Player,
    Business,
}

impl PlanTier {
    pub fn name(&self) -> &'static str {
        match self {
            PlanTier::Player => "Jugadores",
            PlanTier::Business => "Empresas",
        }
    }

    /// Whether packs of this tier go through checkout
    pub fn is_purchasable(&self) -> bool {
        matches!(self, PlanTier::Player)
    }
}

/// A purchasable product bundle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plan {
    pub name: &'static str,
    /// Number of sprays in the pack
    pub unit_count: u32,
    /// Price of the whole pack
    pub price: Price,
    pub tier: PlanTier,
    /// Short line shown under the pack name on the landing page
    pub blurb: &'static str,
}

impl Plan {
    /// Effective price of a single spray, rounded down to the cent
    pub fn price_per_unit(&self) -> Price {
        Price::from_cents(self.price.cents() / i64::from(self.unit_count.max(1)))
    }

    pub fn is_purchasable(&self) -> bool {
        self.tier.is_purchasable()
    }
}

pub const DEFAULT_PLAN_NAME: &str = "Pack Individual";

static PLAYER_PACKS: [Plan; 3] = [
    Plan {
        name: "Pack Individual",
        unit_count: 1,
        price: Price::from_euros(10),
        tier: PlanTier::Player,
        blurb: "1 spray DryGripPro",
    },
    Plan {
        name: "Pack Dúo",
        unit_count: 2,
        price: Price::from_euros(18),
        tier: PlanTier::Player,
        blurb: "2 sprays DryGripPro (10% dto.)",
    },
    Plan {
        name: "Pack Familia",
        unit_count: 4,
        price: Price::from_euros(28),
        tier: PlanTier::Player,
        blurb: "4 sprays DryGripPro (30% dto.)",
    },
];

static BUSINESS_PACKS: [Plan; 4] = [
    Plan {
        name: "Pack 100 unidades",
        unit_count: 100,
        price: Price::from_euros(899),
        tier: PlanTier::Business,
        blurb: "Ideal para clubs pequeños",
    },
    Plan {
        name: "Pack 250 unidades",
        unit_count: 250,
        price: Price::from_euros(1999),
        tier: PlanTier::Business,
        blurb: "Para clubs medianos",
    },
    Plan {
        name: "Pack 500 unidades",
        unit_count: 500,
        price: Price::from_euros(3499),
        tier: PlanTier::Business,
        blurb: "Clubs grandes",
    },
    Plan {
        name: "Pack 1000 unidades",
        unit_count: 1000,
        price: Price::from_euros(5999),
        tier: PlanTier::Business,
        blurb: "Distribuidores",
    },
];

pub fn player_packs() -> &'static [Plan] {
    &PLAYER_PACKS
}

pub fn business_packs() -> &'static [Plan] {
    &BUSINESS_PACKS
}

pub fn packs_for(tier: PlanTier) -> &'static [Plan] {
    match tier {
        PlanTier::Player => player_packs(),
        PlanTier::Business => business_packs(),
    }
}

pub fn all_plans() -> impl Iterator<Item = &'static Plan> {
    PLAYER_PACKS.iter().chain(BUSINESS_PACKS.iter())
}

pub fn default_plan() -> &'static Plan {
    &PLAYER_PACKS[0]
}

/// Find a plan of either tier by its exact name
pub fn find_plan(name: &str) -> Option<&'static Plan> {
    all_plans().find(|plan| plan.name == name)
}

/// Find a plan that can be bought through checkout
pub fn find_purchasable(name: &str) -> CoreResult<&'static Plan> {
    match find_plan(name) {
        Some(plan) if plan.is_purchasable() => Ok(plan),
        Some(plan) => Err(CoreError::NotPurchasable(plan.name.to_string())),
        None => Err(CoreError::UnknownPlan(name.to_string())),
    }
}
