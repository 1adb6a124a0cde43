//! Landing-page plan selector

use crate::catalog::{self, Plan, PlanTier};
use crate::routes::CheckoutRequest;

/// Visible tab of the pricing section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogTab {
    #[default]
    Players,
    Business,
}

impl CatalogTab {
    pub fn tier(&self) -> PlanTier {
        match self {
            CatalogTab::Players => PlanTier::Player,
            CatalogTab::Business => PlanTier::Business,
        }
    }

    pub fn label(&self) -> &'static str {
        self.tier().name()
    }

    pub fn packs(&self) -> &'static [Plan] {
        catalog::packs_for(self.tier())
    }
}

/// Single selection across both tabs. Switching tabs keeps the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSelector {
    tab: CatalogTab,
    selected: Option<&'static Plan>,
}

impl PlanSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> CatalogTab {
        self.tab
    }

    pub fn show(&mut self, tab: CatalogTab) {
        self.tab = tab;
    }

    pub fn select(&mut self, plan: &'static Plan) {
        tracing::debug!(plan = plan.name, "plan selected");
        self.selected = Some(plan);
    }

    pub fn selected(&self) -> Option<&'static Plan> {
        self.selected
    }

    pub fn is_selected(&self, plan: &Plan) -> bool {
        self.selected.is_some_and(|s| s.name == plan.name)
    }

    /// Whether the current selection can go through checkout
    pub fn can_purchase(&self) -> bool {
        self.selected.is_some_and(|plan| plan.is_purchasable())
    }

    /// Checkout hand-off for the current selection. `None` when nothing is
    /// selected or the selection is a business pack.
    pub fn purchase(&self) -> Option<CheckoutRequest> {
        self.selected
            .filter(|plan| plan.is_purchasable())
            .map(|plan| CheckoutRequest::for_plan(plan.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{business_packs, player_packs};

    #[test]
    fn test_purchase_without_selection_is_noop() {
        let selector = PlanSelector::new();
        assert_eq!(selector.tab(), CatalogTab::Players);
        assert!(selector.purchase().is_none());
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut selector = PlanSelector::new();
        selector.select(&player_packs()[0]);
        selector.select(&player_packs()[2]);

        assert!(!selector.is_selected(&player_packs()[0]));
        assert!(selector.is_selected(&player_packs()[2]));
        assert_eq!(
            selector.purchase(),
            Some(CheckoutRequest::for_plan("Pack Familia"))
        );
    }

    #[test]
    fn test_selection_survives_tab_switch() {
        let mut selector = PlanSelector::new();
        selector.select(&player_packs()[1]);
        selector.show(CatalogTab::Business);
        assert_eq!(selector.selected().map(|p| p.name), Some("Pack Dúo"));

        selector.select(&business_packs()[0]);
        selector.show(CatalogTab::Players);
        assert!(!selector.is_selected(&player_packs()[1]));
        assert_eq!(selector.selected().map(|p| p.name), Some("Pack 100 unidades"));
    }

    #[test]
    fn test_business_selection_cannot_purchase() {
        let mut selector = PlanSelector::new();
        selector.select(&player_packs()[0]);
        assert!(selector.can_purchase());

        selector.show(CatalogTab::Business);
        selector.select(&business_packs()[0]);
        selector.show(CatalogTab::Players);

        assert!(!selector.can_purchase());
        assert!(selector.purchase().is_none());
    }

    #[test]
    fn test_tab_packs() {
        assert_eq!(CatalogTab::Players.packs().len(), 3);
        assert_eq!(CatalogTab::Business.label(), "Empresas");
    }
}
