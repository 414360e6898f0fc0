//! The dossier's tab set, shared by the desktop app and the CLI.

use vcb_model::ConfigurationError;

use crate::tabs::{TabContainer, TabSpec};

/// One panel of the dossier, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DossierTab {
    Crisis,
    Impact,
    Solution,
    Mandates,
    Legal,
    Market,
    Competition,
    Financials,
    Funding,
    Appendix,
}

impl DossierTab {
    pub const INITIAL: Self = Self::Crisis;

    pub fn all() -> &'static [Self] {
        &[
            Self::Crisis,
            Self::Impact,
            Self::Solution,
            Self::Mandates,
            Self::Legal,
            Self::Market,
            Self::Competition,
            Self::Financials,
            Self::Funding,
            Self::Appendix,
        ]
    }

    /// Stable identifier used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Self::Crisis => "crisis",
            Self::Impact => "impact",
            Self::Solution => "solution",
            Self::Mandates => "mandates",
            Self::Legal => "legal",
            Self::Market => "market",
            Self::Competition => "competition",
            Self::Financials => "financials",
            Self::Funding => "funding",
            Self::Appendix => "appendix",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Crisis => "The Crisis",
            Self::Impact => "Impact",
            Self::Solution => "The Solution",
            Self::Mandates => "Mandates",
            Self::Legal => "Legal Cases",
            Self::Market => "Market",
            Self::Competition => "Why We Win",
            Self::Financials => "Financials",
            Self::Funding => "The Vision",
            Self::Appendix => "Appendix",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|tab| tab.id() == id)
    }
}

/// The tab container for the dossier, starting on [`DossierTab::INITIAL`].
pub fn dossier_tabs() -> Result<TabContainer<DossierTab>, ConfigurationError> {
    let specs = DossierTab::all()
        .iter()
        .map(|&tab| TabSpec::new(tab, tab.label()))
        .collect();
    TabContainer::new(specs, DossierTab::INITIAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dossier_starts_on_crisis() {
        let tabs = dossier_tabs().unwrap();
        assert_eq!(tabs.active(), DossierTab::Crisis);
        assert_eq!(tabs.tabs().len(), 10);
        assert_eq!(tabs.active_label(), "The Crisis");
    }

    #[test]
    fn ids_round_trip_and_are_unique() {
        for &tab in DossierTab::all() {
            assert_eq!(DossierTab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(DossierTab::from_id("pricing"), None);
    }

    #[test]
    fn previous_from_first_wraps_to_appendix() {
        let mut tabs = dossier_tabs().unwrap();
        assert_eq!(tabs.select_previous(), DossierTab::Appendix);
        assert_eq!(tabs.select_next(), DossierTab::Crisis);
    }
}
