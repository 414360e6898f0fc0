//! The tab container: one active panel out of a fixed, ordered set.

use std::fmt::Debug;

use vcb_model::ConfigurationError;

use crate::error::TabError;

/// A declared tab: identifier plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSpec<Id> {
    pub id: Id,
    pub label: String,
}

impl<Id> TabSpec<Id> {
    pub fn new(id: Id, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Owns the active tab. Exactly one declared id is active at all times.
#[derive(Debug, Clone)]
pub struct TabContainer<Id> {
    tabs: Vec<TabSpec<Id>>,
    active: usize,
}

impl<Id: Copy + PartialEq + Debug> TabContainer<Id> {
    /// Declares the tab set. Fails on an empty set, a repeated id, or an
    /// initial id that is not declared.
    pub fn new(tabs: Vec<TabSpec<Id>>, initial: Id) -> Result<Self, ConfigurationError> {
        if tabs.is_empty() {
            return Err(ConfigurationError::InvalidTabs {
                reason: "no tabs declared".to_string(),
            });
        }
        for (index, tab) in tabs.iter().enumerate() {
            if tabs[..index].iter().any(|earlier| earlier.id == tab.id) {
                return Err(ConfigurationError::InvalidTabs {
                    reason: format!("tab {:?} declared more than once", tab.id),
                });
            }
        }
        let active = tabs
            .iter()
            .position(|tab| tab.id == initial)
            .ok_or_else(|| ConfigurationError::InvalidTabs {
                reason: format!("initial tab {initial:?} is not declared"),
            })?;
        Ok(Self { tabs, active })
    }

    pub fn tabs(&self) -> &[TabSpec<Id>] {
        &self.tabs
    }

    pub fn active(&self) -> Id {
        self.tabs[self.active].id
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_label(&self) -> &str {
        &self.tabs[self.active].label
    }

    pub fn is_active(&self, id: Id) -> bool {
        self.active() == id
    }

    /// Makes `id` active. `Ok(false)` when it already was.
    ///
    /// Undeclared ids are rejected and leave the active tab unchanged.
    pub fn select(&mut self, id: Id) -> Result<bool, TabError> {
        let index = self
            .tabs
            .iter()
            .position(|tab| tab.id == id)
            .ok_or_else(|| TabError::Undeclared {
                id: format!("{id:?}"),
            })?;
        Ok(self.select_index(index))
    }

    /// Moves right, wrapping to the first tab.
    pub fn select_next(&mut self) -> Id {
        self.select_index((self.active + 1) % self.tabs.len());
        self.active()
    }

    /// Moves left, wrapping to the last tab.
    pub fn select_previous(&mut self) -> Id {
        let index = (self.active + self.tabs.len() - 1) % self.tabs.len();
        self.select_index(index);
        self.active()
    }

    fn select_index(&mut self, index: usize) -> bool {
        if index == self.active {
            return false;
        }
        tracing::debug!(from = ?self.active(), to = ?self.tabs[index].id, "Tab selected");
        self.active = index;
        true
    }

    /// Builds the active panel only. Inactive panels are never constructed.
    pub fn render_active<R>(&self, build: impl FnOnce(Id) -> R) -> R {
        build(self.active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dossier() -> TabContainer<&'static str> {
        TabContainer::new(
            vec![
                TabSpec::new("crisis", "The Crisis"),
                TabSpec::new("market", "Market"),
                TabSpec::new("cases", "Legal Cases"),
            ],
            "crisis",
        )
        .unwrap()
    }

    #[test]
    fn starts_on_initial_tab() {
        let tabs = dossier();
        assert_eq!(tabs.active(), "crisis");
        assert_eq!(tabs.active_index(), 0);
        assert_eq!(tabs.active_label(), "The Crisis");
    }

    #[test]
    fn market_cases_market_ends_on_market() {
        let mut tabs = dossier();
        tabs.select("market").unwrap();
        tabs.select("cases").unwrap();
        tabs.select("market").unwrap();
        assert_eq!(tabs.active(), "market");

        let mut built = Vec::new();
        tabs.render_active(|id| built.push(id));
        assert_eq!(built, vec!["market"]);
    }

    #[test]
    fn reselecting_active_tab_is_a_no_op() {
        let mut tabs = dossier();
        assert_eq!(tabs.select("crisis"), Ok(false));
        assert_eq!(tabs.select("market"), Ok(true));
        assert_eq!(tabs.select("market"), Ok(false));
    }

    #[test]
    fn undeclared_select_keeps_active_tab() {
        let mut tabs = dossier();
        tabs.select("market").unwrap();
        let err = tabs.select("vision").unwrap_err();
        assert_eq!(
            err,
            TabError::Undeclared {
                id: "\"vision\"".to_string()
            }
        );
        assert_eq!(tabs.active(), "market");
    }

    #[test]
    fn undeclared_initial_is_a_configuration_error() {
        let result = TabContainer::new(vec![TabSpec::new("crisis", "The Crisis")], "market");
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidTabs { .. })
        ));
    }

    #[test]
    fn empty_and_duplicate_sets_are_rejected() {
        assert!(TabContainer::<&str>::new(vec![], "crisis").is_err());
        let duplicated = vec![TabSpec::new("a", "A"), TabSpec::new("a", "Again")];
        assert!(TabContainer::new(duplicated, "a").is_err());
    }

    #[test]
    fn arrow_navigation_wraps() {
        let mut tabs = dossier();
        assert_eq!(tabs.select_previous(), "cases");
        assert_eq!(tabs.select_next(), "crisis");
        assert_eq!(tabs.select_next(), "market");
    }
}
