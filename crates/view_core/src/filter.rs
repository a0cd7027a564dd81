//! Portfolio filter model: one active category driving the visible subset of
//! the static catalog.

use shared::domain::{CategoryFilter, PortfolioItem};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown portfolio category: {0:?}")]
    UnknownCategory(String),
}

/// Holds the active category selection and derives the visible items.
/// Recomputing the visible set is pure; the grid animates items in and out
/// keyed by item id, so order stability matters: items always come back in
/// catalog order, never in selection order.
#[derive(Debug, Clone)]
pub struct PortfolioFilter {
    catalog: &'static [PortfolioItem],
    active: CategoryFilter,
}

impl PortfolioFilter {
    pub fn new(catalog: &'static [PortfolioItem]) -> Self {
        Self {
            catalog,
            active: CategoryFilter::All,
        }
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    /// Selects the active category. Typed input cannot name a category
    /// outside the enumerated set, so this never fails and repeated calls
    /// with the same value are no-ops in effect.
    pub fn set_category(&mut self, filter: CategoryFilter) {
        if self.active != filter {
            tracing::debug!(from = self.active.label(), to = filter.label(), "portfolio filter changed");
        }
        self.active = filter;
    }

    /// String entry point for untyped callers (CLI flag). Unknown labels are
    /// rejected outright rather than silently producing an empty grid.
    pub fn set_category_label(&mut self, label: &str) -> Result<(), FilterError> {
        match CategoryFilter::from_label(label) {
            Some(filter) => {
                self.set_category(filter);
                Ok(())
            }
            None => Err(FilterError::UnknownCategory(label.to_string())),
        }
    }

    /// All catalog items matching the active category, in catalog order.
    /// `All` yields the entire catalog.
    pub fn visible_items(&self) -> impl Iterator<Item = &'static PortfolioItem> + '_ {
        self.catalog
            .iter()
            .filter(|item| self.active.matches(item.category))
    }

    pub fn visible_count(&self) -> usize {
        self.visible_items().count()
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
