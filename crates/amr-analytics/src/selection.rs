//! Which series are highlighted on the trend chart.

use amr_core::models::selection::Selection;
use amr_core::models::total::AggregatedTotal;

/// Series selected when a new ranked list arrives.
pub const DEFAULT_SELECTION_COUNT: usize = 3;

/// Add `category` when absent, remove it when present. Returns a new
/// selection; the input is untouched.
pub fn toggle(selection: &Selection, category: &str) -> Selection {
    if selection.contains(category) {
        selection.without(category)
    } else {
        selection.with(category)
    }
}

/// The first `count` categories of a ranked list.
pub fn default_selection(ranked: &[AggregatedTotal], count: usize) -> Selection {
    ranked.iter().take(count).map(|t| t.category.as_str()).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// The user clicked a bar or legend entry.
    Toggle(String),
    /// A filter change produced a new ranked list.
    Reseed(Vec<AggregatedTotal>),
}

/// Selection plus the reseed size, updated only through [`SelectionState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    selection: Selection,
    seed_count: usize,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTION_COUNT)
    }
}

impl SelectionState {
    pub fn new(seed_count: usize) -> Self {
        Self {
            selection: Selection::new(),
            seed_count,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn apply(&self, event: SelectionEvent) -> Self {
        let selection = match event {
            SelectionEvent::Toggle(category) => toggle(&self.selection, &category),
            SelectionEvent::Reseed(ranked) => default_selection(&ranked, self.seed_count),
        };
        Self {
            selection,
            seed_count: self.seed_count,
        }
    }
}
