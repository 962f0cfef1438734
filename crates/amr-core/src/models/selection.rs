use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The categories currently highlighted on a chart. Order carries no meaning.
/// Serialized as a plain list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Selection(BTreeSet<String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Copy of this selection with `category` added.
    pub fn with(&self, category: &str) -> Self {
        let mut categories = self.0.clone();
        categories.insert(category.to_string());
        Self(categories)
    }

    /// Copy of this selection with `category` removed.
    pub fn without(&self, category: &str) -> Self {
        let mut categories = self.0.clone();
        categories.remove(category);
        Self(categories)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
