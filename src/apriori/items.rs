use std::collections::HashMap;

use super::itemset::Itemset;
use crate::error::{AprioriError, Result};

/// Bidirectional mapping between item labels and dense positions.
///
/// Positions are assigned in first-seen order and never reused. Reverse
/// lookups index `labels` directly, so enumeration is always by position.
#[derive(Debug, Clone, Default)]
pub struct ItemDictionary {
    positions: HashMap<String, usize>,
    labels: Vec<String>,
}

impl ItemDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `label` if absent and return its position.
    pub fn add_item(&mut self, label: &str) -> usize {
        if let Some(&position) = self.positions.get(label) {
            return position;
        }
        let position = self.labels.len();
        self.positions.insert(label.to_owned(), position);
        self.labels.push(label.to_owned());
        position
    }

    pub fn position_of(&self, label: &str) -> Result<usize> {
        self.positions
            .get(label)
            .copied()
            .ok_or_else(|| AprioriError::UnknownLabel(label.to_owned()))
    }

    pub fn label_of(&self, position: usize) -> Result<&str> {
        self.labels
            .get(position)
            .map(String::as_str)
            .ok_or(AprioriError::UnknownItem(position))
    }

    /// All labels ordered by position.
    pub fn all_labels(&self) -> &[String] {
        &self.labels
    }

    pub fn count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels of the members of `itemset`, ascending by position.
    pub fn labels_of(&self, itemset: &Itemset) -> Result<Vec<String>> {
        itemset
            .members()
            .map(|position| self.label_of(position).map(str::to_owned))
            .collect()
    }

    /// Build an itemset from known labels.
    pub fn itemset_of<S: AsRef<str>>(&self, labels: &[S]) -> Result<Itemset> {
        let mut itemset = Itemset::with_capacity(self.count());
        for label in labels {
            itemset.set_bit(self.position_of(label.as_ref())?);
        }
        Ok(itemset)
    }
}
