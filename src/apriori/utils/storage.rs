use std::collections::HashSet;

use crate::apriori::itemset::{Itemset, ItemsetKey};

/// Frequent itemsets retained at one iteration of the mining loop.
///
/// Itemsets keep their insertion order; a canonical key is admitted once.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    itemsets: Vec<Itemset>,
    supports: Vec<f64>,
    keys: HashSet<ItemsetKey>,
    pub iteration: usize,
}

impl FrequentLevel {
    pub fn new(iteration: usize) -> Self {
        Self {
            itemsets: Vec::new(),
            supports: Vec::new(),
            keys: HashSet::new(),
            iteration,
        }
    }

    /// Returns the index of the itemset, or `None` if its key is already stored.
    pub fn add_itemset_with_support(&mut self, itemset: Itemset, support: f64) -> Option<usize> {
        if !self.keys.insert(itemset.canonical_key()) {
            return None;
        }
        self.itemsets.push(itemset);
        self.supports.push(support);
        Some(self.itemsets.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &Itemset {
        &self.itemsets[idx]
    }

    pub fn get_support(&self, idx: usize) -> f64 {
        self.supports[idx]
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.keys.contains(&itemset.canonical_key())
    }

    pub fn itemsets(&self) -> &[Itemset] {
        &self.itemsets
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = (&Itemset, f64)> {
        self.itemsets.iter().zip(self.supports.iter().copied())
    }

    pub fn keys(&self) -> &HashSet<ItemsetKey> {
        &self.keys
    }
}
