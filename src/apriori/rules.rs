use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::builder::Dataset;
use super::combinations::for_each_subset;
use super::items::ItemDictionary;
use super::itemset::{Itemset, ItemsetKey};
use super::transactions::{support, TransactionStore};
use super::utils::FrequentLevel;
use crate::config::MiningConfig;
use crate::error::Result;

/// An antecedent/consequent split of a frequent itemset with its scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationRule {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    /// Support of antecedent ∪ consequent.
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.antecedent.join(" "), self.consequent.join(" "))
    }
}

/// A frequent itemset and the rules derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemsetRules {
    pub items: Vec<String>,
    pub support: f64,
    pub rules: Vec<AssociationRule>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RuleStats {
    pub evaluated: usize,
    pub emitted: usize,
    pub below_confidence: usize,
    pub below_lift: usize,
    /// Rejected because the antecedent or consequent had zero support.
    pub degenerate: usize,
}

impl RuleStats {
    pub fn merge(&mut self, other: &RuleStats) {
        self.evaluated += other.evaluated;
        self.emitted += other.emitted;
        self.below_confidence += other.below_confidence;
        self.below_lift += other.below_lift;
        self.degenerate += other.degenerate;
    }
}

/// `support(A ∪ C) / support(A)`, or `None` when `support(A)` is zero.
pub fn confidence(rule_support: f64, antecedent_support: f64) -> Option<f64> {
    if antecedent_support > 0.0 {
        Some(rule_support / antecedent_support)
    } else {
        None
    }
}

/// `confidence / support(C)`, or `None` when `support(C)` is zero.
pub fn lift(confidence: f64, consequent_support: f64) -> Option<f64> {
    if consequent_support > 0.0 {
        Some(confidence / consequent_support)
    } else {
        None
    }
}

/// Derives association rules from frequent itemsets.
pub struct RuleEngine<'a> {
    items: &'a ItemDictionary,
    transactions: &'a TransactionStore,
    min_confidence: f64,
    min_lift: Option<f64>,
}

impl<'a> RuleEngine<'a> {
    pub fn new(dataset: &'a Dataset, config: &MiningConfig) -> Self {
        Self::from_parts(
            dataset.items(),
            dataset.transactions(),
            config.min_confidence,
            config.enforced_min_lift(),
        )
    }

    /// `min_lift` is applied as a filter only when given here.
    pub fn from_parts(
        items: &'a ItemDictionary,
        transactions: &'a TransactionStore,
        min_confidence: f64,
        min_lift: Option<f64>,
    ) -> Self {
        Self {
            items,
            transactions,
            min_confidence,
            min_lift,
        }
    }

    /// Rules for every itemset of `level`, in level order.
    pub fn derive(&self, level: &FrequentLevel) -> Result<(Vec<ItemsetRules>, RuleStats)> {
        let mut stats = RuleStats::default();
        let mut derived = Vec::with_capacity(level.len());

        for (itemset, itemset_support) in level.iter_itemsets() {
            let rules = self.rules_for(itemset, &mut stats)?;
            derived.push(ItemsetRules {
                items: self.items.labels_of(itemset)?,
                support: itemset_support,
                rules,
            });
        }

        tracing::debug!(
            itemsets = derived.len(),
            evaluated = stats.evaluated,
            emitted = stats.emitted,
            degenerate = stats.degenerate,
            "rules derived"
        );
        Ok((derived, stats))
    }

    /// Enumerates every subset of `itemset` with at least two members and
    /// splits it at each point `p` into `subset[..p] -> subset[p..]`.
    /// A rule is kept when its confidence is strictly above the threshold.
    pub fn rules_for(&self, itemset: &Itemset, stats: &mut RuleStats) -> Result<Vec<AssociationRule>> {
        let positions: Vec<usize> = itemset.members().collect();
        let labels = self.items.labels_of(itemset)?;
        let indices: Vec<usize> = (0..positions.len()).collect();

        let mut supports: HashMap<ItemsetKey, f64> = HashMap::new();
        let mut support_of = |set: &Itemset| -> f64 {
            *supports
                .entry(set.canonical_key())
                .or_insert_with(|| support(set, self.transactions))
        };

        let mut rules = Vec::new();
        for_each_subset(&indices, |subset| {
            if subset.len() < 2 {
                return;
            }
            let whole = Itemset::from_positions(subset.iter().map(|&idx| positions[idx]));
            let whole_support = support_of(&whole);

            for split in 1..subset.len() {
                stats.evaluated += 1;
                let (front, back) = subset.split_at(split);
                let antecedent = Itemset::from_positions(front.iter().map(|&idx| positions[idx]));
                let consequent = Itemset::from_positions(back.iter().map(|&idx| positions[idx]));

                let Some(rule_confidence) = confidence(whole_support, support_of(&antecedent)) else {
                    stats.degenerate += 1;
                    continue;
                };
                if rule_confidence <= self.min_confidence {
                    stats.below_confidence += 1;
                    continue;
                }
                let Some(rule_lift) = lift(rule_confidence, support_of(&consequent)) else {
                    stats.degenerate += 1;
                    continue;
                };
                if self.min_lift.map_or(false, |min_lift| rule_lift < min_lift) {
                    stats.below_lift += 1;
                    continue;
                }

                stats.emitted += 1;
                rules.push(AssociationRule {
                    antecedent: front.iter().map(|&idx| labels[idx].clone()).collect(),
                    consequent: back.iter().map(|&idx| labels[idx].clone()).collect(),
                    support: whole_support,
                    confidence: rule_confidence,
                    lift: rule_lift,
                });
            }
        });

        Ok(rules)
    }
}
