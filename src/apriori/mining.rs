use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::builder::Dataset;
use super::items::ItemDictionary;
use super::itemset::{Itemset, ItemsetKey};
use super::transactions::{support, TransactionStore};
use super::utils::FrequentLevel;
use crate::config::MiningConfig;

/// Stage of the level-wise loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiningPhase {
    Init,
    LevelFilter,
    LevelJoin,
    Done,
}

/// Non-fatal conditions reported with a mining result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MiningWarning {
    /// The loop stopped after `max_iterations` joins without converging;
    /// the final level may not be maximal.
    IterationCapReached { max_iterations: usize },
}

impl fmt::Display for MiningWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiningWarning::IterationCapReached { max_iterations } => {
                write!(f, "maximum iterations reached ({})", max_iterations)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct MiningOutcome {
    levels: Vec<FrequentLevel>,
    iterations: usize,
    warning: Option<MiningWarning>,
}

impl MiningOutcome {
    fn empty() -> Self {
        Self {
            levels: Vec::new(),
            iterations: 0,
            warning: None,
        }
    }

    /// Every non-empty frequent level, in discovery order.
    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    /// The last non-empty frequent level: the mining result.
    pub fn final_level(&self) -> Option<&FrequentLevel> {
        self.levels.last()
    }

    pub fn frequent_itemsets(&self) -> &[Itemset] {
        self.final_level()
            .map(FrequentLevel::itemsets)
            .unwrap_or(&[])
    }

    /// Join iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn warning(&self) -> Option<&MiningWarning> {
        self.warning.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Level-wise frequent itemset miner.
///
/// Starts from every singleton, keeps candidates meeting `min_support`, and
/// joins every pair of distinct frequent itemsets into the next candidates
/// until a level comes back empty or `max_iterations` joins have run.
pub struct Apriori<'a> {
    items: &'a ItemDictionary,
    transactions: &'a TransactionStore,
    min_support: f64,
    max_iterations: usize,
    phase: MiningPhase,
}

impl<'a> Apriori<'a> {
    pub fn new(dataset: &'a Dataset, config: &MiningConfig) -> Self {
        Self::from_parts(
            dataset.items(),
            dataset.transactions(),
            config.min_support,
            config.max_iterations,
        )
    }

    pub fn from_parts(
        items: &'a ItemDictionary,
        transactions: &'a TransactionStore,
        min_support: f64,
        max_iterations: usize,
    ) -> Self {
        Self {
            items,
            transactions,
            min_support,
            max_iterations,
            phase: MiningPhase::Init,
        }
    }

    pub fn phase(&self) -> MiningPhase {
        self.phase
    }

    pub fn mine(&mut self) -> MiningOutcome {
        let _span = tracing::debug_span!(
            "apriori",
            items = self.items.count(),
            transactions = self.transactions.len(),
            min_support = self.min_support
        )
        .entered();

        self.phase = MiningPhase::Init;
        if self.transactions.is_empty() {
            tracing::info!("no transactions, nothing to mine");
            self.phase = MiningPhase::Done;
            return MiningOutcome::empty();
        }
        let candidates = self.initial_candidates();

        self.phase = MiningPhase::LevelFilter;
        let mut current = self.filter(&candidates, 0);

        let mut outcome = MiningOutcome::empty();
        while !current.is_empty() {
            if outcome.iterations == self.max_iterations {
                tracing::warn!(
                    max_iterations = self.max_iterations,
                    frequent = current.len(),
                    "maximum iterations reached before convergence"
                );
                outcome.warning = Some(MiningWarning::IterationCapReached {
                    max_iterations: self.max_iterations,
                });
                outcome.levels.push(current);
                break;
            }

            self.phase = MiningPhase::LevelJoin;
            let candidates = join(&current);
            outcome.iterations += 1;

            self.phase = MiningPhase::LevelFilter;
            let next = self.filter(&candidates, outcome.iterations);
            outcome.levels.push(current);
            current = next;
        }

        self.phase = MiningPhase::Done;
        tracing::info!(
            iterations = outcome.iterations,
            frequent = outcome.frequent_itemsets().len(),
            "mining finished"
        );
        outcome
    }

    fn initial_candidates(&self) -> Vec<Itemset> {
        (0..self.items.count())
            .map(|position| Itemset::from_positions([position]))
            .collect()
    }

    /// Keep candidates with `support >= min_support`. Repeated candidates are
    /// scored once and stored once.
    fn filter(&self, candidates: &[Itemset], iteration: usize) -> FrequentLevel {
        let mut level = FrequentLevel::new(iteration);
        let mut scored: HashMap<ItemsetKey, f64> = HashMap::new();

        for candidate in candidates {
            let candidate_support = *scored
                .entry(candidate.canonical_key())
                .or_insert_with(|| support(candidate, self.transactions));

            if candidate_support >= self.min_support {
                level.add_itemset_with_support(candidate.clone(), candidate_support);
            }
        }

        tracing::debug!(
            iteration,
            candidates = candidates.len(),
            distinct = scored.len(),
            frequent = level.len(),
            "level filtered"
        );
        level
    }
}

/// Union of every unordered pair of distinct itemsets in `level`.
///
/// The result size is not restricted to one more than the inputs; the
/// filter alone decides what survives.
pub fn join(level: &FrequentLevel) -> Vec<Itemset> {
    let itemsets = level.itemsets();
    let keys: Vec<ItemsetKey> = itemsets.iter().map(Itemset::canonical_key).collect();
    let n = itemsets.len();

    let mut candidates = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            if keys[i] == keys[j] {
                continue;
            }
            candidates.push(itemsets[i].union(&itemsets[j]));
        }
    }
    candidates
}
