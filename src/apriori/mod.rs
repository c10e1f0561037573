pub mod builder;
pub mod combinations;
pub mod items;
pub mod itemset;
pub mod mining;
pub mod rules;
pub mod transactions;
pub mod utils;


use serde::Serialize;

pub use builder::{Dataset, DatasetBuilder, DEFAULT_DELIMITER};
pub use items::ItemDictionary;
pub use itemset::{Itemset, ItemsetKey};
pub use mining::{Apriori, MiningOutcome, MiningPhase, MiningWarning};
pub use rules::{AssociationRule, ItemsetRules, RuleEngine, RuleStats};
pub use transactions::{support, support_count, TransactionStore};
pub use utils::FrequentLevel;

use crate::config::{LiftPolicy, MiningConfig};
use crate::error::Result;

/// Frequent itemsets of the final level with their rules.
#[derive(Debug, Clone, Serialize)]
pub struct MiningReport {
    pub itemsets: Vec<ItemsetRules>,
    pub stats: RuleStats,
    pub iterations: usize,
    pub warning: Option<MiningWarning>,
    #[serde(skip)]
    pub outcome: MiningOutcome,
}

/// Mine `dataset` and derive rules for every itemset of the final level.
///
/// Fails only on invalid configuration or a label lookup for a position the
/// dataset's dictionary does not own.
pub fn run(dataset: &Dataset, config: &MiningConfig) -> Result<MiningReport> {
    config.validate()?;

    if let (Some(min_lift), LiftPolicy::Reserved) = (config.min_lift, config.lift_policy) {
        tracing::warn!(min_lift, "min_lift is accepted but not enforced under the reserved lift policy");
    }

    let outcome = Apriori::new(dataset, config).mine();
    let (itemsets, stats) = match outcome.final_level() {
        Some(level) => RuleEngine::new(dataset, config).derive(level)?,
        None => (Vec::new(), RuleStats::default()),
    };

    Ok(MiningReport {
        itemsets,
        stats,
        iterations: outcome.iterations(),
        warning: outcome.warning().cloned(),
        outcome,
    })
}
