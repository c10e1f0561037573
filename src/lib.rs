//! Apriori frequent itemset and association rule mining.
//!
//! ```no_run
//! use apriori_rules::{run, DatasetBuilder, MiningConfig};
//!
//! let dataset = DatasetBuilder::from_path("data/transactions.txt", ',')?;
//! let report = run(&dataset, &MiningConfig::new(0.5, 0.7))?;
//! for itemset in &report.itemsets {
//!     for rule in &itemset.rules {
//!         println!("{rule}");
//!     }
//! }
//! # Ok::<(), apriori_rules::AprioriError>(())
//! ```

pub mod apriori;
pub mod config;
pub mod error;
pub mod report;

#[cfg(feature = "python")]
mod python;

pub use apriori::{
    run, Apriori, AssociationRule, Dataset, DatasetBuilder, FrequentLevel, ItemDictionary, Itemset,
    ItemsetKey, ItemsetRules, MiningOutcome, MiningReport, MiningWarning, RuleEngine, RuleStats,
    TransactionStore,
};
pub use config::{LiftPolicy, MiningConfig};
pub use error::{AprioriError, Result};
