//! Property-based tests for itemset encoding, dictionary assignment and support.

use apriori_rules::apriori::support;
use apriori_rules::{Apriori, Dataset, DatasetBuilder, ItemDictionary, Itemset, MiningConfig, TransactionStore};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

fn positions() -> impl Strategy<Value = BTreeSet<usize>> {
    btree_set(0usize..300, 0..24)
}

proptest! {
    #[test]
    fn prop_positions_follow_first_sight(labels in vec("[a-e]{1,2}", 0..40)) {
        let mut items = ItemDictionary::new();
        let mut seen: Vec<String> = Vec::new();

        for label in &labels {
            let before = items.count();
            let position = items.add_item(label);
            match seen.iter().position(|known| known == label) {
                Some(existing) => {
                    prop_assert_eq!(position, existing);
                    prop_assert_eq!(items.count(), before);
                }
                None => {
                    prop_assert_eq!(position, seen.len());
                    seen.push(label.clone());
                }
            }
        }
        prop_assert_eq!(items.all_labels(), seen.as_slice());
    }

    #[test]
    fn prop_union_is_bitwise_or(a in positions(), b in positions()) {
        let left = Itemset::from_positions(a.iter().copied());
        let right = Itemset::from_positions(b.iter().copied());
        let mut merged = left.clone();
        merged.union_with(&right);

        for position in 0..320 {
            prop_assert_eq!(merged.has_bit(position), left.has_bit(position) || right.has_bit(position));
        }
        let expected: Vec<usize> = a.union(&b).copied().collect();
        prop_assert_eq!(merged.members().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_equality_matches_membership(a in positions(), b in positions()) {
        let left = Itemset::from_positions(a.iter().copied());
        let right = Itemset::from_positions(b.iter().copied());

        prop_assert_eq!(left == right, a == b);
        prop_assert_eq!(left.canonical_key() == right.canonical_key(), a == b);
    }

    #[test]
    fn prop_support_is_a_fraction(
        rows in vec(positions(), 1..20),
        probe in positions(),
    ) {
        let transactions: TransactionStore = rows
            .iter()
            .map(|row| Itemset::from_positions(row.iter().copied()))
            .collect();
        let value = support(&Itemset::from_positions(probe.iter().copied()), &transactions);

        prop_assert!((0.0..=1.0).contains(&value));
        prop_assert_eq!(support(&Itemset::new(), &transactions), 1.0);
    }

    #[test]
    fn prop_mining_is_deterministic(
        rows in vec(btree_set(0usize..8, 1..5), 1..15),
        min_support in 0.2f64..0.9,
    ) {
        let mut builder = DatasetBuilder::new();
        for row in &rows {
            builder.add_transaction(row.iter().map(|item| format!("item{}", item)));
        }
        let dataset = builder.build();
        let config = MiningConfig::new(min_support, 0.5);

        let keys = |dataset: &Dataset| -> HashSet<_> {
            Apriori::new(dataset, &config)
                .mine()
                .frequent_itemsets()
                .iter()
                .map(Itemset::canonical_key)
                .collect()
        };
        prop_assert_eq!(keys(&dataset), keys(&dataset));
    }
}
