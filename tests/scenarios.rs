//! End-to-end mining over the reference basket data set.

use apriori_rules::report::render_text;
use apriori_rules::{run, DatasetBuilder, MiningConfig};
use std::io::Cursor;

const BASKETS: &str = "A,B\nA,C\nA,B,C\nB,C\n";

fn support_of(report: &apriori_rules::MiningReport, items: &[&str]) -> Option<f64> {
    report
        .itemsets
        .iter()
        .find(|itemset| itemset.items == items)
        .map(|itemset| itemset.support)
}

#[test]
fn pairwise_level_is_final_result() {
    let dataset = DatasetBuilder::from_reader(Cursor::new(BASKETS), ',').unwrap();
    let report = run(&dataset, &MiningConfig::new(0.5, 0.7)).unwrap();

    assert!(report.warning.is_none());
    assert_eq!(report.itemsets.len(), 3);
    for pair in [["A", "B"], ["A", "C"], ["B", "C"]] {
        assert_eq!(support_of(&report, &pair), Some(0.5));
    }
    assert_eq!(support_of(&report, &["A", "B", "C"]), None);

    let singletons = &report.outcome.levels()[0];
    assert!(singletons.iter_itemsets().all(|(_, support)| support == 0.75));
}

#[test]
fn strict_confidence_emits_no_rules() {
    let dataset = DatasetBuilder::from_reader(Cursor::new(BASKETS), ',').unwrap();
    let report = run(&dataset, &MiningConfig::new(0.5, 0.7)).unwrap();

    assert_eq!(report.stats.emitted, 0);
    assert!(!render_text(&report).contains("->"));
}

#[test]
fn sample_data_file_mines() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/transactions.txt");
    let dataset = DatasetBuilder::from_path(path, ',').unwrap();
    let report = run(&dataset, &MiningConfig::default()).unwrap();

    assert!(!report.itemsets.is_empty());
    assert!(report.warning.is_none());
}
