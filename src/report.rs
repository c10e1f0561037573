//! Rendering of mining reports for the command line.

use std::fmt;

use crate::apriori::MiningReport;
use crate::error::Result;

/// One block per frequent itemset followed by its qualifying rules.
impl fmt::Display for MiningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(warning) = &self.warning {
            writeln!(f, "WARNING: {}", warning)?;
        }
        if self.itemsets.is_empty() {
            return writeln!(f, "no frequent itemsets");
        }

        for itemset in &self.itemsets {
            writeln!(f, "\n{{ {} }}  support={:.3}", itemset.items.join(", "), itemset.support)?;
            writeln!(f, "Association Rules:")?;
            for rule in &itemset.rules {
                writeln!(
                    f,
                    "{}  confidence={:.3} lift={:.3}",
                    rule, rule.confidence, rule.lift
                )?;
            }
        }
        Ok(())
    }
}

pub fn render_text(report: &MiningReport) -> String {
    report.to_string()
}

pub fn render_json(report: &MiningReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apriori::{run, DatasetBuilder};
    use crate::config::MiningConfig;

    fn report() -> MiningReport {
        let mut builder = DatasetBuilder::new();
        builder
            .add_transaction(["bread", "butter"])
            .add_transaction(["bread", "butter"])
            .add_transaction(["bread", "jam"])
            .add_transaction(["milk"]);
        run(&builder.build(), &MiningConfig::new(0.5, 0.6)).unwrap()
    }

    #[test]
    fn test_render_text_lists_itemsets_and_rules() {
        let text = render_text(&report());
        assert!(text.contains("{ bread, butter }  support=0.500"));
        assert!(text.contains("bread -> butter  confidence=0.667 lift=1.333"));
        assert!(!text.contains("WARNING"));
    }

    #[test]
    fn test_render_empty_report() {
        let dataset = DatasetBuilder::new().build();
        let report = run(&dataset, &MiningConfig::default()).unwrap();
        assert_eq!(render_text(&report), "no frequent itemsets\n");
    }

    #[test]
    fn test_render_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&report()).unwrap()).unwrap();
        assert_eq!(json["itemsets"][0]["items"], serde_json::json!(["bread", "butter"]));
        assert_eq!(json["itemsets"][0]["rules"][0]["antecedent"], serde_json::json!(["bread"]));
        assert!(json["warning"].is_null());
        assert!(json.get("outcome").is_none());
    }

    #[test]
    fn test_display_leads_with_cap_warning() {
        let mut builder = DatasetBuilder::new();
        builder
            .add_transaction(["A", "B"])
            .add_transaction(["A", "C"])
            .add_transaction(["A", "B", "C"])
            .add_transaction(["B", "C"]);
        let config = MiningConfig::new(0.5, 0.6).with_max_iterations(1);
        let report = run(&builder.build(), &config).unwrap();

        let text = render_text(&report);
        assert_eq!(text, report.to_string());
        assert!(text.starts_with("WARNING: maximum iterations reached (1)\n"));
        assert!(text.contains("A -> B  confidence=0.667 lift=0.889"));
    }
}
