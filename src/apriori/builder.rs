use ndarray::ArrayView2;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::items::ItemDictionary;
use super::itemset::Itemset;
use super::transactions::TransactionStore;
use crate::error::{AprioriError, Result};

pub const DEFAULT_DELIMITER: char = ',';

/// Item dictionary and transactions, read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    items: ItemDictionary,
    transactions: TransactionStore,
}

impl Dataset {
    pub fn items(&self) -> &ItemDictionary {
        &self.items
    }

    pub fn transactions(&self) -> &TransactionStore {
        &self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Accumulates transactions, assigning item positions on first sight.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    items: ItemDictionary,
    transactions: TransactionStore,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transaction<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut transaction = Itemset::new();
        for label in labels {
            transaction.set_bit(self.items.add_item(label.as_ref()));
        }
        self.transactions.push(transaction);
        self
    }

    /// Parse one transaction per line, labels split on `delimiter`.
    ///
    /// Labels are trimmed; empty lines and empty fields are skipped.
    pub fn read_lines<R: BufRead>(&mut self, reader: R, delimiter: char) -> std::io::Result<&mut Self> {
        for line in reader.lines() {
            let line = line?;
            let labels: Vec<&str> = line
                .split(delimiter)
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .collect();
            if labels.is_empty() {
                continue;
            }
            self.add_transaction(labels);
        }
        Ok(self)
    }

    pub fn build(self) -> Dataset {
        tracing::debug!(
            items = self.items.count(),
            transactions = self.transactions.len(),
            "dataset built"
        );
        Dataset {
            items: self.items,
            transactions: self.transactions,
        }
    }

    pub fn from_reader<R: BufRead>(reader: R, delimiter: char) -> std::io::Result<Dataset> {
        let mut builder = Self::new();
        builder.read_lines(reader, delimiter)?;
        Ok(builder.build())
    }

    pub fn from_path(path: impl AsRef<Path>, delimiter: char) -> Result<Dataset> {
        let path = path.as_ref();
        let unavailable = |source: std::io::Error| AprioriError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        Self::from_reader(BufReader::new(file), delimiter).map_err(unavailable)
    }

    /// One-hot transaction matrix: rows are transactions, a non-zero cell
    /// marks membership, column `j` is the item labelled `"j"`.
    ///
    /// Every column is registered up front so positions equal column indices.
    pub fn from_matrix(transactions: ArrayView2<i32>) -> Dataset {
        let num_transactions = transactions.shape()[0];
        let num_items = transactions.shape()[1];

        let mut builder = Self::new();
        for item in 0..num_items {
            builder.items.add_item(&item.to_string());
        }

        for tx_idx in 0..num_transactions {
            let transaction: Itemset = (0..num_items)
                .filter(|&item| transactions[[tx_idx, item]] != 0)
                .collect();
            builder.transactions.push(transaction);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_skips_blank_input() {
        let input = "A,B\r\n\nA, C\nB,,C\n";
        let dataset = DatasetBuilder::from_reader(Cursor::new(input), ',').unwrap();

        assert_eq!(dataset.transactions().len(), 3);
        assert_eq!(dataset.items().all_labels(), &["A", "B", "C"]);

        let third = dataset.transactions().get(2).unwrap();
        assert_eq!(third.members().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_custom_delimiter() {
        let dataset = DatasetBuilder::from_reader(Cursor::new("x;y\ny;z"), ';').unwrap();
        assert_eq!(dataset.items().count(), 3);
        assert_eq!(dataset.transactions().len(), 2);
    }

    #[test]
    fn test_missing_file_is_input_unavailable() {
        let err = DatasetBuilder::from_path("/definitely/not/here.txt", ',').unwrap_err();
        assert!(matches!(err, AprioriError::InputUnavailable { .. }));
    }

    #[test]
    fn test_from_matrix_positions_match_columns() {
        let matrix = Array2::from_shape_vec(
            (3, 4),
            vec![
                1, 0, 0, 1, // items 0, 3
                0, 0, 0, 0, // empty
                0, 1, 1, 0, // items 1, 2
            ],
        )
        .unwrap();

        let dataset = DatasetBuilder::from_matrix(matrix.view());
        assert_eq!(dataset.items().count(), 4);
        assert_eq!(dataset.items().label_of(3).unwrap(), "3");
        assert_eq!(dataset.transactions().len(), 3);

        let rows: Vec<Vec<usize>> = dataset
            .transactions()
            .iter()
            .map(|tx| tx.members().collect())
            .collect();
        assert_eq!(rows, vec![vec![0, 3], vec![], vec![1, 2]]);
    }
}
