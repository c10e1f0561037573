use super::itemset::Itemset;

/// The fixed collection of input transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Itemset>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, transaction: Itemset) {
        self.transactions.push(transaction);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Itemset> {
        self.transactions.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Itemset> {
        self.transactions.iter()
    }

    /// Fraction of transactions containing `itemset`; see [`support`].
    pub fn support(&self, itemset: &Itemset) -> f64 {
        support(itemset, self)
    }
}

impl FromIterator<Itemset> for TransactionStore {
    fn from_iter<I: IntoIterator<Item = Itemset>>(iter: I) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}

/// Number of transactions that are supersets of `itemset`.
pub fn support_count(itemset: &Itemset, transactions: &TransactionStore) -> usize {
    transactions
        .iter()
        .filter(|transaction| itemset.is_subset_of(transaction))
        .count()
}

/// Support of `itemset` in `[0, 1]`.
///
/// An empty store has no evidence for anything: support is 0.
pub fn support(itemset: &Itemset, transactions: &TransactionStore) -> f64 {
    if transactions.is_empty() {
        return 0.0;
    }
    support_count(itemset, transactions) as f64 / transactions.len() as f64
}
