use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

const WORD_BITS: usize = 64;

/// Growable bit-vector over item positions.
///
/// Bit `i` is at `words[i / 64] & (1 << (i % 64))`. Storage only grows;
/// equality, hashing and the canonical key ignore trailing zero words, so two
/// itemsets with the same members compare equal whatever their capacity.
#[derive(Debug, Clone, Default)]
pub struct Itemset {
    words: Vec<u64>,
}

/// Canonical identity of an itemset, independent of the number of items.
///
/// Holds the significant words of the bit-vector (trailing zero words
/// removed) and orders them as an unsigned big integer would.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemsetKey(Vec<u64>);

impl Itemset {
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    pub fn with_capacity(positions: usize) -> Self {
        Self {
            words: Vec::with_capacity(positions.div_ceil(WORD_BITS)),
        }
    }

    pub fn from_positions(positions: impl IntoIterator<Item = usize>) -> Self {
        let mut itemset = Self::new();
        for position in positions {
            itemset.set_bit(position);
        }
        itemset
    }

    #[inline]
    pub fn set_bit(&mut self, position: usize) {
        let word = position / WORD_BITS;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1u64 << (position % WORD_BITS);
    }

    /// Positions beyond the current storage are absent.
    #[inline]
    pub fn has_bit(&self, position: usize) -> bool {
        let mask = 1u64 << (position % WORD_BITS);
        self.words
            .get(position / WORD_BITS)
            .map_or(false, |word| word & mask != 0)
    }

    /// In-place bitwise OR. Storage grows to the longer of the two.
    pub fn union_with(&mut self, other: &Itemset) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (word, &theirs) in self.words.iter_mut().zip(other.words.iter()) {
            *word |= theirs;
        }
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut merged = self.clone();
        merged.union_with(other);
        merged
    }

    /// True when every member of `self` is also a member of `other`.
    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        self.words.iter().enumerate().all(|(idx, &word)| {
            let theirs = other.words.get(idx).copied().unwrap_or(0);
            word & !theirs == 0
        })
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Number of 64-bit storage words currently allocated.
    pub fn storage_words(&self) -> usize {
        self.words.len()
    }

    pub fn canonical_key(&self) -> ItemsetKey {
        ItemsetKey(self.significant_words().to_vec())
    }

    /// Member positions in ascending order.
    pub fn members(&self) -> Members<'_> {
        Members {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    fn significant_words(&self) -> &[u64] {
        let len = self
            .words
            .iter()
            .rposition(|&word| word != 0)
            .map_or(0, |last| last + 1);
        &self.words[..len]
    }
}

impl PartialEq for Itemset {
    fn eq(&self, other: &Self) -> bool {
        self.significant_words() == other.significant_words()
    }
}

impl Eq for Itemset {}

impl Hash for Itemset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}

impl FromIterator<usize> for Itemset {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_positions(iter)
    }
}

impl ItemsetKey {
    pub fn words(&self) -> &[u64] {
        &self.0
    }
}

impl Ord for ItemsetKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.iter().rev().cmp(other.0.iter().rev()))
    }
}

impl PartialOrd for ItemsetKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ascending iterator over the set bits of an [`Itemset`].
#[derive(Debug, Clone)]
pub struct Members<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl Iterator for Members<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.index * WORD_BITS + bit);
            }
            if self.index + 1 >= self.words.len() {
                self.index = self.words.len();
                return None;
            }
            self.index += 1;
            self.current = self.words[self.index];
        }
    }
}
