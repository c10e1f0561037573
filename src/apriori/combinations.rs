/// Largest member count enumerated with bitmasks. `2^24` subsets is already
/// far beyond any frequent itemset seen in practice.
///
/// The recursive fallback still visits all `2^k` subsets. Past this bound it
/// only keeps the `u64` mask from overflowing; it does not bound the cost.
pub const MAX_BITMASK_ITEMS: usize = 24;

/// Calls `visit` with every subset of `items`, empty and full set included.
///
/// Subsets keep the relative order of `items`. Up to [`MAX_BITMASK_ITEMS`]
/// members the `2^k` masks are walked in ascending order; larger inputs fall
/// back to size-by-size recursive combination generation.
pub fn for_each_subset<T, F>(items: &[T], mut visit: F)
where
    T: Copy,
    F: FnMut(&[T]),
{
    let k = items.len();
    let mut subset = Vec::with_capacity(k);

    if k <= MAX_BITMASK_ITEMS {
        for mask in 0u64..(1u64 << k) {
            subset.clear();
            subset.extend(
                items
                    .iter()
                    .enumerate()
                    .filter(|&(idx, _)| mask & (1u64 << idx) != 0)
                    .map(|(_, &item)| item),
            );
            visit(&subset);
        }
        return;
    }

    tracing::warn!(
        members = k,
        limit = MAX_BITMASK_ITEMS,
        "itemset too large for bitmask enumeration, using recursive generation"
    );
    for size in 0..=k {
        subset.clear();
        generate_combinations_recursive(items, size, 0, &mut subset, &mut visit);
    }
}

/// All `k`-combinations of `items` starting at `start`, in lexicographic order.
pub fn generate_combinations_recursive<T, F>(
    items: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    callback: &mut F,
) where
    T: Copy,
    F: FnMut(&[T]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
