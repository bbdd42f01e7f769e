use super::tree::{FPTree, PatternBase};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use tracing::debug;

/// Per-item support counts, remembering the order in which items were first
/// seen so that equal supports always rank the same way.
#[derive(Debug, Clone)]
pub struct FrequencyMap<I> {
    counts: HashMap<I, usize>,
    first_seen: Vec<I>,
    num_transactions: usize,
}

impl<I: Eq + Hash + Clone> Default for FrequencyMap<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Eq + Hash + Clone> FrequencyMap<I> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            first_seen: Vec::new(),
            num_transactions: 0,
        }
    }

    /// Counts each distinct item of `transaction` once, weighted by `weight`.
    pub fn add_transaction<T>(&mut self, transaction: T, weight: usize)
    where
        T: IntoIterator<Item = I>,
    {
        self.num_transactions += 1;
        let mut seen = HashSet::new();

        for item in transaction {
            if !seen.insert(item.clone()) {
                continue;
            }
            match self.counts.get_mut(&item) {
                Some(count) => *count += weight,
                None => {
                    self.counts.insert(item.clone(), weight);
                    self.first_seen.push(item);
                }
            }
        }
    }

    pub fn support(&self, item: &I) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Items meeting `min_count`, ranked by descending support with first-seen
    /// order breaking ties.
    pub fn frequent_items(&self, min_count: usize) -> ItemOrder<I> {
        let mut frequent: Vec<(&I, usize)> = self
            .first_seen
            .iter()
            .map(|item| (item, self.support(item)))
            .filter(|&(_, count)| count >= min_count)
            .collect();

        frequent.sort_by(|a, b| b.1.cmp(&a.1));

        let items: Vec<I> = frequent.into_iter().map(|(item, _)| item.clone()).collect();
        let ranks = items
            .iter()
            .enumerate()
            .map(|(rank, item)| (item.clone(), rank))
            .collect();

        ItemOrder { items, ranks }
    }
}

/// Single scan counting how many transactions contain each item.
pub fn count_items<S, I>(transactions: S) -> FrequencyMap<I>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = I>,
    I: Eq + Hash + Clone,
{
    let mut frequencies = FrequencyMap::new();
    for transaction in transactions {
        frequencies.add_transaction(transaction, 1);
    }
    frequencies
}

/// The canonical insertion order of the frequent items of one tree scope.
#[derive(Debug, Clone)]
pub struct ItemOrder<I> {
    items: Vec<I>,
    ranks: HashMap<I, usize>,
}

impl<I: Eq + Hash + Clone> ItemOrder<I> {
    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rank(&self, item: &I) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    /// Drops infrequent and repeated items and sorts the rest by rank.
    pub fn normalize<T>(&self, transaction: T) -> Vec<I>
    where
        T: IntoIterator<Item = I>,
    {
        let mut ranked: Vec<(usize, I)> = transaction
            .into_iter()
            .filter_map(|item| self.rank(&item).map(|rank| (rank, item)))
            .collect();

        ranked.sort_unstable_by_key(|&(rank, _)| rank);
        ranked.dedup_by_key(|&mut (rank, _)| rank);
        ranked.into_iter().map(|(_, item)| item).collect()
    }
}

/// Second pass over the source: normalizes and inserts every transaction.
pub fn build_fp_tree<S, I>(transactions: S, order: &ItemOrder<I>) -> FPTree<I>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = I>,
    I: Eq + Hash + Clone,
{
    let mut fp_tree = FPTree::new();

    for transaction in transactions {
        let tx_items = order.normalize(transaction);
        if !tx_items.is_empty() {
            fp_tree.insert_transaction(&tx_items, 1);
        }
    }

    debug!(
        frequent_items = order.len(),
        nodes = fp_tree.node_count(),
        "built fp-tree"
    );
    fp_tree
}

/// Counts, filters and re-ranks a pattern base, then inserts each prefix with
/// its weight.
pub fn build_conditional_fp_tree<I>(prefix_paths: &PatternBase<I>, min_count: usize) -> FPTree<I>
where
    I: Eq + Hash + Clone,
{
    let mut frequencies = FrequencyMap::new();
    for (path, count) in prefix_paths {
        frequencies.add_transaction(path.iter().cloned(), *count);
    }

    let order = frequencies.frequent_items(min_count);
    let mut conditional_tree = FPTree::new();
    if order.is_empty() {
        return conditional_tree;
    }

    for (path, count) in prefix_paths {
        let filtered_path = order.normalize(path.iter().cloned());
        if !filtered_path.is_empty() {
            conditional_tree.insert_transaction(&filtered_path, *count);
        }
    }

    conditional_tree
}
