use crate::fp::growth::mining::Itemset;

/// Flat storage for itemsets of one size: all items in a single buffer, with
/// an offset and support per itemset.
#[derive(Debug, Clone)]
pub struct ItemsetStorage<I> {
    items: Vec<I>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct FrequentLevel<I> {
    storage: ItemsetStorage<I>,
    pub itemset_size: usize,
}

impl<I> Default for ItemsetStorage<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> ItemsetStorage<I> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
        }
    }

    pub fn add_itemset(&mut self, items: Vec<I>, support: usize) -> usize {
        let start = self.items.len();
        let len = items.len();
        self.items.extend(items);
        self.offsets.push((start, len));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[I] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl<I> FrequentLevel<I> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: Vec<I>, support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[I] {
        self.storage.get_itemset(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[I]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    pub fn iter_with_support(&self) -> impl Iterator<Item = (&[I], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.storage.support(idx)))
    }
}

/// Groups itemsets by size; level `k - 1` holds the k-itemsets.
pub fn collect_levels<I, R>(itemsets: R) -> Vec<FrequentLevel<I>>
where
    R: IntoIterator<Item = Itemset<I>>,
{
    let mut levels: Vec<FrequentLevel<I>> = Vec::new();

    for itemset in itemsets {
        let size = itemset.items.len();
        if size == 0 {
            continue;
        }
        while levels.len() < size {
            levels.push(FrequentLevel::new(levels.len() + 1));
        }
        levels[size - 1].add_itemset(itemset.items, itemset.support);
    }
    levels
}
