use super::builder::{build_conditional_fp_tree, build_fp_tree, count_items};
use super::tree::FPTree;
use crate::config::MiningConfig;
use crate::error::Result;
use crate::fp::combinations::PathSubsets;
use rayon::prelude::*;
use std::hash::Hash;
use tracing::{debug, trace};

/// A frequent itemset and the number of transactions containing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itemset<I> {
    pub items: Vec<I>,
    pub support: usize,
}

impl<I: PartialEq> Itemset<I> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &I) -> bool {
        self.items.contains(item)
    }
}

fn with_suffix<I: Clone>(mut items: Vec<I>, suffix: &[I]) -> Vec<I> {
    items.extend_from_slice(suffix);
    items
}

/// FP-growth driver holding a validated configuration.
#[derive(Debug, Clone, Default)]
pub struct FpGrowth {
    config: MiningConfig,
}

impl FpGrowth {
    pub fn new(config: MiningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Counts, builds and returns a lazy depth-first sequence of frequent
    /// itemsets. The source is iterated exactly twice.
    pub fn mine<S, I>(&self, transactions: S) -> Result<FrequentItemsets<I>>
    where
        S: IntoIterator + Clone,
        S::Item: IntoIterator<Item = I>,
        I: Eq + Hash + Clone,
    {
        let (fp_tree, min_count) = self.build(transactions)?;
        Ok(FrequentItemsets::new(
            fp_tree,
            min_count,
            self.config.single_path_shortcut,
        ))
    }

    /// Mines the per-item branches of each tree on the rayon pool and collects
    /// every itemset. Emission order is unspecified.
    pub fn mine_parallel<S, I>(&self, transactions: S) -> Result<Vec<Itemset<I>>>
    where
        S: IntoIterator + Clone,
        S::Item: IntoIterator<Item = I>,
        I: Eq + Hash + Clone + Send + Sync,
    {
        let (fp_tree, min_count) = self.build(transactions)?;
        if fp_tree.is_empty() {
            return Ok(Vec::new());
        }
        Ok(fp_growth_recursive_parallel(
            &fp_tree,
            &[],
            min_count,
            self.config.single_path_shortcut,
        ))
    }

    fn build<S, I>(&self, transactions: S) -> Result<(FPTree<I>, usize)>
    where
        S: IntoIterator + Clone,
        S::Item: IntoIterator<Item = I>,
        I: Eq + Hash + Clone,
    {
        self.config.validate()?;

        let frequencies = count_items(transactions.clone());
        let min_count = self
            .config
            .min_support
            .resolve(frequencies.num_transactions());
        let order = frequencies.frequent_items(min_count);

        debug!(
            transactions = frequencies.num_transactions(),
            distinct_items = frequencies.len(),
            frequent_items = order.len(),
            min_count,
            "counted item supports"
        );

        Ok((build_fp_tree(transactions, &order), min_count))
    }
}

enum Frame<I> {
    /// Items of `tree` still to visit, least frequent first.
    Branch {
        tree: FPTree<I>,
        items: Vec<I>,
        next: usize,
        suffix: Vec<I>,
    },
    Path {
        subsets: PathSubsets<I>,
        suffix: Vec<I>,
    },
}

enum Step<I> {
    Emit(Itemset<I>),
    Descend(Itemset<I>, FPTree<I>),
    Skip,
    Pop,
}

/// Lazy, one-shot sequence of frequent itemsets.
///
/// Each stack frame owns its conditional tree, so a tree is dropped as soon
/// as its branch is exhausted. Dropping the iterator abandons the search.
pub struct FrequentItemsets<I> {
    stack: Vec<Frame<I>>,
    min_count: usize,
    single_path_shortcut: bool,
}

impl<I: Eq + Hash + Clone> FrequentItemsets<I> {
    pub fn new(fp_tree: FPTree<I>, min_count: usize, single_path_shortcut: bool) -> Self {
        let mut itemsets = Self {
            stack: Vec::new(),
            min_count,
            single_path_shortcut,
        };
        if !fp_tree.is_empty() {
            itemsets.push_tree(fp_tree, Vec::new());
        }
        itemsets
    }

    /// Absolute support threshold in effect.
    pub fn min_count(&self) -> usize {
        self.min_count
    }

    fn push_tree(&mut self, tree: FPTree<I>, suffix: Vec<I>) {
        if self.single_path_shortcut && tree.has_single_path() {
            self.stack.push(Frame::Path {
                subsets: PathSubsets::new(tree.single_path()),
                suffix,
            });
        } else {
            let mut items = tree.items_by_support();
            items.reverse();
            self.stack.push(Frame::Branch {
                tree,
                items,
                next: 0,
                suffix,
            });
        }
    }
}

impl<I: Eq + Hash + Clone> Iterator for FrequentItemsets<I> {
    type Item = Itemset<I>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let min_count = self.min_count;
            let step = match self.stack.last_mut()? {
                Frame::Path { subsets, suffix } => match subsets.next() {
                    Some((items, support)) => Step::Emit(Itemset {
                        items: with_suffix(items, suffix),
                        support,
                    }),
                    None => Step::Pop,
                },
                Frame::Branch {
                    tree,
                    items,
                    next,
                    suffix,
                } => match items.get(*next).cloned() {
                    None => Step::Pop,
                    Some(item) => {
                        *next += 1;
                        let support = tree.item_support(&item);
                        if support < min_count {
                            Step::Skip
                        } else {
                            let prefix_paths = tree.prefix_paths(&item);
                            let found = Itemset {
                                items: with_suffix(vec![item], suffix),
                                support,
                            };
                            let cond_tree = build_conditional_fp_tree(&prefix_paths, min_count);
                            if cond_tree.is_empty() {
                                Step::Emit(found)
                            } else {
                                trace!(
                                    depth = found.items.len(),
                                    nodes = cond_tree.node_count(),
                                    "built conditional tree"
                                );
                                Step::Descend(found, cond_tree)
                            }
                        }
                    }
                },
            };

            match step {
                Step::Emit(itemset) => return Some(itemset),
                Step::Descend(itemset, cond_tree) => {
                    self.push_tree(cond_tree, itemset.items.clone());
                    return Some(itemset);
                }
                Step::Skip => {}
                Step::Pop => {
                    self.stack.pop();
                }
            }
        }
    }
}

pub fn fp_growth_recursive_parallel<I>(
    fp_tree: &FPTree<I>,
    suffix: &[I],
    min_count: usize,
    single_path_shortcut: bool,
) -> Vec<Itemset<I>>
where
    I: Eq + Hash + Clone + Send + Sync,
{
    if single_path_shortcut && fp_tree.has_single_path() {
        return PathSubsets::new(fp_tree.single_path())
            .map(|(items, support)| Itemset {
                items: with_suffix(items, suffix),
                support,
            })
            .collect();
    }

    let frequent_items = fp_tree.items_by_support();
    let parallel_results: Vec<Vec<Itemset<I>>> = frequent_items
        .par_iter()
        .rev()
        .map(|item| {
            let support = fp_tree.item_support(item);
            if support < min_count {
                return Vec::new();
            }

            let new_pattern = with_suffix(vec![item.clone()], suffix);
            let prefix_paths = fp_tree.prefix_paths(item);
            let conditional_tree = build_conditional_fp_tree(&prefix_paths, min_count);

            let mut item_result = vec![Itemset {
                items: new_pattern.clone(),
                support,
            }];
            if !conditional_tree.is_empty() {
                item_result.extend(fp_growth_recursive_parallel(
                    &conditional_tree,
                    &new_pattern,
                    min_count,
                    single_path_shortcut,
                ));
            }
            item_result
        })
        .collect();

    parallel_results.into_iter().flatten().collect()
}
