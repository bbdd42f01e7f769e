//! Frequent itemset mining with FP-growth.
//!
//! Transactions are compressed into a prefix tree ordered by descending item
//! support, which is then mined through conditional sub-trees without
//! generating candidates.
//!
//! ```
//! let transactions = vec![vec!["a", "b"], vec!["a", "c"], vec!["a", "b", "c"]];
//! let itemsets: Vec<_> = fpgrowth::mine(transactions.iter().map(|t| t.iter().copied()), 2)
//!     .unwrap()
//!     .collect();
//! assert!(itemsets.iter().any(|s| s.items == vec!["a"] && s.support == 3));
//! ```

pub mod config;
pub mod error;
pub mod fp;

use std::hash::Hash;

pub use config::{MinSupport, MiningConfig};
pub use error::{MiningError, Result};
pub use fp::{FpGrowth, FrequentItemsets, Itemset};

/// Lazily mines every itemset contained in at least `min_support`
/// transactions.
///
/// The threshold is checked before the source is touched. `transactions` is
/// cloned once so it can be iterated twice: one pass to count supports and one
/// to build the tree. Results come out depth-first; sort them if a particular
/// order matters.
pub fn mine<S, I>(transactions: S, min_support: usize) -> Result<FrequentItemsets<I>>
where
    S: IntoIterator + Clone,
    S::Item: IntoIterator<Item = I>,
    I: Eq + Hash + Clone,
{
    FpGrowth::new(MiningConfig::with_count(min_support)).mine(transactions)
}

/// Same result set as [`mine`], computed eagerly on the rayon thread pool.
pub fn mine_parallel<S, I>(transactions: S, min_support: usize) -> Result<Vec<Itemset<I>>>
where
    S: IntoIterator + Clone,
    S::Item: IntoIterator<Item = I>,
    I: Eq + Hash + Clone + Send + Sync,
{
    FpGrowth::new(MiningConfig::with_count(min_support)).mine_parallel(transactions)
}
