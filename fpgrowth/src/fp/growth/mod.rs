pub mod builder;
pub mod mining;
pub mod tree;

pub use builder::{build_conditional_fp_tree, build_fp_tree, count_items, FrequencyMap, ItemOrder};
pub use mining::{FpGrowth, FrequentItemsets, Itemset};
pub use tree::{FPNode, FPTree, HeaderEntry, PatternBase};
