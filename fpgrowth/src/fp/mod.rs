pub mod combinations;
pub mod dense;
pub mod growth;
pub mod streaming_growth;
pub mod utils;


pub use combinations::PathSubsets;
pub use dense::transactions_from_dense;
pub use growth::{
    build_conditional_fp_tree, count_items, FPNode, FPTree, FpGrowth, FrequentItemsets, Itemset,
};
pub use streaming_growth::{
    build_pass, count_pass, finalize_building, finalize_counts, mine_patterns, ProcessingPhase,
    StreamingState,
};
pub use utils::{collect_levels, FrequentLevel, ItemsetStorage};
