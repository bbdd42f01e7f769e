use super::state::{ProcessingPhase, StreamingState};
use crate::config::MinSupport;
use crate::error::{MiningError, Result};
use crate::fp::growth::mining::FrequentItemsets;
use std::hash::Hash;
use tracing::debug;

/// Process counting pass for streaming FP-Growth
pub fn count_pass<I, C, T>(state: &mut StreamingState<I>, transactions: C) -> Result<()>
where
    I: Eq + Hash + Clone,
    C: IntoIterator<Item = T>,
    T: IntoIterator<Item = I>,
{
    state.expect_phase(ProcessingPhase::Counting, "count")?;
    state.add_counts(transactions);
    Ok(())
}

/// Finalize counting and determine frequent items
pub fn finalize_counts<I: Eq + Hash + Clone>(
    state: &mut StreamingState<I>,
    min_support: impl Into<MinSupport>,
) -> Result<()> {
    state.finalize_counts(min_support.into())?;
    state.init_tree()?;

    debug!(
        transactions = state.item_counts.num_transactions(),
        distinct_items = state.item_counts.len(),
        frequent_items = state.frequent_items.as_ref().map_or(0, |order| order.len()),
        "finalized streaming counts"
    );
    Ok(())
}

/// Process building pass for streaming FP-Growth
pub fn build_pass<I, C, T>(state: &mut StreamingState<I>, transactions: C) -> Result<()>
where
    I: Eq + Hash + Clone,
    C: IntoIterator<Item = T>,
    T: IntoIterator<Item = I>,
{
    state.expect_phase(ProcessingPhase::Building, "build")?;

    let (Some(order), Some(fp_tree)) = (state.frequent_items.as_ref(), state.fp_tree.as_mut())
    else {
        return Err(MiningError::InvalidPhase {
            operation: "build",
            phase: state.phase,
        });
    };

    for transaction in transactions {
        state.built_transactions += 1;
        let sorted_items = order.normalize(transaction);
        if !sorted_items.is_empty() {
            fp_tree.insert_transaction(&sorted_items, 1);
        }
    }

    Ok(())
}

/// Finalize building phase
pub fn finalize_building<I: Eq + Hash + Clone>(state: &mut StreamingState<I>) -> Result<()> {
    state.finalize_building()
}

/// Hand the built tree to the lazy miner
pub fn mine_patterns<I: Eq + Hash + Clone>(
    mut state: StreamingState<I>,
    single_path_shortcut: bool,
) -> Result<FrequentItemsets<I>> {
    state.expect_phase(ProcessingPhase::ReadyToMine, "mine")?;

    let (Some(fp_tree), Some(min_count)) = (state.fp_tree.take(), state.min_count) else {
        return Err(MiningError::InvalidPhase {
            operation: "mine",
            phase: state.phase,
        });
    };

    debug!(nodes = fp_tree.node_count(), min_count, "mining streamed fp-tree");
    Ok(FrequentItemsets::new(fp_tree, min_count, single_path_shortcut))
}
