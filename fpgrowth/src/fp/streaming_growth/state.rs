use crate::config::MinSupport;
use crate::error::{MiningError, Result};
use crate::fp::growth::builder::{FrequencyMap, ItemOrder};
use crate::fp::growth::tree::FPTree;
use std::hash::Hash;

/// State for chunked two-pass FP-Growth
#[derive(Debug)]
pub struct StreamingState<I> {
    /// Item frequency counts during counting phase
    pub item_counts: FrequencyMap<I>,
    /// Transactions inserted during the building phase
    pub built_transactions: usize,
    /// Frequent items after finalization, in insertion order
    pub frequent_items: Option<ItemOrder<I>>,
    /// Absolute threshold resolved at the end of counting
    pub min_count: Option<usize>,
    /// The FP-Tree being built incrementally
    pub fp_tree: Option<FPTree<I>>,
    /// Processing phase
    pub phase: ProcessingPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingPhase {
    Counting,
    CountingFinalized,
    Building,
    ReadyToMine,
}

impl<I: Eq + Hash + Clone> Default for StreamingState<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Eq + Hash + Clone> StreamingState<I> {
    pub fn new() -> Self {
        Self {
            item_counts: FrequencyMap::new(),
            built_transactions: 0,
            frequent_items: None,
            min_count: None,
            fp_tree: None,
            phase: ProcessingPhase::Counting,
        }
    }

    pub(crate) fn expect_phase(
        &self,
        expected: ProcessingPhase,
        operation: &'static str,
    ) -> Result<()> {
        if self.phase != expected {
            return Err(MiningError::InvalidPhase {
                operation,
                phase: self.phase,
            });
        }
        Ok(())
    }

    /// Add item counts from a transaction batch
    pub fn add_counts<C, T>(&mut self, transactions: C)
    where
        C: IntoIterator<Item = T>,
        T: IntoIterator<Item = I>,
    {
        for transaction in transactions {
            self.item_counts.add_transaction(transaction, 1);
        }
    }

    /// Finalize counting phase and determine frequent items
    pub fn finalize_counts(&mut self, min_support: MinSupport) -> Result<()> {
        self.expect_phase(ProcessingPhase::Counting, "finalize counts")?;
        min_support.validate()?;

        let min_count = min_support.resolve(self.item_counts.num_transactions());
        self.frequent_items = Some(self.item_counts.frequent_items(min_count));
        self.min_count = Some(min_count);

        self.phase = ProcessingPhase::CountingFinalized;
        Ok(())
    }

    /// Initialize FP-Tree for building phase
    pub fn init_tree(&mut self) -> Result<()> {
        self.expect_phase(ProcessingPhase::CountingFinalized, "init tree")?;

        self.fp_tree = Some(FPTree::new());
        self.phase = ProcessingPhase::Building;
        Ok(())
    }

    /// Check if an item is frequent
    pub fn is_frequent(&self, item: &I) -> bool {
        self.frequent_items
            .as_ref()
            .is_some_and(|order| order.rank(item).is_some())
    }

    /// Complete building phase
    pub fn finalize_building(&mut self) -> Result<()> {
        self.expect_phase(ProcessingPhase::Building, "finalize building")?;

        let counted = self.item_counts.num_transactions();
        if self.built_transactions != counted {
            return Err(MiningError::PassMismatch {
                counted,
                built: self.built_transactions,
            });
        }

        self.phase = ProcessingPhase::ReadyToMine;
        Ok(())
    }
}
