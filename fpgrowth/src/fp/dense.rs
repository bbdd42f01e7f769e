use crate::error::Result;
use crate::fp::growth::{FpGrowth, FrequentItemsets};
use ndarray::ArrayView2;

/// Convert a one-hot transaction matrix (rows are transactions, columns are
/// items, non-zero means present) to lists of column indices.
pub fn transactions_from_dense(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
    transactions
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}

impl FpGrowth {
    /// Mines a one-hot matrix; items are column indices.
    pub fn mine_dense(&self, transactions: ArrayView2<i32>) -> Result<FrequentItemsets<usize>> {
        // Checked here as well as in `mine` so a bad threshold fails before
        // the matrix is converted.
        self.config().validate()?;
        let transaction_list = transactions_from_dense(transactions);
        self.mine(transaction_list.iter().map(|row| row.iter().copied()))
    }
}
