pub mod storage;

pub use storage::{collect_levels, FrequentLevel, ItemsetStorage};
