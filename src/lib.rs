// Core modules
pub mod cli;
pub mod common;
pub mod core;

// Re-export commonly used types
pub use cli::Visualizer;
pub use common::{ChartConfig, Config, RangeConfig, Result, StorageSizeError};
pub use core::{bitfield_cost, bits_needed, combined_cost, matrix_cost, CostRow, CostTable};
