pub mod config;
pub mod error;

pub use config::{ChartConfig, Config, RangeConfig};
pub use error::{Result, StorageSizeError};
