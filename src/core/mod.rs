pub mod cost;
pub mod table;

pub use cost::{bitfield_cost, bits_needed, combined_cost, matrix_cost};
pub use table::{CostRow, CostTable};
