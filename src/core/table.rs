use crate::core::cost::{bitfield_cost, combined_cost, matrix_cost};
use serde::Serialize;
use std::fmt;

/// One evaluated row: the three storage costs for a single block dimension.
#[derive(Debug, Clone, Serialize)]
pub struct CostRow {
    pub k: u32,
    pub matrix_bits: f64,
    pub bitfield_bits: f64,
    pub combined_bits: f64,
}

impl CostRow {
    pub fn evaluate(k: u32) -> Self {
        Self {
            k,
            matrix_bits: matrix_cost(k),
            bitfield_bits: bitfield_cost(k),
            combined_bits: combined_cost(k),
        }
    }

    /// Format as CSV row.
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{}",
            self.k, self.matrix_bits, self.bitfield_bits, self.combined_bits
        )
    }
}

/// Ordered table of cost rows, one per block dimension.
#[derive(Debug, Clone)]
pub struct CostTable {
    rows: Vec<CostRow>,
}

impl CostTable {
    /// Evaluate the cost functions over an ordered sequence of block
    /// dimensions, preserving input order.
    pub fn compute(ks: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rows: ks.into_iter().map(CostRow::evaluate).collect(),
        }
    }

    pub fn rows(&self) -> &[CostRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for CostTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>4} {:>12} {:>12} {:>12}", "k", "f(k)", "g(k)", "a(k)")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>4} {:>12.0} {:>12.0} {:>12.0}",
                row.k, row.matrix_bits, row.bitfield_bits, row.combined_bits
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_has_eight_rows() {
        let table = CostTable::compute(3..=10);
        assert_eq!(table.rows().len(), 8);
        for (i, row) in table.rows().iter().enumerate() {
            assert_eq!(row.k, 3 + i as u32);
        }
    }

    #[test]
    fn test_rows_preserve_input_order() {
        let table = CostTable::compute([5, 3, 9]);
        let ks: Vec<u32> = table.rows().iter().map(|r| r.k).collect();
        assert_eq!(ks, vec![5, 3, 9]);
    }

    #[test]
    fn test_row_values() {
        let row = CostRow::evaluate(3);
        assert_eq!(row.matrix_bits, 324.0);
        assert_eq!(row.bitfield_bits, 216.0);
        assert_eq!(row.combined_bits, 540.0);
        assert_eq!(row.combined_bits, row.matrix_bits + row.bitfield_bits);
    }

    #[test]
    fn test_display_lists_every_row() {
        let table = CostTable::compute(3..=10);
        let text = table.to_string();
        // header + 8 rows
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("f(k)"));
        assert!(text.contains("g(k)"));
        assert!(text.contains("a(k)"));
        assert!(text.contains("324"));
        assert!(text.contains("1920"));
    }

    #[test]
    fn test_csv_row() {
        assert_eq!(CostRow::evaluate(3).to_csv(), "3,324,216,540");
    }
}
