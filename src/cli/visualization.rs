use crate::common::config::ChartConfig;
use crate::common::error::{Result, StorageSizeError};
use crate::core::table::CostTable;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const BACKGROUND: RGBColor = RGBColor(17, 17, 17);
const MATRIX_COLOR: RGBColor = RGBColor(99, 110, 250);
const BITFIELD_COLOR: RGBColor = RGBColor(239, 85, 59);
const COMBINED_COLOR: RGBColor = RGBColor(0, 204, 150);

pub struct Visualizer {
    output_dir: PathBuf,
}

impl Visualizer {
    pub fn new(output_dir: &Path) -> Result<Self> {
        fs::create_dir_all(output_dir)?;

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Render the three cost series as a lines-and-markers chart on a dark
    /// theme and save it as a PNG.
    pub fn render_chart(&self, table: &CostTable, config: &ChartConfig) -> Result<PathBuf> {
        let output_file = self.output_dir.join("storage_size_comparison.png");

        let rows = table.rows();
        let first = rows
            .first()
            .ok_or_else(|| StorageSizeError::Chart("No rows to plot".to_string()))?;
        let last = rows
            .last()
            .ok_or_else(|| StorageSizeError::Chart("No rows to plot".to_string()))?;

        debug!("Rendering chart for k in [{}, {}]", first.k, last.k);

        let x_range = (first.k as f64 - 0.5)..(last.k as f64 + 0.5);
        let y_max = rows
            .iter()
            .map(|r| r.combined_bits)
            .fold(0.0f64, f64::max)
            * 1.05;

        let matrix: Vec<(f64, f64)> = rows.iter().map(|r| (r.k as f64, r.matrix_bits)).collect();
        let bitfield: Vec<(f64, f64)> =
            rows.iter().map(|r| (r.k as f64, r.bitfield_bits)).collect();
        let combined: Vec<(f64, f64)> =
            rows.iter().map(|r| (r.k as f64, r.combined_bits)).collect();

        let root =
            BitMapBackend::new(&output_file, (config.width, config.height)).into_drawing_area();
        root.fill(&BACKGROUND).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Comparison of Function Values",
                ("sans-serif", 30).into_font().color(&WHITE),
            )
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(x_range, 0f64..y_max)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc("Sudoku K (And N)")
            .y_desc("Total Bits Needed (Storage Size)")
            .axis_desc_style(("sans-serif", 18).into_font().color(&WHITE))
            .label_style(("sans-serif", 15).into_font().color(&WHITE))
            .axis_style(&WHITE.mix(0.8))
            .bold_line_style(&WHITE.mix(0.2))
            .light_line_style(&WHITE.mix(0.05))
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&|v| format!("{:.0}", v))
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(LineSeries::new(
                matrix.iter().copied(),
                MATRIX_COLOR.stroke_width(2),
            ))
            .map_err(chart_err)?
            .label("Normal storage")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], MATRIX_COLOR.stroke_width(2))
            });
        chart
            .draw_series(
                matrix
                    .iter()
                    .map(|&p| Circle::new(p, 4, MATRIX_COLOR.filled())),
            )
            .map_err(chart_err)?;

        chart
            .draw_series(LineSeries::new(
                bitfield.iter().copied(),
                BITFIELD_COLOR.stroke_width(2),
            ))
            .map_err(chart_err)?
            .label("Bitfield storage")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], BITFIELD_COLOR.stroke_width(2))
            });
        chart
            .draw_series(
                bitfield
                    .iter()
                    .map(|&p| Circle::new(p, 4, BITFIELD_COLOR.filled())),
            )
            .map_err(chart_err)?;

        chart
            .draw_series(LineSeries::new(
                combined.iter().copied(),
                COMBINED_COLOR.stroke_width(2),
            ))
            .map_err(chart_err)?
            .label("Combined")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], COMBINED_COLOR.stroke_width(2))
            });
        chart
            .draw_series(
                combined
                    .iter()
                    .map(|&p| Circle::new(p, 4, COMBINED_COLOR.filled())),
            )
            .map_err(chart_err)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&BACKGROUND.mix(0.8))
            .border_style(&WHITE.mix(0.5))
            .label_font(("sans-serif", 16).into_font().color(&WHITE))
            .draw()
            .map_err(chart_err)?;
        drop(chart);

        root.present().map_err(chart_err)?;
        drop(root);

        println!("Saved chart to {}", output_file.display());

        Ok(output_file)
    }

    /// Write the table as a CSV file for external tooling.
    pub fn export_csv(&self, table: &CostTable) -> Result<PathBuf> {
        let output_file = self.output_dir.join("storage_sizes.csv");

        let mut content = String::new();
        content.push_str("k,f(k),g(k),a(k)\n");
        for row in table.rows() {
            content.push_str(&row.to_csv());
            content.push('\n');
        }

        fs::write(&output_file, content)?;
        println!("Exported table to {}", output_file.display());

        Ok(output_file)
    }

    /// Write the table as pretty-printed JSON.
    pub fn export_json(&self, table: &CostTable) -> Result<PathBuf> {
        let output_file = self.output_dir.join("storage_sizes.json");

        let content = serde_json::to_string_pretty(table.rows())
            .map_err(|e| StorageSizeError::Other(anyhow::anyhow!("JSON encode error: {}", e)))?;
        fs::write(&output_file, content)?;
        println!("Exported table to {}", output_file.display());

        Ok(output_file)
    }
}

fn chart_err(e: impl std::fmt::Display) -> StorageSizeError {
    StorageSizeError::Chart(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::CostTable;

    #[test]
    fn test_export_csv_writes_all_rows() {
        let dir = std::env::temp_dir().join("board_storage_size_test_csv");
        let visualizer = Visualizer::new(&dir).unwrap();
        let table = CostTable::compute(3..=10);

        let path = visualizer.export_csv(&table).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "k,f(k),g(k),a(k)");
        assert_eq!(lines[1], "3,324,216,540");
        assert_eq!(lines[8], "10,70000,22000,92000");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_export_json_round_trips() {
        let dir = std::env::temp_dir().join("board_storage_size_test_json");
        let visualizer = Visualizer::new(&dir).unwrap();
        let table = CostTable::compute(3..=4);

        let path = visualizer.export_json(&table).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["k"], 3);
        assert_eq!(rows[0]["combined_bits"], 540.0);
        assert_eq!(rows[1]["matrix_bits"], 1280.0);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_render_chart_rejects_empty_table() {
        let dir = std::env::temp_dir().join("board_storage_size_test_empty");
        let visualizer = Visualizer::new(&dir).unwrap();
        let table = CostTable::compute(std::iter::empty());

        assert!(visualizer.render_chart(&table, &ChartConfig::default()).is_err());

        std::fs::remove_dir_all(&dir).ok();
    }
}
