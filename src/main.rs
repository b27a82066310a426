use board_storage_size::{
    cli::Visualizer,
    common::Config,
    core::CostTable,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "board-storage-size")]
#[command(about = "Compare storage sizes of sudoku board representations")]
struct Cli {
    /// Enable verbose debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to a TOML config file (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the output directory for charts and exports
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cost table
    Table,
    /// Render the comparison chart
    Chart,
    /// Export the cost table to a file
    Export {
        #[command(subcommand)]
        format: ExportFormat,
    },
    /// Print the table and render the chart
    All,
}

#[derive(Subcommand)]
enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on mode
    setup_logging(cli.debug);

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    };
    if let Some(dir) = cli.out_dir {
        config.chart.output_dir = dir;
    }

    let table = CostTable::compute(config.k_values());

    match cli.command.unwrap_or(Commands::All) {
        Commands::Table => {
            print!("{}", table);
        }
        Commands::Chart => {
            let visualizer = Visualizer::new(&config.chart.output_dir)?;
            visualizer.render_chart(&table, &config.chart)?;
        }
        Commands::Export { format } => {
            let visualizer = Visualizer::new(&config.chart.output_dir)?;
            match format {
                ExportFormat::Csv => {
                    visualizer.export_csv(&table)?;
                }
                ExportFormat::Json => {
                    visualizer.export_json(&table)?;
                }
            }
        }
        Commands::All => {
            // Table goes out first; a chart failure must not take it down
            print!("{}", table);
            let visualizer = Visualizer::new(&config.chart.output_dir)?;
            visualizer.render_chart(&table, &config.chart)?;
        }
    }

    Ok(())
}

fn setup_logging(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }
}
