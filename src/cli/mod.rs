pub mod visualization;

pub use visualization::Visualizer;
