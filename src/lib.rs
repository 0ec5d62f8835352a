//! View the features of a small BED region (e.g. the exons of one gene) as a
//! horizontal bar chart placed at their genomic positions.

pub mod app;
pub mod args;
pub mod color;
pub mod config;
pub mod data;
pub mod ui;

pub use args::{parse_args, UsageError};
pub use config::ChartConfig;
pub use data::loader::{load_bed, LoadError};
pub use data::model::{Feature, FeatureTrack};
