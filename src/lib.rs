pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalFileInput, RunConfig};

pub use crate::core::{
    engine::ReachEngine, loader::parse_layout, pipeline::GridPipeline, search::reachable_sinks,
};
pub use crate::domain::model::{Coord, Grid, GridLayout, ReachResult};
pub use crate::domain::options::{LoaderOptions, MalformedLinePolicy, OutputFormat, SourcePolicy};
pub use crate::utils::error::{ReachError, Result};
