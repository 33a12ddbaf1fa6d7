use crate::domain::model::{GridLayout, ReachResult};
use crate::domain::options::{LoaderOptions, OutputFormat};
use crate::utils::error::Result;
use std::path::Path;

pub trait InputSource {
    /// Reads the whole input eagerly; no partial reads are exposed.
    fn read_input(&self, path: &Path) -> Result<String>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn loader_options(&self) -> LoaderOptions;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<GridLayout>;
    fn transform(&self, layout: &GridLayout) -> Result<ReachResult>;
    fn load(&self, result: &ReachResult) -> Result<String>;
}
