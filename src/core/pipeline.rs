use crate::core::loader::parse_layout;
use crate::core::search::search;
use crate::core::{ConfigProvider, GridLayout, InputSource, Pipeline, ReachResult};
use crate::domain::options::OutputFormat;
use crate::utils::error::Result;

pub struct GridPipeline<I: InputSource, C: ConfigProvider> {
    pub(crate) input: I,
    pub(crate) config: C,
}

impl<I: InputSource, C: ConfigProvider> GridPipeline<I, C> {
    pub fn new(input: I, config: C) -> Self {
        Self { input, config }
    }
}

impl<I: InputSource, C: ConfigProvider> Pipeline for GridPipeline<I, C> {
    fn extract(&self) -> Result<GridLayout> {
        let path = self.config.input_path();
        tracing::debug!("Reading input from: {}", path.display());
        let content = self.input.read_input(path)?;

        let layout = parse_layout(&content, &self.config.loader_options())?;
        if layout.skipped > 0 {
            tracing::warn!("Skipped {} malformed lines", layout.skipped);
        }
        Ok(layout)
    }

    fn transform(&self, layout: &GridLayout) -> Result<ReachResult> {
        let (connected, stats) = search(&layout.grid, layout.source);
        tracing::debug!(
            "Search visited {} cells, found {} sinks",
            stats.visited,
            stats.sinks_found
        );
        Ok(ReachResult::from_search(layout, connected))
    }

    fn load(&self, result: &ReachResult) -> Result<String> {
        render(result, self.config.output_format())
    }
}

pub fn render(result: &ReachResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(result.labels()),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}
