use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ReachEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ReachEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs load, search and render in order and returns the rendered output line.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting reachability run");

        // 載入
        let layout = self.pipeline.extract()?;
        tracing::info!(
            "Loaded {} cells ({} sinks), source at {}",
            layout.grid.len(),
            layout.sinks.len(),
            layout.source
        );
        self.monitor.log_stats("Load");

        // 搜尋
        let result = self.pipeline.transform(&layout)?;
        tracing::info!(
            "Reached {} of {} sinks",
            result.connected.len(),
            layout.sinks.len()
        );
        self.monitor.log_stats("Search");

        // 輸出
        let output = self.pipeline.load(&result)?;
        self.monitor.log_final_stats();

        Ok(output)
    }
}
