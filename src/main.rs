use clap::Parser;
use pipe_reach::utils::logger;
use pipe_reach::{CliConfig, GridPipeline, LocalFileInput, ReachEngine};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    // 配置錯誤時 logger 尚未初始化，直接寫 stderr
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            return ExitCode::from(e.exit_code());
        }
    };

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config
            .log_level
            .as_deref()
            .unwrap_or("info")
            .to_ascii_lowercase()
    };
    logger::init_cli_logger(&level);

    tracing::info!("Starting pipe-reach on {}", config.input_path.display());
    tracing::debug!("Run config: {:?}", config);

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = GridPipeline::new(LocalFileInput::new(), config);
    let engine = ReachEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            ExitCode::from(e.exit_code())
        }
    }
}
