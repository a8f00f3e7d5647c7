use anyhow::Context;
use clap::Parser;
use settings_form::cli::Cli;
use settings_form::config::AppConfig;
use settings_form::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let mut config = AppConfig::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    cli.apply_to(&mut config);
    config.validate().context("invalid settings after CLI overrides")?;

    let log_path = cli.log_path();
    init_tracing(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;
    tracing::info!(
        config = %config_path.display(),
        debounce_ms = config.autosave.debounce_ms,
        "Starting settings form"
    );

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    settings_form::ui::run(config, runtime.handle().clone()).context("running terminal UI")?;
    runtime.shutdown_timeout(std::time::Duration::from_millis(100));
    Ok(())
}
