use anyhow::Context;
use clap::Parser;
use demo_solid::utils::{logger, validation::Validate};
use demo_solid::{CliConfig, DemoConfig, DemoRunner, StdoutConsole};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting demo-solid");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入 TOML 配置（可選）
    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            let config = DemoConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            config.validate().context("invalid config file")?;
            Some(config)
        }
        None => None,
    };

    let settings = cli.into_settings(file_config.as_ref());

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let runner = DemoRunner::new(settings, StdoutConsole::new());
    let summary = runner.run()?;

    tracing::debug!(
        "Demonstrated {} principle(s), {} violation(s)",
        summary.principles.len(),
        summary.violations
    );

    Ok(())
}
