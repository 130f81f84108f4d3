use anyhow::{Context, Result};
use pointer_array_demo::config::DemoConfig;
use pointer_array_demo::demo::run_demo;
use tracing_subscriber::EnvFilter;

fn init_logging(cfg: &DemoConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&cfg.log_filter)
        .with_context(|| format!("invalid log filter '{}'", cfg.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cfg = DemoConfig::builtin().context("loading built-in config")?;
    init_logging(&cfg)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out, &cfg)
}
