use std::str::FromStr;

use tracing::Level;

pub fn init_logging(config: &crate::config::Config) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(&config.logs.level))
        .with_writer(std::io::stderr)
        .init();
}

fn log_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}
