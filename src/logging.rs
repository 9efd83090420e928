//! File logging for the terminal shell.
//!
//! stdout belongs to the renderer, so records go to a file through log4rs.
//! Without a configured path nothing is installed and the `log` macros in the
//! engine crates are no-ops.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}";

/// Install a file appender at `level` as the global logger.
pub fn init_log(level: LevelFilter, file_path: &Path) -> Result<()> {
    let config = file_config(level, file_path)?;
    log4rs::init_config(config).context("logger already installed")?;
    Ok(())
}

fn file_config(level: LevelFilter, file_path: &Path) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(file_path)
        .with_context(|| format!("cannot open log file {}", file_path.display()))?;

    Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("invalid log configuration")
}
