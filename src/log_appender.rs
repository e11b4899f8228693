use anyhow::{anyhow, Result};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::rolling_file::policy::compound::{
    roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger, CompoundPolicy,
};
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::fs;
use std::path::Path;

/// Rolled archives live next to the active log file, never relative to the
/// process cwd.
fn roller_pattern(log_dir: &Path) -> Result<String> {
    let pattern = log_dir.join("logs").join("session-nav.{}.log.gz");
    pattern
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Log directory is not valid UTF-8"))
}

pub fn setup_logging(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir.join("logs"))?;

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{h({l})} {d(%Y-%m-%d %H:%M:%S)} {M} - {m}{n}",
        )))
        .build();

    // Keep 3 compressed log files, rolled by size
    let roller = FixedWindowRoller::builder()
        .base(1)
        .build(&roller_pattern(log_dir)?, 3)?;

    let trigger = SizeTrigger::new(10 * 1024 * 1024);

    let policy = CompoundPolicy::new(Box::new(trigger), Box::new(roller));

    let log_path = log_dir.join("logs").join("session-nav.log");
    let file = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d} {l}::{m}{n}")))
        .build(log_path, Box::new(policy))?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(LevelFilter::Info),
        )?;

    log4rs::init_config(config)?;
    Ok(())
}
