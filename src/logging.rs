// src/logging.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::error::Result;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Map the number of `-v` flags to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Builder with the crate's line format. `level` applies to this crate only;
/// dependencies (html5ever, selectors, reqwest) stay at `Warn`.
fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        });
    builder
}

/// Install the global logger.
///
/// Lines look like `[00:00:01.250][INFO] message`. With `file` set, lines are
/// appended there instead of going to stderr. `RUST_LOG` still wins over `level`.
/// Calling this twice is harmless; the second logger is ignored.
pub fn init(level: LevelFilter, file: Option<&Path>) -> Result<()> {
    start();

    let mut builder = builder(level);
    builder.parse_default_env();

    if let Some(path) = file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let sink = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(sink)));
    }

    let _ = builder.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    fn enabled(logger: &env_logger::Logger, target: &str, level: log::Level) -> bool {
        logger.matches(&log::Record::builder().target(target).level(level).build())
    }

    #[test]
    fn verbosity_only_reaches_this_crate() {
        let logger = builder(level_for(2)).build();
        let own = concat!(env!("CARGO_CRATE_NAME"), "::catalog");

        assert!(enabled(&logger, own, log::Level::Debug));
        assert!(!enabled(&logger, own, log::Level::Trace));
        assert!(!enabled(&logger, "html5ever::tree_builder", log::Level::Debug));
        assert!(!enabled(&logger, "selectors::matching", log::Level::Info));
        assert!(enabled(&logger, "html5ever::tree_builder", log::Level::Warn));
    }

    #[test]
    fn verbosity_steps_up() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
