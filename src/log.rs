//! Logger setup for the binaries. Log lines go to stderr and are prefixed with `c` so that
//! they can never be mistaken for the report on stdout.

use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Installs a global logger showing messages up to `level`; `RUST_LOG` takes precedence.
pub fn build_logger_for_level(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "c {:<5} [{}] {}",
                record.level(),
                record.module_path().unwrap_or("-"),
                record.args()
            )
        })
        .init();
}

/// Same as [`build_logger_for_level`] where each verbosity step raises `base` by one level
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    build_logger_for_level(level_for_verbosity(base, verbosity));
}

fn level_for_verbosity(base: LevelFilter, verbosity: usize) -> LevelFilter {
    let idx = (base as usize + verbosity).min(LEVELS.len() - 1);
    LEVELS[idx]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbosity() {
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 9), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(LevelFilter::Off, 1), LevelFilter::Error);
    }
}
