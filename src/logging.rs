use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout belongs to the board display
            let _ = writeln!(
                std::io::stderr(),
                "{:<5} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Initialize logging with a level taken from `level`, or else from the
/// `BATTLESHIP_LOG` environment variable. Defaults to `info` if neither is
/// set or the variable is invalid.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level.unwrap_or_else(|| {
        env::var("BATTLESHIP_LOG")
            .ok()
            .and_then(|lvl| lvl.parse().ok())
            .unwrap_or(LevelFilter::Info)
    });
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
