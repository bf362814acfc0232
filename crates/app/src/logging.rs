//! Subscriber setup. On the web, events go to the browser console.

use std::sync::Once;

use shared_types::LogLevel;
use tracing_subscriber::filter::LevelFilter;

static INIT: Once = Once::new();

/// Install the global subscriber at `level`. Later calls are no-ops.
pub fn init(level: LogLevel) {
    INIT.call_once(|| install(level_filter(level)));
}

fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

#[cfg(feature = "web")]
fn install(filter: LevelFilter) {
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(not(feature = "web"))]
fn install(filter: LevelFilter) {
    use tracing_subscriber::prelude::*;

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_one_to_one() {
        assert_eq!(level_filter(LogLevel::Error), LevelFilter::ERROR);
        assert_eq!(level_filter(LogLevel::Warn), LevelFilter::WARN);
        assert_eq!(level_filter(LogLevel::Trace), LevelFilter::TRACE);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(LogLevel::Debug);
        init(LogLevel::Error);
    }
}
