// File: ./src/logging.rs
// Terminal logger setup for the command-line front end.
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Maps `-v` repetitions onto a level. Flags only ever raise the configured
/// level.
pub fn level_for(verbosity: u8, configured: LevelFilter) -> LevelFilter {
    let requested = match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    configured.max(requested)
}

/// Installs a stderr logger limited to this crate's targets.
///
/// Calling it twice is harmless: the second logger is simply not installed.
pub fn init(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .add_filter_allow_str("leavecal")
        .set_time_level(LevelFilter::Off)
        .build();
    if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        log::debug!("Logger already initialized");
    }
}
