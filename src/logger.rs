use std::io::Write;

/// Environment variable overriding the log filter, in env_logger syntax.
pub const LOG_ENV: &str = "KILN_LOG";

pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_env(LOG_ENV)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(buf, "{style}[{}]{style:#} {}", record.level(), record.args())
        })
        .init();
}
