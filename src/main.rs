use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ESCRIBE_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();
    estate_scribe::app::cli::run();
}
