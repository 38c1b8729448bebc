use blueprint_codec::cli;
use env_logger::{Builder, Env};
use log::error;
use std::process::exit;

fn main() {
    // Initialize logger with default info level
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = cli::run() {
        error!("Error: {}", e);
        exit(1);
    }
}
