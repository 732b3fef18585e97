use anyhow::Result;
use std::io;

use check_bal::{build_cli, run, Config};

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = Config::from_matches(&matches);

    // RUST_LOG wins over --verbose.
    let default_level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    log::debug!("{:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)
}
