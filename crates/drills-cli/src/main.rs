use anyhow::Result;
use log::LevelFilter;

use drills_cli::cli::{build_cli, run_stdio};
use drills_cli::commands::exit_code;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DRILLS_LOG", "error,drills=warn"))
        .init();

    let matches = build_cli().get_matches();

    match run_stdio(&matches) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("[Drills] Exercise failed: {:#}", e);
            std::process::exit(exit_code(&e))
        }
    }
}
