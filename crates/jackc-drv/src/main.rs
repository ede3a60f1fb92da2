use clap::Parser;
use jackc_drv::{init_tracing, run, Config};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::parse();
    init_tracing(&config);

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
