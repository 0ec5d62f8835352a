use std::process::ExitCode;

use anyhow::Error;
use feature_view::{app, load_bed, parse_args, ChartConfig, LoadError};

// sysexits.h codes
const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_NOINPUT: u8 = 66;
const EX_UNAVAILABLE: u8 = 69;

fn main() -> ExitCode {
    env_logger::init();

    let path = match parse_args(std::env::args()) {
        Ok(path) => path,
        Err(usage) => {
            eprintln!("{usage}");
            return ExitCode::from(EX_USAGE);
        }
    };

    let track = match load_bed(&path) {
        Ok(track) => track,
        Err(e) => {
            let code = if e.is_malformed() { EX_DATAERR } else { EX_NOINPUT };
            return fail(e.into(), code);
        }
    };

    match app::show(track, ChartConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(Error::msg(e.to_string()).context("cannot display chart"), EX_UNAVAILABLE),
    }
}

fn fail(err: Error, code: u8) -> ExitCode {
    eprintln!("feature-view: {err:#}");
    log::debug!("exiting with status {code}");
    ExitCode::from(code)
}
