// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use f1_results::{app, args::Args, error::AppError, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_tracing(args.global.verbose);

    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

fn report(err: AppError) -> ExitCode {
    let code = err.exit_code();
    match err {
        AppError::NoData(message) => eprintln!("warning: {message}"),
        other => eprintln!("Error: {}", anyhow::Error::from(other)),
    }
    code
}
