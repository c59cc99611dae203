//! Student records menu.
//!
//! This binary delegates to `student_records_cli` for configuration, loading
//! and the menu loop, keeping the interactive behaviour testable without
//! spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use student_records_cli::CliError;
use student_records_cli::config::CliSettings;
use student_records_cli::logging::init_tracing;
use student_records_cli::menu::{Session, SessionEnd};
use student_records_cli::startup::load_or_empty;

fn main() -> ExitCode {
    match run() {
        Ok(SessionEnd::Saved | SessionEnd::InputClosed) => ExitCode::SUCCESS,
        Ok(SessionEnd::SaveFailed(_)) => ExitCode::FAILURE,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<SessionEnd, CliError> {
    let settings = CliSettings::load(env::args_os())?;
    init_tracing(settings.log_filter());

    let data_file = settings.data_file();
    let mut output = io::stdout().lock();
    let mut store = load_or_empty(&data_file, &mut output)?;

    Session::new(&mut store, &data_file, io::stdin().lock(), output).run()
}
