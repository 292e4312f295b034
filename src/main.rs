mod errors;
mod generators;
mod password;
mod session;

use std::io;
use std::process::ExitCode;

use tracing::{Level, error};

use crate::errors::SessionError;
use crate::session::Session;

fn main() -> ExitCode {
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    match session.run() {
        Ok(()) | Err(SessionError::InputClosed) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session aborted");
            ExitCode::FAILURE
        }
    }
}

// Diagnostics go to stderr so stdout only carries the conversation.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
