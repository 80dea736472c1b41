//! Hatch's application entry point.
//! Parses the command line, sets up logging and runs the generation flow
//! against the interactive terminal.

use hatch::{
    cli::get_args,
    command::execute,
    error::{default_error_handler, Error},
    logger::init_logger,
    prompt::TerminalInput,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => return default_error_handler(Error::IoError(e)),
    };
    let mut input = TerminalInput::new();
    if let Err(err) = execute(cwd, &args, &mut input) {
        default_error_handler(err);
    }
}
