use std::io::IsTerminal;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use exaddr::cli::Cli;
use exaddr::{App, Config, ExAddrError, StyledFormatter};

fn main() -> ExitCode {
    let cli = Cli::from_args();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(category = %e.category(), "run aborted");
            eprintln!("{}", StyledFormatter::new().format_error(&e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), ExAddrError> {
    let config = Config::from_cli(cli)?;
    App::new(config).run()?;
    Ok(())
}

/// Install a stderr subscriber at the level selected by `--verbose`.
fn init_tracing(cli: &Cli) {
    let filter = cli
        .log_level()
        .map(LevelFilter::from_level)
        .unwrap_or(LevelFilter::OFF);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
