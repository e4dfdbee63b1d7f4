//! copycat - CLI entry point

use clap::{CommandFactory, Parser};
use std::io::{self, Write};
use std::process::ExitCode;

use copycat::cli::Cli;
use copycat::error::{EXIT_CANCELLED, EXIT_ERROR};
use copycat::prompt::TerminalPrompter;
use copycat::{commands, logging, Clipboard, Config, Console, Context, Error, Theme};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version land here too; only real parse errors fail.
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    logging::init();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "copycat", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let theme = Theme::detect();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let options = cli.options();
    let clipboard = Clipboard::with_preference(config.preferred_tool());
    let mut prompter = TerminalPrompter::new();
    let mut stdin = io::stdin();
    let mut stdout = io::stdout();

    let result = {
        let mut ctx = Context {
            clipboard: &clipboard,
            console: Console::new(&mut stdout, &mut prompter, theme),
            stdin: &mut stdin,
            stdin_is_terminal: atty::is(atty::Stream::Stdin),
            max_file_size: config.max_file_size(options.max_size),
        };
        commands::run(&options, &mut ctx)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::UserCancelled) => {
            let _ = writeln!(io::stdout(), "Operation cancelled.");
            ExitCode::from(EXIT_CANCELLED)
        }
        Err(e) => {
            eprintln!("{}", theme.error_text(&format!("Error: {}", e)));
            if matches!(e, Error::Usage(_)) {
                eprintln!("{}", theme.secondary_text("Use 'copycat -h' for help"));
            }
            ExitCode::from(e.exit_code())
        }
    }
}
