use anyhow::{Context, Result};
use colored::Colorize;
use strand::browser::open_browser_command;
use strand::console::{indent, pluralize, Console, ConsoleAbort, InputReader};
use strand::{CommandLine, Executor, SystemRunner};

use super::types::Commands;

pub fn dispatch(command: Commands) -> Result<()> {
    let executor = Executor::new(SystemRunner::new(), ConsoleAbort);
    let mut console = Console::stdout(ConsoleAbort);

    match command {
        Commands::Run { command } => {
            let command = command_line(command)?;
            let output = executor.run_require_output(&command);
            console.print_line(&output);
        }
        Commands::Try { command } => {
            let command = command_line(command)?;
            let execution = executor.run_capturing_output(&command);
            if !execution.output().is_empty() {
                console.print_line(execution.output());
            }
            if let Err(cause) = execution.outcome() {
                console.print_line(&format!("{} {cause}", "✗".red()));
                std::process::exit(1);
            }
        }
        Commands::Contains { target, command } => {
            let command = command_line(command)?;
            let found = executor.output_contains(&command, &target);
            console.print_line(&found.to_string());
        }
        Commands::ContainsLine { target, command } => {
            let command = command_line(command)?;
            let found = executor.output_contains_line(&command, &target);
            console.print_line(&found.to_string());
        }
        Commands::Browser => {
            console.print_line(&open_browser_command(&ConsoleAbort));
        }
        Commands::Ask { label } => {
            console.print_line(&format!("{label}:"));
            let mut input = InputReader::stdin();
            let answer = input.get_user_input(&ConsoleAbort);
            console.print_label_and_value("Answer", &answer);
        }
        Commands::Pluralize { count, word } => {
            console.print_line(&pluralize(&count, &word));
        }
        Commands::Indent { level, text } => {
            console.print_line(&indent(&text, level));
        }
    }
    Ok(())
}

fn command_line(argv: Vec<String>) -> Result<CommandLine> {
    CommandLine::try_from(argv).context("Expected a command after `--`")
}
