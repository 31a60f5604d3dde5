//! Interactive query shell
//!
//! Reads one command per line and prints the results. The shell remembers the
//! last request so `!!` can resubmit it; the engine itself keeps no session state.

use super::QueryConfig;
use super::runner::execute;
use crate::output::{Pager, print_banner, print_error, print_help, print_result};
use crate::query::{QueryEngine, Request};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// One parsed line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Quit,
    Repeat,
    Help,
    Blank,
    Run(Request),
}

impl ShellCommand {
    /// Parse a line of user input
    ///
    /// # Examples
    /// ```
    /// use wordhunt::commands::ShellCommand;
    /// use wordhunt::query::Request;
    ///
    /// assert_eq!(ShellCommand::parse("q"), ShellCommand::Quit);
    /// assert_eq!(
    ///     ShellCommand::parse("scrab asdf"),
    ///     ShellCommand::Run(Request::Scrab("asdf".into()))
    /// );
    /// assert_eq!(
    ///     ShellCommand::parse("^berg"),
    ///     ShellCommand::Run(Request::Pattern("^berg".into()))
    /// );
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        match line {
            "" => return Self::Blank,
            "quit" | "q" | "exit" => return Self::Quit,
            "!!" | "." => return Self::Repeat,
            "help" | "?" => return Self::Help,
            _ => {}
        }

        if let Some((head, rest)) = line.split_once(char::is_whitespace) {
            if matches!(head, "scrab" | "s") {
                return Self::Run(Request::Scrab(rest.trim().to_string()));
            }
        }

        if matches!(line, "scrab" | "s") {
            return Self::Run(Request::Scrab(String::new()));
        }

        Self::Run(Request::Pattern(line.to_string()))
    }
}

/// Reject scrab requests over the configured letter limit
///
/// # Errors
///
/// Returns a message naming the limit when the request is too long.
pub fn check_limits(request: &Request, config: &QueryConfig) -> Result<(), String> {
    if let Request::Scrab(letters) = request {
        let len = letters.chars().count();
        if len > config.max_letters {
            return Err(format!(
                "{len} letters is over the limit of {} (raise it with --max-letters)",
                config.max_letters
            ));
        }
    }
    Ok(())
}

/// Run the interactive shell until the user quits or stdin closes
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
/// Query errors are reported and the loop continues.
pub fn run_shell(engine: &QueryEngine<'_>, config: &QueryConfig) -> Result<()> {
    let pager = Pager::new(config.paging);
    let mut previous: Option<Request> = None;

    print_banner(engine);

    while let Some(line) = get_user_input("wordhunt")? {
        let request = match ShellCommand::parse(&line) {
            ShellCommand::Quit => break,
            ShellCommand::Blank => continue,
            ShellCommand::Help => {
                print_help();
                continue;
            }
            ShellCommand::Repeat => {
                let Some(request) = previous.clone() else {
                    println!("Nothing to repeat yet!\n");
                    continue;
                };
                println!("{} {request}", "↻".bright_black());
                request
            }
            ShellCommand::Run(request) => request,
        };

        if let Err(message) = check_limits(&request, config) {
            println!("{} {message}\n", "❌".red());
            continue;
        }

        match execute(engine, &request) {
            Ok(result) => {
                print_result(&request, &result, &pager).context("failed to print results")?;
            }
            Err(err) => print_error(&err),
        }
        println!();

        previous = Some(request);
    }

    println!("\n👋 Bye!\n");
    Ok(())
}

/// Prompt and read one line, returning `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{}> ", prompt.bright_cyan());
    io::stdout().flush().context("failed to flush prompt")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;

    Ok((read > 0).then_some(input))
}
