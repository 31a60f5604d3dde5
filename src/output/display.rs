//! Display functions for query results

use super::formatters::{plural, result_summary};
use super::pager::Pager;
use crate::error::QueryError;
use crate::query::{QueryEngine, Request, ResultSet};
use colored::Colorize;
use std::io;

/// Print the startup banner for the interactive shell
pub fn print_banner(engine: &QueryEngine<'_>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD HUNT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n📚 {} loaded, {} distinct letter signatures",
        plural(engine.store().len(), "word").bright_yellow(),
        engine.index().len()
    );
    println!("Type 'help' for commands.\n");
}

/// Print the command reference
pub fn print_help() {
    println!("\n{}", "Commands:".bright_cyan().bold());
    println!("  <regex>            words matching the regular expression anywhere");
    println!("  scrab <letters>    words spelled from a subset of the letters (alias: s)");
    println!("  !! or .            repeat the previous query");
    println!("  help or ?          show this list");
    println!("  quit, q or exit    leave\n");
}

/// Print a result set with its summary line
///
/// # Errors
///
/// Returns an I/O error if output or paging fails.
pub fn print_result(request: &Request, result: &ResultSet<'_>, pager: &Pager) -> io::Result<()> {
    let summary = result_summary(request, result.count());
    if result.is_empty() {
        println!("{}", summary.yellow());
        return Ok(());
    }

    println!("{}", summary.green().bold());
    pager.show(result.texts())
}

/// Report a recoverable query error
pub fn print_error(err: &QueryError) {
    println!("{} {err}", "❌".red());
}
