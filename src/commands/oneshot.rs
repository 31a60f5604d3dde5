//! Single-query commands for scripting
//!
//! Runs one request and prints the result, then exits.

use super::QueryConfig;
use super::runner::execute;
use super::shell::check_limits;
use crate::output::{Pager, print_result};
use crate::query::{QueryEngine, Request};
use anyhow::{Context, Result, anyhow};

/// Run one request and print its result
///
/// # Errors
///
/// Returns an error if the request is over the configured limits, the query
/// fails, or output cannot be written.
pub fn run_once(engine: &QueryEngine<'_>, request: &Request, config: &QueryConfig) -> Result<()> {
    check_limits(request, config).map_err(|message| anyhow!(message))?;

    let result = execute(engine, request)?;
    print_result(request, &result, &Pager::new(config.paging)).context("failed to print results")
}
