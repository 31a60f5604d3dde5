//! Request execution with progress and keyboard cancellation
//!
//! Short queries run inline. Scrab queries longer than `PROGRESS_THRESHOLD`
//! letters run on a worker thread while this thread watches for Esc or Ctrl-C.

use crate::error::QueryError;
use crate::output::BarObserver;
use crate::query::{CancelToken, PROGRESS_THRESHOLD, QueryEngine, Request, ResultSet};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::warn;

const KEY_POLL: Duration = Duration::from_millis(50);

/// Whether a request is long enough to warrant a progress bar
#[must_use]
pub fn needs_progress(request: &Request) -> bool {
    match request {
        Request::Scrab(letters) => letters.chars().count() > PROGRESS_THRESHOLD,
        Request::Pattern(_) => false,
    }
}

/// Run a request, showing progress for long scrab queries
///
/// # Errors
///
/// Returns the engine's `QueryError`, including `Cancelled` when the user
/// abandons a long query.
pub fn execute<'a>(
    engine: &QueryEngine<'a>,
    request: &Request,
) -> Result<ResultSet<'a>, QueryError> {
    if needs_progress(request) && io::stderr().is_terminal() {
        run_with_progress(engine, request)
    } else {
        engine.run(request)
    }
}

fn run_with_progress<'a>(
    engine: &QueryEngine<'a>,
    request: &Request,
) -> Result<ResultSet<'a>, QueryError> {
    let cancel = CancelToken::new();
    let done = AtomicBool::new(false);
    let mut observer = BarObserver::new();
    let bar = observer.bar();

    let result = thread::scope(|scope| {
        let worker = scope.spawn(|| {
            let result = engine.run_with(request, &mut observer, &cancel);
            done.store(true, Ordering::Release);
            result
        });

        if io::stdin().is_terminal() {
            watch_for_cancel(&cancel, &done);
        }

        worker
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    });

    bar.finish_and_clear();
    result
}

/// Poll the keyboard in raw mode until `done`, cancelling on Esc or Ctrl-C
fn watch_for_cancel(cancel: &CancelToken, done: &AtomicBool) {
    if let Err(e) = terminal::enable_raw_mode() {
        warn!(error = %e, "cannot watch keyboard for cancellation");
        return;
    }

    while !done.load(Ordering::Acquire) {
        match event::poll(KEY_POLL) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key))
                    if key.kind == KeyEventKind::Press && is_cancel_key(key.code, key.modifiers) =>
                {
                    cancel.cancel();
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "keyboard read failed");
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "keyboard poll failed");
                break;
            }
        }
    }

    if let Err(e) = terminal::disable_raw_mode() {
        warn!(error = %e, "failed to restore terminal mode");
    }
}

fn is_cancel_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordStore;

    #[test]
    fn progress_only_for_long_scrab_queries() {
        assert!(!needs_progress(&Request::Scrab("abcdefghij".into())));
        assert!(needs_progress(&Request::Scrab("abcdefghijk".into())));
        assert!(!needs_progress(&Request::Pattern("abcdefghijklmnop".into())));
    }

    #[test]
    fn cancel_keys() {
        assert!(is_cancel_key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(is_cancel_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!is_cancel_key(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!is_cancel_key(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn execute_short_query_inline() {
        let store = WordStore::from_lines(["ad", "as", "sad"]);
        let engine = QueryEngine::new(&store);

        let result = execute(&engine, &Request::Scrab("sad".into())).unwrap();
        assert_eq!(result.texts().collect::<Vec<_>>(), ["sad", "ad", "as"]);
    }
}
