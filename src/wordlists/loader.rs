//! Word list loading utilities
//!
//! Turns raw lines (from a file or any other source) into a filtered `WordStore`.

use super::WordStore;
use crate::core::{Word, WordError};
use crate::error::QueryError;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load words from a file, one word per line
///
/// Lines are filtered with the `Word` acceptance rules; rejected lines are skipped.
///
/// # Errors
///
/// Returns `QueryError::SourceUnavailable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordhunt::wordlists::loader::load_from_file;
///
/// let store = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", store.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordStore, QueryError> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| QueryError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    // System word lists are not always clean UTF-8
    let content = String::from_utf8_lossy(&content);
    let store = words_from_lines(content.lines());

    info!(path = %path.display(), words = store.len(), "loaded word list");
    Ok(store)
}

/// Build a store from an ordered sequence of raw lines
///
/// # Examples
/// ```
/// use wordhunt::wordlists::loader::words_from_lines;
///
/// let store = words_from_lines(["sad", "Sadie", "sad's", "ads"]);
/// assert_eq!(store.len(), 2);
/// ```
#[must_use]
pub fn words_from_lines<I, S>(lines: I) -> WordStore
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rejected = 0usize;

    let words = lines
        .into_iter()
        .filter_map(|line| match Word::new(line.as_ref()) {
            Ok(word) => Some(word),
            Err(WordError::Empty) => None,
            Err(_) => {
                rejected += 1;
                None
            }
        })
        .collect();

    debug!(rejected, "filtered proper nouns and punctuated entries");
    WordStore::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_lines_filters_and_keeps_order() {
        let store = words_from_lines(["iceberg", "Berg", "bergs", "berg's", "x-ray", "berg"]);

        let texts: Vec<&str> = store.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["iceberg", "bergs", "berg"]);
    }

    #[test]
    fn words_from_lines_skips_blank_lines() {
        let store = words_from_lines(["ad", "", "  ", "as"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn words_from_lines_empty() {
        let lines: [&str; 0] = [];
        assert!(words_from_lines(lines).is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fads\nFrance\nsad\r\nads").unwrap();

        let store = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = store.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["fads", "sad", "ads"]);
    }

    #[test]
    fn load_from_file_tolerates_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"ad\nd\xe9j\xe0\nas\n").unwrap();

        let store = load_from_file(file.path()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.words()[2].text(), "as");
    }

    #[test]
    fn load_from_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("words");

        let err = load_from_file(&missing).unwrap_err();
        assert!(matches!(
            err,
            QueryError::SourceUnavailable { ref path, .. } if *path == missing
        ));
    }
}
