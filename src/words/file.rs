//! Parsing of word files, which hold one `word = hint` entry per line.

use regex::Regex;
use tracing::warn;

use crate::words::{Entry, WordsError};

/// The pattern every non-blank, non-comment line has to match. The word is everything before the
/// first `=` and the hint everything after it, both trimmed.
const LINE: &str = r"\A\s*([^=]*?)\s*=\s*(.*?)\s*\z";

/// This function parses every line in the text and keeps the ones holding a valid entry.
pub(super) fn parse(text: &str) -> Result<Vec<Entry>, WordsError> {
    let re = Regex::new(LINE)?;
    let mut entries = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((word, hint)) = split(&re, trimmed) else {
            warn!(line = index + 1, "skipping a line without '='");
            continue;
        };

        match Entry::new(word, hint) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!(line = index + 1, %err, "skipping an invalid word"),
        }
    }

    Ok(entries)
}

/// This function splits a line into its word and hint, if it has a `=` separator.
fn split<'line>(re: &Regex, line: &'line str) -> Option<(&'line str, &'line str)> {
    let (_, [word, hint]) = re.captures(line)?.extract();
    Some((word, hint))
}
