//! Fetching of word lists published as JSON over HTTP.

use std::time::Duration;

use indicatif::ProgressBar;
use serde::Deserialize;
use tracing::warn;

use crate::words::{Entry, WordsError};

/// This struct holds a single object of the remote JSON array. Words are validated only after
/// deserialization, so that one bad object doesn't discard the whole list.
#[derive(Deserialize)]
struct RemoteEntry {
    /// This field contains the free-form hint.
    hint: String,
    /// This field contains the word, in any case.
    word: String,
}

/// This function performs the request for the word list while a spinner runs in the terminal, and
/// converts the listing into entries.
pub(super) fn fetch(url: &str) -> Result<Vec<Entry>, WordsError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching the word list...");
    spinner.enable_steady_tick(Duration::from_millis(50));

    let listing = ureq::get(url)
        .call()
        .and_then(|response| response.into_body().read_json::<Vec<RemoteEntry>>());
    spinner.finish_and_clear();

    Ok(convert(listing?))
}

/// This function keeps the objects holding a valid word.
fn convert(listing: Vec<RemoteEntry>) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(listing.len());

    for RemoteEntry { hint, word } in listing {
        match Entry::new(&word, &hint) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!(%err, "skipping an invalid remote word"),
        }
    }

    entries
}
