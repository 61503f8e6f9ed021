//! Ledger scanning for account declarations.

use crate::account::find_account;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while scanning a ledger file.
#[derive(Debug, Error)]
pub enum ScanError {
    /// IO error reading the ledger.
    #[error("failed to read ledger {path}: {source}")]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The ledger is not valid UTF-8.
    #[error("ledger {path} is not valid UTF-8")]
    Decode {
        /// The path that failed to decode.
        path: PathBuf,
    },
}

/// How `close` directives affect the extracted account set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractPolicy {
    /// Exclude accounts named in a `close` directive, even if opened.
    #[default]
    ActiveOnly,
    /// Return every opened account, ignoring `close` directives.
    AllOpened,
}

/// Extract account names declared in a ledger file.
///
/// Returns the accounts sorted ascending with duplicates removed.
/// Unreadable or non-UTF-8 files are reported as a [`ScanError`],
/// distinct from a readable ledger that declares no accounts.
pub fn extract_accounts(path: &Path, policy: ExtractPolicy) -> Result<Vec<String>, ScanError> {
    let bytes = fs::read(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| ScanError::Decode {
        path: path.to_path_buf(),
    })?;
    Ok(extract_from_str(&text, policy))
}

/// Extract account names from ledger text already in memory.
///
/// A line contributes at most one account: the first pattern match on
/// a line containing the space-delimited `open` (or `close`) keyword.
pub fn extract_from_str(text: &str, policy: ExtractPolicy) -> Vec<String> {
    let mut opened = BTreeSet::new();
    let mut closed = BTreeSet::new();

    for line in text.lines() {
        if line.contains(" open ") {
            if let Some(account) = find_account(line) {
                opened.insert(account.to_string());
            }
        } else if line.contains(" close ") {
            if let Some(account) = find_account(line) {
                closed.insert(account.to_string());
            }
        }
    }

    tracing::trace!(
        opened = opened.len(),
        closed = closed.len(),
        "scanned ledger text"
    );

    match policy {
        ExtractPolicy::ActiveOnly => opened.difference(&closed).cloned().collect(),
        ExtractPolicy::AllOpened => opened.into_iter().collect(),
    }
}
