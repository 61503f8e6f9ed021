//! Suggestion filtering and the host trigger operation.

use crate::cache::AccountCache;
use crate::settings::LedgerSettings;

/// A single completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Text shown in the host's completion list.
    pub label: String,
    /// Text inserted when the suggestion is accepted.
    pub insert_text: String,
}

/// Suggestions handed back to the host on a trigger, plus flags telling
/// it to suppress its own completion sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionList {
    /// Matching suggestions, in the cache's sort order.
    pub suggestions: Vec<Suggestion>,
    /// The host should not offer its buffer-word completions.
    pub inhibit_word_completions: bool,
    /// The host should not offer its explicitly registered completions.
    pub inhibit_explicit_completions: bool,
}

/// Filter account names by a case-insensitive substring match.
///
/// Despite being driven by the host's "typed prefix", the match is a
/// substring match: typing `ets` offers `Assets:Bank:Checking`. The
/// input order (the cache's sort order) is preserved.
pub fn filter_accounts(accounts: &[String], typed: &str) -> Vec<Suggestion> {
    let needle = typed.to_lowercase();
    accounts
        .iter()
        .filter(|account| account.to_lowercase().contains(&needle))
        .map(|account| Suggestion {
            label: account.clone(),
            insert_text: account.clone(),
        })
        .collect()
}

/// Handle a completion trigger from the host.
///
/// Returns `None` when no accounts are known, so the host can fall
/// back to its default behavior. This is distinct from `Some` with an
/// empty suggestion list, which means accounts exist but none match
/// the typed text.
pub fn query_completions<S: LedgerSettings>(
    cache: &mut AccountCache<S>,
    typed: &str,
) -> Option<CompletionList> {
    let accounts = cache.accounts();
    if accounts.is_empty() {
        return None;
    }

    Some(CompletionList {
        suggestions: filter_accounts(&accounts, typed),
        inhibit_word_completions: true,
        inhibit_explicit_completions: true,
    })
}
