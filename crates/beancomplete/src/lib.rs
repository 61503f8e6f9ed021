//! Account autocomplete engine for beancount ledgers.
//!
//! This crate sits between a host editor and a ledger file on disk.
//! The host configures which ledger to track (via [`LedgerSettings`]),
//! triggers [`query_completions`] on keystrokes, and renders the
//! returned suggestions. Everything in between is handled here:
//!
//! - **Caching**: [`AccountCache`] re-scans the ledger only when its
//!   modification time advances, otherwise returning the stored
//!   snapshot.
//! - **Filtering**: typed text is matched case-insensitively as a
//!   substring against each account name.
//!
//! # Example
//!
//! ```no_run
//! use beancomplete::{query_completions, AccountCache, FixedSettings};
//!
//! let settings = FixedSettings::new("/home/user/ledger.beancount");
//! let mut cache = AccountCache::new(settings);
//!
//! if let Some(list) = query_completions(&mut cache, "Assets") {
//!     for suggestion in &list.suggestions {
//!         println!("{}", suggestion.label);
//!     }
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod complete;
mod settings;

pub use cache::AccountCache;
pub use complete::{filter_accounts, query_completions, CompletionList, Suggestion};
pub use settings::{FixedSettings, JsonSettings, LedgerSettings};

// Re-exported so hosts can select an extraction policy without
// depending on the extraction crate directly.
pub use beancomplete_extract::ExtractPolicy;
