//! Account extraction for beancount ledger files.
//!
//! This crate scans a ledger for `open` and `close` directives and
//! returns the declared account names, deduplicated and sorted. It
//! deliberately does not parse the ledger format (dates, postings,
//! amounts); a single pattern match per directive line is enough for
//! completion purposes.
//!
//! # Example
//!
//! ```
//! use beancomplete_extract::{extract_from_str, ExtractPolicy};
//!
//! let ledger = "\
//! 2024-01-01 open Assets:Bank:Checking
//! 2024-01-01 open Expenses:Food
//! 2024-06-01 close Expenses:Food
//! ";
//!
//! let accounts = extract_from_str(ledger, ExtractPolicy::ActiveOnly);
//! assert_eq!(accounts, vec!["Assets:Bank:Checking".to_string()]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod account;
mod scan;

pub use account::find_account;
pub use scan::{extract_accounts, extract_from_str, ExtractPolicy, ScanError};
