//! Mtime-keyed cache of extracted account names.

use crate::settings::LedgerSettings;
use beancomplete_extract::{extract_accounts, ExtractPolicy};
use std::fs;
use std::sync::Arc;
use std::time::SystemTime;

/// Caches the sorted account names of the configured ledger, re-running
/// extraction only when the file's modification time advances.
///
/// One instance lives for the editor session. The snapshot and the
/// mtime it was computed at are always committed together; a failed
/// scan leaves both untouched, so the next call retries.
#[derive(Debug)]
pub struct AccountCache<S> {
    settings: S,
    policy: ExtractPolicy,
    snapshot: Arc<[String]>,
    last_scan: Option<SystemTime>,
}

impl<S: LedgerSettings> AccountCache<S> {
    /// Create an empty cache with the default extraction policy.
    pub fn new(settings: S) -> Self {
        Self::with_policy(settings, ExtractPolicy::default())
    }

    /// Create an empty cache with an explicit extraction policy.
    pub fn with_policy(settings: S, policy: ExtractPolicy) -> Self {
        Self {
            settings,
            policy,
            snapshot: Arc::from(Vec::new()),
            last_scan: None,
        }
    }

    /// The current account names, re-scanning the ledger if it changed.
    ///
    /// Never fails: an unconfigured or missing ledger yields an empty
    /// slice (without disturbing the stored snapshot), and a scan
    /// failure is logged and answered with the last good snapshot.
    /// On a cache hit the returned `Arc` is the stored one, so callers
    /// may rely on identity stability across unchanged files.
    pub fn accounts(&mut self) -> Arc<[String]> {
        let Some(path) = self.settings.ledger_file() else {
            return Arc::from(Vec::new());
        };
        if path.as_os_str().is_empty() || !path.exists() {
            // Pass-through miss: the snapshot stays in place in case
            // the ledger reappears.
            return Arc::from(Vec::new());
        }

        let mtime = match fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(mtime) => mtime,
            Err(e) => {
                tracing::warn!("failed to stat ledger {}: {e}", path.display());
                return Arc::clone(&self.snapshot);
            }
        };

        if let Some(last) = self.last_scan {
            if mtime <= last {
                tracing::trace!("ledger unchanged, serving cached accounts");
                return Arc::clone(&self.snapshot);
            }
        }

        match extract_accounts(&path, self.policy) {
            Ok(accounts) => {
                tracing::debug!(
                    count = accounts.len(),
                    "reloaded accounts from {}",
                    path.display()
                );
                self.snapshot = accounts.into();
                self.last_scan = Some(mtime);
                Arc::clone(&self.snapshot)
            }
            Err(e) => {
                tracing::warn!("account scan failed, keeping previous snapshot: {e}");
                Arc::clone(&self.snapshot)
            }
        }
    }
}
