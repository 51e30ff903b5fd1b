//! Per-account action serialization.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::types::AccountId;

/// Registry of per-account locks.
///
/// Every service operation holds its account's lock for the whole
/// load-mutate-save span, so two requests for the same account never
/// interleave while requests for different accounts run freely.
#[derive(Default)]
pub struct SessionRegistry {
    locks: StdMutex<HashMap<AccountId, Arc<Mutex<()>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for `account`, creating it on first use.
    pub async fn lock(&self, account: &AccountId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(locks.entry(account.clone()).or_default())
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn locks_are_per_account() {
        let registry = SessionRegistry::new();
        let held = registry.lock(&AccountId::from("alice")).await;

        // A different account must not block behind alice's guard.
        let other = registry.lock(&AccountId::from("bob")).await;
        drop(other);
        drop(held);

        // Reacquiring after release succeeds.
        let _again = registry.lock(&AccountId::from("alice")).await;
    }
}
