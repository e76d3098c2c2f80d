//! Transactional boundary settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default transaction timeout.
pub const DEFAULT_TRANSACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Isolation level requested from the transaction coordinator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IsolationLevel {
    Serializable,
    RepeatableRead,
    #[default]
    ReadCommitted,
    ReadUncommitted,
    Snapshot,
}

/// How message handling is wrapped in a transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionScopeConfiguration {
    /// Create real scopes; a disabled configuration yields null scopes.
    pub enabled: bool,
    pub isolation_level: IsolationLevel,
    pub timeout: Duration,
}

impl Default for TransactionScopeConfiguration {
    fn default() -> Self {
        Self {
            enabled: true,
            isolation_level: IsolationLevel::default(),
            timeout: DEFAULT_TRANSACTION_TIMEOUT,
        }
    }
}
