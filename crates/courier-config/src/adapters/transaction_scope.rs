//! Default transaction scope factory.
//!
//! Transaction coordination belongs to the runtime's storage layer; these
//! scopes record the configured boundary and its completion.

use crate::domain::{IsolationLevel, TransactionScopeConfiguration};
use crate::ports::{TransactionScope, TransactionScopeFactory};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTransactionScopeFactory;

impl DefaultTransactionScopeFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TransactionScopeFactory for DefaultTransactionScopeFactory {
    fn create(&self, configuration: &TransactionScopeConfiguration) -> Box<dyn TransactionScope> {
        if !configuration.enabled {
            return Box::new(NullTransactionScope::default());
        }

        Box::new(DefaultTransactionScope::new(configuration))
    }
}

/// Scope carrying the configured isolation level and timeout.
#[derive(Debug)]
pub struct DefaultTransactionScope {
    isolation_level: IsolationLevel,
    timeout: Duration,
    completed: bool,
}

impl DefaultTransactionScope {
    /// Open a scope with the isolation level and timeout of `configuration`.
    #[must_use]
    pub fn new(configuration: &TransactionScopeConfiguration) -> Self {
        Self {
            isolation_level: configuration.isolation_level,
            timeout: configuration.timeout,
            completed: false,
        }
    }

    #[must_use]
    pub fn isolation_level(&self) -> IsolationLevel {
        self.isolation_level
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl TransactionScope for DefaultTransactionScope {
    fn name(&self) -> &str {
        "default"
    }

    fn complete(&mut self) {
        self.completed = true;
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}

impl Drop for DefaultTransactionScope {
    fn drop(&mut self) {
        if !self.completed {
            debug!(isolation_level = ?self.isolation_level, "Transaction scope disposed without completion");
        }
    }
}

/// Scope used when transactions are disabled.
#[derive(Debug, Default)]
pub struct NullTransactionScope {
    completed: bool,
}

impl TransactionScope for NullTransactionScope {
    fn name(&self) -> &str {
        "null"
    }

    fn complete(&mut self) {
        self.completed = true;
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}
