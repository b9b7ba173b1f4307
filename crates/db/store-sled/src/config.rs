use std::{fmt, sync::Arc, thread, time::Duration};

use lucid_db_types::{DbError, DbResult};
use sled::transaction::{ConflictableTransactionResult, TransactionError};
use tracing::*;

use crate::tree::SledTransactional;

// Configuration constants
pub(crate) const DEFAULT_RETRY_COUNT: u16 = 3;
pub(crate) const DEFAULT_RETRY_DELAY_MS: u64 = 150;
pub(crate) const TEST_RETRY_DELAY_MS: u64 = 10;

/// Delay policy between retries of a failed transaction.
pub trait Backoff: fmt::Debug + Send + Sync {
    /// Delay before retry number `attempt`, counting from zero.
    fn delay(&self, attempt: u16) -> Duration;
}

#[derive(Debug, Clone, Copy)]
pub struct ConstantBackoff {
    delay: Duration,
}

impl ConstantBackoff {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

impl Backoff for ConstantBackoff {
    fn delay(&self, _attempt: u16) -> Duration {
        self.delay
    }
}

/// database operations configuration
#[derive(Debug, Clone)]
pub struct SledDbConfig {
    pub retry_count: u16,
    pub backoff: Arc<dyn Backoff>,
}

impl SledDbConfig {
    pub fn new(retry_count: u16, backoff: Arc<dyn Backoff>) -> Self {
        Self {
            retry_count,
            backoff,
        }
    }

    pub fn new_with_constant_backoff(retry_count: u16, delay_ms: u64) -> Self {
        Self::new(retry_count, Arc::new(ConstantBackoff::new(delay_ms)))
    }

    /// Create production configuration with default values
    pub fn production() -> Self {
        Self::new_with_constant_backoff(DEFAULT_RETRY_COUNT, DEFAULT_RETRY_DELAY_MS)
    }

    /// Create test configuration with faster retry delays
    pub fn test() -> Self {
        Self::new_with_constant_backoff(DEFAULT_RETRY_COUNT, TEST_RETRY_DELAY_MS)
    }

    /// Runs `f` as one transaction over `trees` and flushes on success.
    ///
    /// Once the transaction commits its result is returned even if the flush
    /// fails; the flush failure is logged. Aborts carry a [`DbError`] out unchanged and are never retried. Storage
    /// failures are retried up to `retry_count` times with the configured
    /// backoff.
    pub(crate) fn with_retry<T, F, R>(&self, trees: T, f: F) -> DbResult<R>
    where
        T: SledTransactional,
        F: Fn(T::View) -> ConflictableTransactionResult<R, DbError>,
    {
        let mut attempt: u16 = 0;
        loop {
            match trees.transaction(&f) {
                Ok(res) => {
                    if let Err(e) = trees.flush() {
                        error!(%e, "flush failed after committed transaction");
                    }
                    return Ok(res);
                }
                Err(TransactionError::Abort(e)) => return Err(e),
                Err(TransactionError::Storage(e)) => {
                    if attempt >= self.retry_count {
                        return Err(DbError::TransactionError(e.to_string()));
                    }
                    let delay = self.backoff.delay(attempt);
                    warn!(%e, %attempt, ?delay, "sled transaction failed, retrying");
                    thread::sleep(delay);
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for SledDbConfig {
    fn default() -> Self {
        Self::production()
    }
}
