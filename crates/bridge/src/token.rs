use std::{collections::HashMap, fmt};

use lucid_identifiers::{Amount, Identity};
use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("insufficient balance: have {available}, need {requested}")]
pub struct InsufficientBalance {
    pub available: Amount,
    pub requested: Amount,
}

/// The authoritative token balances the bridge burns from and mints into.
///
/// Lives outside the bridge; the bridge's own per-account counters are audit
/// data only.
pub trait TokenLedger: Send + Sync + fmt::Debug {
    fn balance_of(&self, account: &Identity) -> Amount;

    /// Removes `amount` from the account, or fails leaving it unchanged.
    fn debit(&self, account: &Identity, amount: Amount) -> Result<(), InsufficientBalance>;

    fn credit(&self, account: &Identity, amount: Amount);
}

/// Token ledger kept in a map, for tests and single-process setups.
#[derive(Debug, Default)]
pub struct InMemoryTokenLedger {
    balances: Mutex<HashMap<Identity, Amount>>,
}

impl InMemoryTokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balances(balances: impl IntoIterator<Item = (Identity, Amount)>) -> Self {
        Self {
            balances: Mutex::new(balances.into_iter().collect()),
        }
    }
}

impl TokenLedger for InMemoryTokenLedger {
    fn balance_of(&self, account: &Identity) -> Amount {
        self.balances.lock().get(account).copied().unwrap_or_default()
    }

    fn debit(&self, account: &Identity, amount: Amount) -> Result<(), InsufficientBalance> {
        let mut balances = self.balances.lock();
        let available = balances.get(account).copied().unwrap_or_default();
        let remaining = available
            .checked_sub(amount)
            .ok_or(InsufficientBalance {
                available,
                requested: amount,
            })?;
        balances.insert(*account, remaining);
        Ok(())
    }

    fn credit(&self, account: &Identity, amount: Amount) {
        let mut balances = self.balances.lock();
        let bal = balances.entry(*account).or_default();
        *bal = bal.saturating_add(amount);
    }
}
