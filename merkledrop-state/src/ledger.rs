//! Token ledger collaborator.
//!
//! The distribution never mints or burns; it only redistributes tokens that
//! were funded into its custody before activation. The trait abstracts over
//! the backing ledger so the state machine can run against an in-memory
//! implementation in development and tests and against a real token ledger
//! in deployment.

use std::collections::HashMap;

use merkledrop_core::{Address, U256};

use crate::error::LedgerError;

/// External fungible-token ledger, scoped to the distribution's custody.
///
/// `transfer` must be wholesale: a call either fully applies or returns an
/// error without moving any tokens. The distribution relies on this to keep
/// claims all-or-nothing.
pub trait TokenLedger {
    /// Tokens currently held in the distribution's custody.
    fn custody_balance(&self) -> U256;

    /// Move `amount` tokens out of custody to `to`.
    fn transfer(&mut self, to: &Address, amount: U256) -> Result<(), LedgerError>;
}

/// In-memory token ledger backed by a balance map.
///
/// This is the development and testing implementation; deployments swap in
/// an adapter over the real token ledger implementing the same trait.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedger {
    custody: U256,
    accounts: HashMap<Address, U256>,
}

impl InMemoryLedger {
    /// Create an empty ledger with nothing in custody.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fund the distribution's custody.
    ///
    /// Models the pre-activation funding step in which the genesis pool is
    /// moved into the distribution's custody.
    pub fn fund_custody(&mut self, amount: U256) {
        self.custody = self.custody + amount;
    }

    /// Balance of an individual account.
    pub fn balance(&self, account: &Address) -> U256 {
        self.accounts.get(account).copied().unwrap_or_else(U256::zero)
    }

    /// Sum of all account balances (excludes custody).
    pub fn distributed_total(&self) -> U256 {
        self.accounts
            .values()
            .fold(U256::zero(), |acc, v| acc + *v)
    }
}

impl TokenLedger for InMemoryLedger {
    fn custody_balance(&self) -> U256 {
        self.custody
    }

    fn transfer(&mut self, to: &Address, amount: U256) -> Result<(), LedgerError> {
        if self.custody < amount {
            return Err(LedgerError::InsufficientFunds {
                available: self.custody,
                requested: amount,
            });
        }

        self.custody = self.custody - amount;
        let entry = self.accounts.entry(*to).or_insert_with(U256::zero);
        *entry = *entry + amount;

        Ok(())
    }
}
