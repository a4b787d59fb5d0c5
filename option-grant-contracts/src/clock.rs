//! Time source for vesting.
//!
//! The ledger never reads the host clock directly; it asks a [`Clock`], so
//! vesting math stays a pure function of an injected `now`.

use soroban_sdk::{contracttype, Env};

/// Which ledger counter drives vesting.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClockSource {
    /// Ledger close time in seconds
    Timestamp,
    /// Ledger sequence number
    Sequence,
}

pub trait Clock {
    fn now(&self) -> u64;
}

/// [`Clock`] backed by the current ledger.
pub struct LedgerClock<'a> {
    env: &'a Env,
    source: ClockSource,
}

impl<'a> LedgerClock<'a> {
    pub fn new(env: &'a Env, source: ClockSource) -> Self {
        Self { env, source }
    }
}

impl Clock for LedgerClock<'_> {
    fn now(&self) -> u64 {
        match self.source {
            ClockSource::Timestamp => self.env.ledger().timestamp(),
            ClockSource::Sequence => self.env.ledger().sequence() as u64,
        }
    }
}

/// Fixed reading for driving the ledger directly in tests.
#[cfg(test)]
pub struct FixedClock(pub u64);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}
