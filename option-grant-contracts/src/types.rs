//! Core data types for the option grant ledger.
//!
//! # Security Notes
//!
//! - All types use `#[contracttype]` so they serialize directly into contract storage
//! - `GrantRecord::options_granted` and `GrantRecord::schedule` are written once
//!   and never modified afterwards
//! - Addresses are used for identity to leverage Soroban's built-in access control

use soroban_sdk::{contracttype, Address};

use crate::clock::ClockSource;

/// Company-wide option counters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionPool {
    /// Remaining ungranted allocation; only decreases, never below zero
    pub total_options: i128,
    /// Cumulative options recorded as vested by the vesting sweep
    pub total_vested: i128,
}

/// Vesting schedule assigned to a grant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingSchedule {
    /// Clock reading when the schedule was assigned
    pub start_time: u64,
    /// Interval after `start_time` during which nothing vests
    pub cliff_period: u64,
    /// Interval after the cliff over which the grant vests linearly
    pub vesting_period: u64,
}

impl VestingSchedule {
    /// First clock reading at which anything can vest.
    pub fn cliff_end(&self) -> u64 {
        self.start_time.saturating_add(self.cliff_period)
    }
}

/// A beneficiary's grant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GrantRecord {
    pub beneficiary: Address,
    pub options_granted: i128,
    /// `None` until the principal assigns a schedule
    pub schedule: Option<VestingSchedule>,
    /// Vesting progress recorded by the sweep
    pub vested_options: i128,
    /// Options claimed through `exercise_options`
    pub exercised_options: i128,
    /// One-shot latch; set by the first successful exercise
    pub exercised: bool,
}

impl GrantRecord {
    pub fn new(beneficiary: Address, options_granted: i128) -> Self {
        Self {
            beneficiary,
            options_granted,
            schedule: None,
            vested_options: 0,
            exercised_options: 0,
            exercised: false,
        }
    }
}

/// Configuration fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Token delivered on exercise; `None` runs the ledger without token movement
    pub token: Option<Address>,
    pub clock: ClockSource,
}
