//! Vesting calculator.
//!
//! Grants vest linearly over `vesting_period` once `cliff_period` has elapsed
//! after the schedule start. Nothing vests during the cliff, a zero
//! `vesting_period` vests everything at the cliff end, and fractional units
//! are always truncated.

use crate::types::GrantRecord;

/// Options of `grant` vested at clock reading `now`.
///
/// Pure: depends only on the grant's schedule fields and `now`. The result
/// is non-decreasing in `now` and never exceeds `grant.options_granted`.
pub fn vested_amount(grant: &GrantRecord, now: u64) -> i128 {
    let schedule = match &grant.schedule {
        Some(schedule) => schedule,
        None => return 0,
    };

    let cliff_end = schedule.cliff_end();
    if now < cliff_end {
        return 0;
    }
    if schedule.vesting_period == 0 {
        return grant.options_granted;
    }

    let elapsed = now - cliff_end;
    if elapsed >= schedule.vesting_period {
        return grant.options_granted;
    }

    linear_share(grant.options_granted, elapsed, schedule.vesting_period)
}

/// `floor(total * elapsed / period)` for `0 <= elapsed < period`.
///
/// Split as `q * elapsed + r * elapsed / period` with `(q, r) = divmod(total,
/// period)`: the first term is at most `total` and the second fits in `u128`,
/// so no intermediate can overflow.
fn linear_share(total: i128, elapsed: u64, period: u64) -> i128 {
    if total <= 0 {
        return 0;
    }
    let total = total as u128;
    let elapsed = elapsed as u128;
    let period = period as u128;

    let whole = (total / period) * elapsed;
    let partial = (total % period) * elapsed / period;
    (whole + partial) as i128
}

/// Options still claimable by `grant` at `now`.
///
/// Zero once the grant has been exercised.
pub fn exercisable_amount(grant: &GrantRecord, now: u64) -> i128 {
    if grant.exercised {
        return 0;
    }
    (vested_amount(grant, now) - grant.exercised_options).max(0)
}
