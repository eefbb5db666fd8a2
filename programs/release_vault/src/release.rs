//! Release rules — pure decision logic with no Anchor Context dependency.
//!
//! Both the instruction handlers and the host-side [`crate::engine`] call into
//! this module, so there is exactly one implementation of the withdrawal
//! decision procedure. Every function takes the current time as an argument
//! and never reads a clock itself.
//!
//! The `*ed` functions return a staged copy of the record. Callers commit the
//! copy only after the value transfer has succeeded.

use crate::constants::{MONTH_DURATION_SECONDS, NEVER_WITHDRAWN};
use crate::error::VaultError;
use crate::state::{ReleasePhase, VaultRecord};

type Result<T> = core::result::Result<T, VaultError>;

// =========================================================================
// Time windows
// =========================================================================

/// `true` while `now` is before `lock_until`.
pub fn is_locked(lock_until: i64, now: i64) -> bool {
    now < lock_until
}

/// Whole cooldown windows elapsed since `last_withdrawal_time`.
///
/// A clock reading behind the last withdrawal counts as zero windows.
pub fn months_elapsed(last_withdrawal_time: i64, now: i64) -> i64 {
    let elapsed = now.saturating_sub(last_withdrawal_time).max(0);
    elapsed / MONTH_DURATION_SECONDS
}

/// `true` when a withdrawal happened less than one full window ago.
pub fn is_cooldown_active(last_withdrawal_time: i64, now: i64) -> bool {
    last_withdrawal_time != NEVER_WITHDRAWN && months_elapsed(last_withdrawal_time, now) == 0
}

/// Current phase of the release state machine.
pub fn release_phase(record: &VaultRecord, now: i64) -> ReleasePhase {
    if !is_locked(record.lock_until, now) {
        ReleasePhase::Unlocked
    } else if is_cooldown_active(record.last_withdrawal_time, now) {
        ReleasePhase::CooldownActive
    } else {
        ReleasePhase::CooldownClear
    }
}

// =========================================================================
// Decision procedures
// =========================================================================

/// Validate a credit and return the new balance.
pub fn check_credit(record: &VaultRecord, amount: u64) -> Result<u64> {
    if amount == 0 {
        return Err(VaultError::InvalidAmount);
    }
    record
        .total_deposited
        .checked_add(amount)
        .ok_or(VaultError::Overflow)
}

/// Validate a regular withdrawal.
///
/// Checks run in a fixed order so that a request violating several rules
/// always reports the same error: amount, balance, monthly cap, cooldown.
/// The cap and cooldown apply only while locked.
pub fn check_withdrawal(record: &VaultRecord, amount: u64, now: i64) -> Result<()> {
    if amount == 0 {
        return Err(VaultError::InvalidAmount);
    }
    if amount > record.total_deposited {
        return Err(VaultError::InsufficientBalance);
    }
    if is_locked(record.lock_until, now) {
        if amount > record.monthly_release {
            return Err(VaultError::ExceedsMonthlyLimit);
        }
        if is_cooldown_active(record.last_withdrawal_time, now) {
            return Err(VaultError::CooldownActive);
        }
    }
    Ok(())
}

/// Validate an emergency withdrawal and return the amount it drains.
pub fn check_emergency(record: &VaultRecord) -> Result<u64> {
    if !record.emergency_enabled {
        return Err(VaultError::EmergencyNotEnabled);
    }
    if record.total_deposited == 0 {
        return Err(VaultError::NothingToWithdraw);
    }
    Ok(record.total_deposited)
}

// =========================================================================
// Staged transitions
// =========================================================================

/// Record after crediting `amount`.
pub fn credited(record: &VaultRecord, amount: u64) -> Result<VaultRecord> {
    let total_deposited = check_credit(record, amount)?;
    Ok(VaultRecord {
        total_deposited,
        ..*record
    })
}

/// Record after withdrawing `amount` at `now`.
pub fn withdrawn(record: &VaultRecord, amount: u64, now: i64) -> Result<VaultRecord> {
    check_withdrawal(record, amount, now)?;
    let total_deposited = record
        .total_deposited
        .checked_sub(amount)
        .ok_or(VaultError::InsufficientBalance)?;
    Ok(VaultRecord {
        total_deposited,
        last_withdrawal_time: now,
        ..*record
    })
}

/// Record after an emergency drain at `now`, with the drained amount.
///
/// `lock_until` is left as is.
pub fn emergency_drained(record: &VaultRecord, now: i64) -> Result<(VaultRecord, u64)> {
    let amount = check_emergency(record)?;
    let staged = VaultRecord {
        total_deposited: 0,
        last_withdrawal_time: now,
        ..*record
    };
    Ok((staged, amount))
}

// =========================================================================
// Release status (query)
// =========================================================================

/// Snapshot of what a beneficiary can do right now.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReleaseStatus {
    pub phase: ReleasePhase,
    /// Largest amount a regular withdrawal would accept at `now`
    pub available_now: u64,
    /// When the active cooldown stops blocking withdrawals
    pub next_withdrawal_at: Option<i64>,
}

/// Largest amount [`check_withdrawal`] would accept at `now`.
pub fn available_to_withdraw(record: &VaultRecord, now: i64) -> u64 {
    match release_phase(record, now) {
        ReleasePhase::Unlocked => record.total_deposited,
        ReleasePhase::CooldownClear => record.total_deposited.min(record.monthly_release),
        ReleasePhase::CooldownActive => 0,
    }
}

/// Earliest moment the cooldown stops applying: either a full window after
/// the last withdrawal or the end of the lock, whichever comes first.
/// `None` when nothing is blocking.
pub fn next_withdrawal_at(record: &VaultRecord, now: i64) -> Option<i64> {
    match release_phase(record, now) {
        ReleasePhase::CooldownActive => {
            let window_end = record
                .last_withdrawal_time
                .saturating_add(MONTH_DURATION_SECONDS);
            Some(window_end.min(record.lock_until))
        }
        ReleasePhase::Unlocked | ReleasePhase::CooldownClear => None,
    }
}

pub fn release_status(record: &VaultRecord, now: i64) -> ReleaseStatus {
    ReleaseStatus {
        phase: release_phase(record, now),
        available_now: available_to_withdraw(record, now),
        next_withdrawal_at: next_withdrawal_at(record, now),
    }
}
