//! Host-side release engine
//!
//! Drives the release rules in [`crate::release`] against a [`VaultStore`]
//! with pluggable collaborators for value transfer, time and notifications.
//! The on-chain program gets the same collaborators from the runtime (token
//! CPI, `Clock` sysvar, `emit!`); this engine lets a backend or a test run the
//! state machine without a validator.
//!
//! Every state-changing operation follows stage → transfer → commit inside
//! [`VaultStore::mutate`]: the record is updated on a staged copy, the value
//! transfer runs, and the copy is committed only if the transfer succeeded.
//! Notifications go out after the commit and cannot undo it.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anchor_lang::prelude::*;

use crate::error::VaultError;
use crate::events::{
    EmergencyEnabled, EmergencyWithdrawn, LockUntilUpdated, MonthlyReleaseUpdated,
    VaultCredited, VaultEvent, VaultWithdrawn,
};
use crate::release::{self, ReleaseStatus};
use crate::state::VaultRecord;
use crate::store::VaultStore;

type EngineResult<T> = core::result::Result<T, VaultError>;

// =========================================================================
// Collaborators
// =========================================================================

/// Authenticated caller, as established by the authorization layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Caller {
    pub identity: Pubkey,
    /// Whether `identity` is the configured authority
    pub is_owner: bool,
}

impl Caller {
    pub fn owner(identity: Pubkey) -> Self {
        Self {
            identity,
            is_owner: true,
        }
    }

    pub fn beneficiary(identity: Pubkey) -> Self {
        Self {
            identity,
            is_owner: false,
        }
    }

    fn require_owner(&self) -> EngineResult<()> {
        if self.is_owner {
            Ok(())
        } else {
            Err(VaultError::Unauthorized)
        }
    }

    fn require_beneficiary(&self, beneficiary: &Pubkey) -> EngineResult<()> {
        if &self.identity == beneficiary {
            Ok(())
        } else {
            Err(VaultError::Unauthorized)
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransferDirection {
    /// Into custody on behalf of the beneficiary
    In,
    /// Out of custody to the beneficiary
    Out,
}

/// Moves real value. Any error aborts the operation that requested it.
pub trait ValueTransfer {
    fn transfer(&self, direction: TransferDirection, identity: &Pubkey, amount: u64)
        -> Result<()>;
}

/// Source of the current Unix timestamp
pub trait TimeSource {
    fn now(&self) -> i64;
}

/// Receives one event per committed operation. Best-effort.
pub trait Notifier {
    fn notify(&self, event: VaultEvent);
}

impl<T: ValueTransfer + ?Sized> ValueTransfer for Arc<T> {
    fn transfer(&self, direction: TransferDirection, identity: &Pubkey, amount: u64)
        -> Result<()> {
        (**self).transfer(direction, identity, amount)
    }
}

impl<C: TimeSource + ?Sized> TimeSource for Arc<C> {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, event: VaultEvent) {
        (**self).notify(event)
    }
}

/// Wall-clock time
#[derive(Clone, Copy, Default, Debug)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Writes every event to the program log
#[derive(Clone, Copy, Default, Debug)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: VaultEvent) {
        msg!("{:?}", event);
    }
}

// =========================================================================
// Engine
// =========================================================================

pub struct ReleaseEngine<T, C = SystemTimeSource, N = LogNotifier> {
    store: VaultStore,
    transfer: T,
    clock: C,
    notifier: N,
}

impl<T: ValueTransfer> ReleaseEngine<T> {
    pub fn new(transfer: T) -> Self {
        Self::with_collaborators(VaultStore::new(), transfer, SystemTimeSource, LogNotifier)
    }
}

impl<T, C, N> ReleaseEngine<T, C, N>
where
    T: ValueTransfer,
    C: TimeSource,
    N: Notifier,
{
    pub fn with_collaborators(store: VaultStore, transfer: T, clock: C, notifier: N) -> Self {
        Self {
            store,
            transfer,
            clock,
            notifier,
        }
    }

    pub fn store(&self) -> &VaultStore {
        &self.store
    }

    /// Credit `amount` to `beneficiary`. Authority only.
    pub fn credit(
        &self,
        caller: &Caller,
        beneficiary: &Pubkey,
        amount: u64,
    ) -> EngineResult<VaultRecord> {
        caller.require_owner()?;

        let (record, now) = self.store.mutate(beneficiary, |record| {
            let now = self.clock.now();
            *record = release::credited(record, amount)?;
            self.move_value(TransferDirection::In, beneficiary, amount)?;
            Ok::<_, VaultError>((*record, now))
        })?;

        msg!(
            "Credited {} to {}: balance={}",
            amount,
            beneficiary,
            record.total_deposited
        );
        self.notifier.notify(VaultEvent::Credited(VaultCredited {
            beneficiary: *beneficiary,
            amount,
            total_deposited: record.total_deposited,
            timestamp: now,
        }));
        Ok(record)
    }

    /// Withdraw `amount` under the lock, monthly cap and cooldown rules.
    /// Beneficiary only.
    pub fn withdraw(
        &self,
        caller: &Caller,
        beneficiary: &Pubkey,
        amount: u64,
    ) -> EngineResult<VaultRecord> {
        caller.require_beneficiary(beneficiary)?;

        let (record, now) = self.store.mutate(beneficiary, |record| {
            let now = self.clock.now();
            *record = release::withdrawn(record, amount, now)?;
            self.move_value(TransferDirection::Out, beneficiary, amount)?;
            Ok::<_, VaultError>((*record, now))
        })?;

        msg!(
            "Withdrawal by {}: amount={}, remaining={}",
            beneficiary,
            amount,
            record.total_deposited
        );
        self.notifier.notify(VaultEvent::Withdrawn(VaultWithdrawn {
            beneficiary: *beneficiary,
            amount,
            remaining: record.total_deposited,
            timestamp: now,
        }));
        Ok(record)
    }

    /// Drain the whole balance, ignoring lock, cap and cooldown.
    /// Beneficiary only; requires the authority to have enabled it.
    pub fn emergency_withdraw(
        &self,
        caller: &Caller,
        beneficiary: &Pubkey,
    ) -> EngineResult<VaultRecord> {
        caller.require_beneficiary(beneficiary)?;

        let (record, amount, now) = self.store.mutate(beneficiary, |record| {
            let now = self.clock.now();
            let (staged, amount) = release::emergency_drained(record, now)?;
            *record = staged;
            self.move_value(TransferDirection::Out, beneficiary, amount)?;
            Ok::<_, VaultError>((*record, amount, now))
        })?;

        msg!("Emergency withdrawal by {}: drained {}", beneficiary, amount);
        self.notifier
            .notify(VaultEvent::EmergencyWithdrawn(EmergencyWithdrawn {
                beneficiary: *beneficiary,
                amount,
                timestamp: now,
            }));
        Ok(record)
    }

    /// Authority only. No cross-field validation.
    pub fn set_lock_until(
        &self,
        caller: &Caller,
        beneficiary: &Pubkey,
        lock_until: i64,
    ) -> EngineResult<VaultRecord> {
        caller.require_owner()?;
        let (record, now) = self.configure(beneficiary, |record| record.lock_until = lock_until)?;

        msg!("Lock for {} set until {}", beneficiary, lock_until);
        self.notifier
            .notify(VaultEvent::LockUntilUpdated(LockUntilUpdated {
                beneficiary: *beneficiary,
                lock_until,
                timestamp: now,
            }));
        Ok(record)
    }

    /// Authority only. A cap above the balance is legal and simply non-binding.
    pub fn set_monthly_release(
        &self,
        caller: &Caller,
        beneficiary: &Pubkey,
        monthly_release: u64,
    ) -> EngineResult<VaultRecord> {
        caller.require_owner()?;
        let (record, now) = self.configure(beneficiary, |record| {
            record.monthly_release = monthly_release
        })?;

        msg!("Monthly release for {} set to {}", beneficiary, monthly_release);
        self.notifier
            .notify(VaultEvent::MonthlyReleaseUpdated(MonthlyReleaseUpdated {
                beneficiary: *beneficiary,
                monthly_release,
                timestamp: now,
            }));
        Ok(record)
    }

    /// Authority only. One-way: there is no operation that clears the flag.
    pub fn enable_emergency(
        &self,
        caller: &Caller,
        beneficiary: &Pubkey,
    ) -> EngineResult<VaultRecord> {
        caller.require_owner()?;
        let (record, now) = self.configure(beneficiary, |record| record.emergency_enabled = true)?;

        msg!("Emergency withdrawal enabled for {}", beneficiary);
        self.notifier.notify(VaultEvent::EmergencyEnabled(EmergencyEnabled {
            beneficiary: *beneficiary,
            timestamp: now,
        }));
        Ok(record)
    }

    /// Read-only snapshot; open to anyone.
    pub fn inspect(&self, identity: &Pubkey) -> VaultRecord {
        self.store.get(identity)
    }

    /// Phase, withdrawable amount and cooldown end for `identity` right now.
    pub fn release_status(&self, identity: &Pubkey) -> ReleaseStatus {
        let now = self.clock.now();
        release::release_status(&self.store.get(identity), now)
    }

    fn configure(
        &self,
        beneficiary: &Pubkey,
        update: impl FnOnce(&mut VaultRecord),
    ) -> EngineResult<(VaultRecord, i64)> {
        self.store.mutate(beneficiary, |record| {
            let now = self.clock.now();
            update(record);
            Ok((*record, now))
        })
    }

    fn move_value(
        &self,
        direction: TransferDirection,
        identity: &Pubkey,
        amount: u64,
    ) -> EngineResult<()> {
        self.transfer
            .transfer(direction, identity, amount)
            .map_err(|err| {
                msg!(
                    "Transfer {:?} of {} for {} failed: {}",
                    direction,
                    amount,
                    identity,
                    err
                );
                VaultError::TransferFailed
            })
    }
}
