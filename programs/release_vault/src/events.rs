//! Program events for indexer visibility
//!
//! Every state-changing instruction emits one structured event so that
//! off-chain auditors and indexers can follow each vault without parsing
//! account data. The host-side engine publishes the same structs wrapped in
//! [`VaultEvent`].
//!
//! All vault events carry the `beneficiary` they apply to.

use anchor_lang::prelude::*;

/// Emitted once when the program config and custody account are created
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultInitialized {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub custody: Pubkey,
}

/// Emitted when the authority credits a beneficiary
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultCredited {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_deposited: u64,
    pub timestamp: i64,
}

/// Emitted on a successful regular withdrawal
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultWithdrawn {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub remaining: u64,
    pub timestamp: i64,
}

/// Emitted when a beneficiary drains the vault through the emergency bypass
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyWithdrawn {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockUntilUpdated {
    pub beneficiary: Pubkey,
    pub lock_until: i64,
    pub timestamp: i64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReleaseUpdated {
    pub beneficiary: Pubkey,
    pub monthly_release: u64,
    pub timestamp: i64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyEnabled {
    pub beneficiary: Pubkey,
    pub timestamp: i64,
}

/// Event delivered to a host-side [`crate::engine::Notifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultEvent {
    Credited(VaultCredited),
    Withdrawn(VaultWithdrawn),
    EmergencyWithdrawn(EmergencyWithdrawn),
    LockUntilUpdated(LockUntilUpdated),
    MonthlyReleaseUpdated(MonthlyReleaseUpdated),
    EmergencyEnabled(EmergencyEnabled),
}

impl VaultEvent {
    /// Beneficiary the event applies to
    pub fn beneficiary(&self) -> Pubkey {
        match self {
            VaultEvent::Credited(e) => e.beneficiary,
            VaultEvent::Withdrawn(e) => e.beneficiary,
            VaultEvent::EmergencyWithdrawn(e) => e.beneficiary,
            VaultEvent::LockUntilUpdated(e) => e.beneficiary,
            VaultEvent::MonthlyReleaseUpdated(e) => e.beneficiary,
            VaultEvent::EmergencyEnabled(e) => e.beneficiary,
        }
    }

    /// Clock reading of the operation that produced the event
    pub fn timestamp(&self) -> i64 {
        match self {
            VaultEvent::Credited(e) => e.timestamp,
            VaultEvent::Withdrawn(e) => e.timestamp,
            VaultEvent::EmergencyWithdrawn(e) => e.timestamp,
            VaultEvent::LockUntilUpdated(e) => e.timestamp,
            VaultEvent::MonthlyReleaseUpdated(e) => e.timestamp,
            VaultEvent::EmergencyEnabled(e) => e.timestamp,
        }
    }
}
