//! Release Vault Program
//!
//! A non-custodial value-release vault. The authority credits value on
//! behalf of a beneficiary; the beneficiary withdraws it under a lock
//! period, a monthly release cap and a 30-day cooldown. The authority can
//! grant a one-way emergency bypass that lets the beneficiary drain the
//! whole balance.
//!
//! The release rules live in [`release`] and are shared by the instruction
//! handlers and the host-side [`engine::ReleaseEngine`].

use anchor_lang::prelude::*;

declare_id!("9XqvB1m5pZk3R7hYVtJd4sNcLwE2aGfKoU8iTnQeHbMx");

pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod instructions;
pub mod release;
pub mod state;
pub mod store;


use instructions::*;
use state::VaultRecord;

#[program]
pub mod release_vault {
    use super::*;

    /// Create the program config and custody account; the signer becomes the authority
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::process_initialize(ctx)
    }

    /// Credit `amount` to a beneficiary (authority only)
    pub fn credit(ctx: Context<Credit>, amount: u64) -> Result<()> {
        instructions::credit::process_credit(ctx, amount)
    }

    /// Withdraw under lock, monthly cap and cooldown rules (beneficiary only)
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::process_withdraw(ctx, amount)
    }

    /// Drain the whole balance if the authority enabled the bypass (beneficiary only)
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::emergency_withdraw::process_emergency_withdraw(ctx)
    }

    /// Set when a beneficiary's lock ends (authority only, 0 = no lock)
    pub fn set_lock_until(ctx: Context<ConfigureVault>, lock_until: i64) -> Result<()> {
        instructions::configure::process_set_lock_until(ctx, lock_until)
    }

    /// Set a beneficiary's per-window cap while locked (authority only)
    pub fn set_monthly_release(ctx: Context<ConfigureVault>, monthly_release: u64) -> Result<()> {
        instructions::configure::process_set_monthly_release(ctx, monthly_release)
    }

    /// Permanently allow emergency withdrawal for a beneficiary (authority only)
    pub fn enable_emergency(ctx: Context<ConfigureVault>) -> Result<()> {
        instructions::configure::process_enable_emergency(ctx)
    }

    /// Return a beneficiary's record; zeroed if it was never touched
    pub fn inspect(ctx: Context<Inspect>) -> Result<VaultRecord> {
        instructions::inspect::process_inspect(ctx)
    }
}
