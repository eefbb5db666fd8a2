//! Emergency withdraw instruction - beneficiary drains the whole balance
//!
//! Skips the lock, monthly cap and cooldown. Only available after the
//! authority has enabled it for this beneficiary.

use crate::constants::{CONFIG_SEED, RECORD_SEED};
use crate::error::VaultError;
use crate::instructions::withdraw::release_from_custody;
use crate::release;
use crate::state::{BeneficiaryVault, VaultConfig};
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, VaultConfig>,

    /// CHECK: Address pinned to the signer's record by the seeds constraint,
    /// which is what keeps other beneficiaries out. May be uninitialized.
    #[account(
        mut,
        seeds = [RECORD_SEED, beneficiary.key().as_ref()],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(
        mut,
        address = config.custody @ VaultError::InvalidCustody
    )]
    pub custody: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = config.mint,
        token::authority = beneficiary
    )]
    pub destination: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn process_emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    let beneficiary = ctx.accounts.beneficiary.key();
    let info = ctx.accounts.vault.to_account_info();
    let now = Clock::get()?.unix_timestamp;

    let loaded = BeneficiaryVault::load(&info)?;
    let record = loaded.as_ref().map(|v| v.record).unwrap_or_default();
    let (staged, amount) = release::emergency_drained(&record, now)?;
    let mut vault = loaded.ok_or(VaultError::EmergencyNotEnabled)?;

    release_from_custody(
        &ctx.accounts.config,
        &ctx.accounts.custody,
        &ctx.accounts.destination,
        &ctx.accounts.token_program,
        amount,
    )?;

    // lock_until stays as configured
    vault.record = staged;
    vault.store(&info)?;

    emit!(crate::events::EmergencyWithdrawn {
        beneficiary,
        amount,
        timestamp: now,
    });

    msg!("Emergency withdrawal by {}: drained {}", beneficiary, amount);
    Ok(())
}
