//! Authority configuration of a named beneficiary's release rules
//!
//! Each setter touches exactly one field of the target record and does no
//! cross-field validation. The target is always the `beneficiary` account
//! passed in, never the authority's own record.

use crate::constants::{CONFIG_SEED, RECORD_SEED};
use crate::error::VaultError;
use crate::state::{BeneficiaryVault, VaultConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ConfigureVault<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ VaultError::Unauthorized
    )]
    pub config: Account<'info, VaultConfig>,

    #[account(
        init_if_needed,
        payer = authority,
        space = BeneficiaryVault::SIZE,
        seeds = [RECORD_SEED, beneficiary.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, BeneficiaryVault>,

    /// CHECK: Only used as the record PDA seed
    pub beneficiary: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ConfigureVault<'info> {
    fn bound_vault(&mut self, bump: u8) -> &mut BeneficiaryVault {
        let beneficiary = self.beneficiary.key();
        let vault: &mut BeneficiaryVault = &mut self.vault;
        vault.bind(beneficiary, bump);
        vault
    }
}

pub fn process_set_lock_until(ctx: Context<ConfigureVault>, lock_until: i64) -> Result<()> {
    let clock = Clock::get()?;
    let bump = ctx.bumps.vault;
    let vault = ctx.accounts.bound_vault(bump);
    vault.record.lock_until = lock_until;

    emit!(crate::events::LockUntilUpdated {
        beneficiary: vault.beneficiary,
        lock_until,
        timestamp: clock.unix_timestamp,
    });

    msg!("Lock for {} set until {}", vault.beneficiary, lock_until);
    Ok(())
}

pub fn process_set_monthly_release(
    ctx: Context<ConfigureVault>,
    monthly_release: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let bump = ctx.bumps.vault;
    let vault = ctx.accounts.bound_vault(bump);
    vault.record.monthly_release = monthly_release;

    emit!(crate::events::MonthlyReleaseUpdated {
        beneficiary: vault.beneficiary,
        monthly_release,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Monthly release for {} set to {}",
        vault.beneficiary,
        monthly_release
    );
    Ok(())
}

pub fn process_enable_emergency(ctx: Context<ConfigureVault>) -> Result<()> {
    let clock = Clock::get()?;
    let bump = ctx.bumps.vault;
    let vault = ctx.accounts.bound_vault(bump);
    vault.record.emergency_enabled = true;

    emit!(crate::events::EmergencyEnabled {
        beneficiary: vault.beneficiary,
        timestamp: clock.unix_timestamp,
    });

    msg!("Emergency withdrawal enabled for {}", vault.beneficiary);
    Ok(())
}
