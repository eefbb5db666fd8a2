//! Withdraw instruction - beneficiary withdraws under lock, monthly cap and cooldown

use crate::constants::{CONFIG_SEED, RECORD_SEED};
use crate::error::VaultError;
use crate::release;
use crate::state::{BeneficiaryVault, VaultConfig};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Withdraw<'info> {
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

pub fn process_withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let beneficiary = ctx.accounts.beneficiary.key();
    let info = ctx.accounts.vault.to_account_info();
    let now = Clock::get()?.unix_timestamp;

    let loaded = BeneficiaryVault::load(&info)?;
    let record = loaded.as_ref().map(|v| v.record).unwrap_or_default();
    let staged = release::withdrawn(&record, amount, now)?;
    // A zeroed record never gets past the checks above
    let mut vault = loaded.ok_or(VaultError::InsufficientBalance)?;

    release_from_custody(
        &ctx.accounts.config,
        &ctx.accounts.custody,
        &ctx.accounts.destination,
        &ctx.accounts.token_program,
        amount,
    )?;

    vault.record = staged;
    vault.store(&info)?;

    emit!(crate::events::VaultWithdrawn {
        beneficiary,
        amount,
        remaining: staged.total_deposited,
        timestamp: now,
    });

    msg!(
        "Withdrawal by {}: amount={}, remaining={}",
        beneficiary,
        amount,
        staged.total_deposited
    );
    Ok(())
}

/// Move `amount` out of custody, signed by the config PDA.
pub(crate) fn release_from_custody<'info>(
    config: &Account<'info, VaultConfig>,
    custody: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    token_program: &Program<'info, Token>,
    amount: u64,
) -> Result<()> {
    let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &[config.bump]]];

    transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: custody.to_account_info(),
                to: destination.to_account_info(),
                authority: config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}
