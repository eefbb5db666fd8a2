//! Credit instruction - authority deposits value on behalf of a beneficiary

use crate::constants::{CONFIG_SEED, RECORD_SEED};
use crate::error::VaultError;
use crate::release;
use crate::state::{BeneficiaryVault, VaultConfig};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Credit<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ VaultError::Unauthorized
    )]
    pub config: Account<'info, VaultConfig>,

    /// Created on first credit; an untouched beneficiary holds a zeroed record
    #[account(
        init_if_needed,
        payer = authority,
        space = BeneficiaryVault::SIZE,
        seeds = [RECORD_SEED, beneficiary.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, BeneficiaryVault>,

    /// CHECK: Only used as the record PDA seed; the beneficiary does not sign credits
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        mut,
        address = config.custody @ VaultError::InvalidCustody
    )]
    pub custody: Account<'info, TokenAccount>,

    /// Authority's token account funding the credit
    #[account(
        mut,
        token::mint = config.mint,
        token::authority = authority
    )]
    pub source: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_credit(ctx: Context<Credit>, amount: u64) -> Result<()> {
    let beneficiary = ctx.accounts.beneficiary.key();
    let vault = &mut ctx.accounts.vault;
    let clock = Clock::get()?;

    vault.bind(beneficiary, ctx.bumps.vault);
    let staged = release::credited(&vault.record, amount)?;

    transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.source.to_account_info(),
                to: ctx.accounts.custody.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        amount,
    )?;

    vault.record = staged;

    emit!(crate::events::VaultCredited {
        beneficiary,
        amount,
        total_deposited: staged.total_deposited,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Credited {} to {}: balance={}",
        amount,
        beneficiary,
        staged.total_deposited
    );
    Ok(())
}
