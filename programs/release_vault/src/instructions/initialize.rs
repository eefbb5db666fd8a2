//! Initialize program config and the custody token account

use crate::constants::{CONFIG_SEED, CUSTODY_SEED};
use crate::state::VaultConfig;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = VaultConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, VaultConfig>,

    /// The only asset this deployment holds
    pub mint: Account<'info, Mint>,

    /// Program-owned custody for all credited value
    #[account(
        init,
        payer = authority,
        seeds = [CUSTODY_SEED],
        bump,
        token::mint = mint,
        token::authority = config
    )]
    pub custody: Account<'info, TokenAccount>,

    /// Becomes the vault authority
    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_initialize(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.mint = ctx.accounts.mint.key();
    config.custody = ctx.accounts.custody.key();
    config.bump = ctx.bumps.config;
    config.custody_bump = ctx.bumps.custody;

    emit!(crate::events::VaultInitialized {
        authority: config.authority,
        mint: config.mint,
        custody: config.custody,
    });

    msg!(
        "Release vault initialized: authority={}, mint={}",
        config.authority,
        config.mint
    );
    Ok(())
}
