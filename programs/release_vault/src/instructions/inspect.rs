//! Inspect instruction - read a beneficiary's record through return data
//!
//! Open to any caller. The record account may not exist yet, in which case
//! the zeroed record is returned.

use crate::constants::RECORD_SEED;
use crate::state::{BeneficiaryVault, VaultRecord};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Inspect<'info> {
    /// CHECK: Address pinned by the seeds constraint; may be uninitialized
    #[account(
        seeds = [RECORD_SEED, beneficiary.key().as_ref()],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    /// CHECK: Any identity may be inspected
    pub beneficiary: UncheckedAccount<'info>,
}

pub fn process_inspect(ctx: Context<Inspect>) -> Result<VaultRecord> {
    let vault = BeneficiaryVault::load(&ctx.accounts.vault.to_account_info())?;
    Ok(vault.map(|v| v.record).unwrap_or_default())
}
