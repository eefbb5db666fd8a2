//! Program error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Requested amount exceeds the vault balance")]
    InsufficientBalance,

    #[msg("Requested amount exceeds the monthly release cap while locked")]
    ExceedsMonthlyLimit,

    #[msg("A withdrawal was already made in the current 30-day window")]
    CooldownActive,

    #[msg("Emergency withdrawal has not been enabled for this vault")]
    EmergencyNotEnabled,

    #[msg("Vault balance is zero")]
    NothingToWithdraw,

    #[msg("Caller is not permitted to perform this operation")]
    Unauthorized,

    #[msg("Value transfer did not complete")]
    TransferFailed,

    #[msg("Arithmetic overflow")]
    Overflow,

    // ---------------------------------------------------------------------
    // Account validation
    // ---------------------------------------------------------------------
    #[msg("Token account is not the configured custody account")]
    InvalidCustody,
}
