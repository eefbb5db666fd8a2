//! Program state definitions

use anchor_lang::prelude::*;

/// Release state of one beneficiary.
///
/// The zero value is a valid record: an identity that was never touched is
/// indistinguishable from one holding `VaultRecord::default()`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct VaultRecord {
    /// Current withdrawable principal
    pub total_deposited: u64,
    /// Unrestricted withdrawal resumes at this Unix timestamp (0 = no lock)
    pub lock_until: i64,
    /// Max amount per cooldown window while locked
    pub monthly_release: u64,
    /// Unix timestamp of the last successful withdrawal (0 = never)
    pub last_withdrawal_time: i64,
    /// One-way flag set by the authority
    pub emergency_enabled: bool,
}

impl VaultRecord {
    pub const SIZE: usize = 8  // total_deposited
        + 8   // lock_until
        + 8   // monthly_release
        + 8   // last_withdrawal_time
        + 1;  // emergency_enabled
}

/// Withdrawal eligibility of a record at a given moment
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReleasePhase {
    /// `now >= lock_until`: any amount up to the balance
    Unlocked,
    /// Locked, no withdrawal in the current window: up to `monthly_release`
    CooldownClear,
    /// Locked, a withdrawal happened less than one window ago
    CooldownActive,
}

/// Program-wide configuration PDA
#[account]
#[derive(Default)]
pub struct VaultConfig {
    /// Identity allowed to credit and configure vaults
    pub authority: Pubkey,
    /// The single mint this deployment holds
    pub mint: Pubkey,
    /// Program-owned token account holding all credited value
    pub custody: Pubkey,
    /// Bump seed for the config PDA
    pub bump: u8,
    /// Bump seed for the custody PDA
    pub custody_bump: u8,
}

impl VaultConfig {
    pub const SIZE: usize = 8  // discriminator
        + 32  // authority
        + 32  // mint
        + 32  // custody
        + 1   // bump
        + 1;  // custody_bump
}

/// Per-beneficiary vault PDA
#[account]
#[derive(Default)]
pub struct BeneficiaryVault {
    /// Identity entitled to the balance
    pub beneficiary: Pubkey,
    /// Release state
    pub record: VaultRecord,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl BeneficiaryVault {
    pub const SIZE: usize = 8  // discriminator
        + 32  // beneficiary
        + VaultRecord::SIZE
        + 1   // bump
        + 32; // padding for future fields

    /// Bind a freshly created (`init_if_needed`) account to its beneficiary.
    /// No-op for an account that is already bound.
    pub fn bind(&mut self, beneficiary: Pubkey, bump: u8) {
        if self.beneficiary == Pubkey::default() {
            self.beneficiary = beneficiary;
            self.bump = bump;
        }
    }
    /// Decode record account data. Empty data is an account the authority
    /// never touched.
    pub fn decode(data: &[u8]) -> Result<Option<Self>> {
        if data.is_empty() {
            return Ok(None);
        }
        Self::try_deserialize(&mut &data[..]).map(Some)
    }

    /// Load a record PDA that may not exist yet.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.data_is_empty() {
            return Ok(None);
        }
        if info.owner != &crate::ID {
            return Err(anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram.into());
        }
        let data = info.try_borrow_data()?;
        Self::decode(&data)
    }

    /// Write back a record PDA loaded with [`Self::load`].
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}
