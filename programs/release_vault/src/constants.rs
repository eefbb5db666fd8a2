//! Program constants

/// Length of one cooldown window while a vault is locked (30 days).
///
/// Windows are measured from the previous withdrawal, not from calendar
/// month boundaries.
pub const MONTH_DURATION_SECONDS: i64 = 30 * 24 * 60 * 60;

/// `lock_until` value meaning "never locked"
pub const NO_LOCK: i64 = 0;

/// `last_withdrawal_time` value meaning "never withdrawn"
pub const NEVER_WITHDRAWN: i64 = 0;

/// Seed for the program-wide config PDA
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed for the custody token account PDA that holds credited value
pub const CUSTODY_SEED: &[u8] = b"custody";

/// Seed prefix for per-beneficiary vault record PDAs
pub const RECORD_SEED: &[u8] = b"vault-record";
