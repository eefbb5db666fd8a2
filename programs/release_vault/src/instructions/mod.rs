//! Instruction handlers

pub mod initialize;
pub mod credit;
pub mod withdraw;
pub mod emergency_withdraw;
pub mod configure;
pub mod inspect;

pub use initialize::*;
pub use credit::*;
pub use withdraw::*;
pub use emergency_withdraw::*;
pub use configure::*;
pub use inspect::*;
