//! Deployment-time configuration for the payment program

use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey;

/// Platform wallet receiving the fee leg of every settlement.
/// Fixed at deployment; both settlement paths refuse any other account.
pub const FEE_COLLECTOR: Pubkey = pubkey!("3NRCPphqcyVmJviPyTzPBvwamLwUW5WN5sgJLifW2Q7q");

/// Basis points in 100%
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Fee ceiling: 1000 bps = 10%
pub const MAX_FEE_BASIS_POINTS: u16 = 1_000;
