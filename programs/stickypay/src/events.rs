//! Events emitted by the payment program.
//! The merchant dashboard and payment indexers consume these instead
//! of polling accounts.

use anchor_lang::prelude::*;

#[event]
pub struct MerchantInitialized {
    pub merchant: Pubkey,
    pub authority: Pubkey,
    pub fee_basis_points: u16,
    pub timestamp: i64,
}

#[event]
pub struct PaymentSessionCreated {
    pub payment: Pubkey,
    pub merchant: Pubkey,
    pub reference: Pubkey,
    pub amount: u64,
    /// None for native SOL sessions
    pub token_mint: Option<Pubkey>,
    pub expires_at: i64,
    pub timestamp: i64,
}

#[event]
pub struct PaymentProcessed {
    pub payment: Pubkey,
    pub merchant: Pubkey,
    pub payer: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub token_mint: Option<Pubkey>,
    pub timestamp: i64,
}

#[event]
pub struct PaymentCancelled {
    pub payment: Pubkey,
    pub merchant: Pubkey,
    pub timestamp: i64,
}
