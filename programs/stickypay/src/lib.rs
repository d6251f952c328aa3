//! StickyPay Payment Program
//!
//! Merchants register once under their wallet key, open payment
//! sessions keyed by a caller-chosen reference, and get settled in
//! SOL or SPL tokens with the platform fee split off to a fixed
//! collector wallet.

use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod stickypay {
    use super::*;

    /// Register the signing wallet as a merchant
    pub fn initialize_merchant(
        ctx: Context<InitializeMerchant>,
        name: String,
        fee_basis_points: u16,
    ) -> Result<()> {
        instructions::initialize_merchant::handler(ctx, name, fee_basis_points)
    }

    /// Open a payment session for a (merchant, reference) pair
    pub fn create_payment_session(
        ctx: Context<CreatePaymentSession>,
        amount: u64,
        reference: Pubkey,
        memo: String,
        expiry_timestamp: i64,
        token_mint: Option<Pubkey>,
    ) -> Result<()> {
        instructions::create_payment_session::handler(
            ctx,
            amount,
            reference,
            memo,
            expiry_timestamp,
            token_mint,
        )
    }

    /// Settle a native-SOL payment session
    pub fn process_sol_payment(ctx: Context<ProcessSolPayment>) -> Result<()> {
        instructions::process_sol_payment::handler(ctx)
    }

    /// Settle an SPL-token payment session
    pub fn process_token_payment(ctx: Context<ProcessTokenPayment>) -> Result<()> {
        instructions::process_token_payment::handler(ctx)
    }

    /// Cancel an open payment session
    pub fn cancel_payment(ctx: Context<CancelPayment>) -> Result<()> {
        instructions::cancel_payment::handler(ctx)
    }
}
