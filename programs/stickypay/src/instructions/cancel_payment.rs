//! Cancel an open payment session

use anchor_lang::prelude::*;

use crate::errors::PaymentError;
use crate::events::PaymentCancelled;
use crate::state::{Merchant, Payment};

#[derive(Accounts)]
pub struct CancelPayment<'info> {
    #[account(
        seeds = [Merchant::SEED, merchant.authority.as_ref()],
        bump = merchant.bump,
        has_one = authority @ PaymentError::Unauthorized
    )]
    pub merchant: Account<'info, Merchant>,

    #[account(
        mut,
        seeds = [Payment::SEED, merchant.key().as_ref(), payment.reference.as_ref()],
        bump = payment.bump,
        has_one = merchant
    )]
    pub payment: Account<'info, Payment>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<CancelPayment>) -> Result<()> {
    let payment = &mut ctx.accounts.payment;

    require!(!payment.paid, PaymentError::PaymentAlreadyProcessed);
    require!(!payment.cancelled, PaymentError::PaymentAlreadyCancelled);

    let clock = Clock::get()?;
    payment.cancelled = true;
    payment.cancelled_at = Some(clock.unix_timestamp);

    emit!(PaymentCancelled {
        payment: payment.key(),
        merchant: payment.merchant,
        timestamp: clock.unix_timestamp,
    });

    msg!("Payment cancelled: {}", payment.key());

    Ok(())
}
