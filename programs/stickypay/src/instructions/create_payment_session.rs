//! Open a payment session for a (merchant, reference) pair

use anchor_lang::prelude::*;

use crate::errors::PaymentError;
use crate::events::PaymentSessionCreated;
use crate::state::{Merchant, Payment, MAX_MEMO_LEN};

#[derive(Accounts)]
#[instruction(amount: u64, reference: Pubkey)]
pub struct CreatePaymentSession<'info> {
    #[account(
        seeds = [Merchant::SEED, merchant.authority.as_ref()],
        bump = merchant.bump,
        has_one = authority @ PaymentError::Unauthorized
    )]
    pub merchant: Account<'info, Merchant>,

    #[account(
        init,
        payer = authority,
        space = 8 + Payment::INIT_SPACE,
        seeds = [Payment::SEED, merchant.key().as_ref(), reference.as_ref()],
        bump
    )]
    pub payment: Account<'info, Payment>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreatePaymentSession>,
    amount: u64,
    reference: Pubkey,
    memo: String,
    expiry_timestamp: i64,
    token_mint: Option<Pubkey>,
) -> Result<()> {
    require!(amount > 0, PaymentError::InvalidAmount);
    require!(memo.len() <= MAX_MEMO_LEN, PaymentError::MemoTooLong);

    let clock = Clock::get()?;
    require!(
        expiry_timestamp > clock.unix_timestamp,
        PaymentError::InvalidExpiry
    );

    let payment = &mut ctx.accounts.payment;

    payment.merchant = ctx.accounts.merchant.key();
    payment.amount = amount;
    payment.reference = reference;
    payment.memo = memo;
    payment.created_at = clock.unix_timestamp;
    payment.expires_at = expiry_timestamp;
    payment.paid = false;
    payment.cancelled = false;
    payment.paid_at = None;
    payment.cancelled_at = None;
    payment.payer = None;
    payment.token_mint = token_mint;
    payment.bump = ctx.bumps.payment;

    emit!(PaymentSessionCreated {
        payment: payment.key(),
        merchant: payment.merchant,
        reference,
        amount,
        token_mint,
        expires_at: expiry_timestamp,
        timestamp: clock.unix_timestamp,
    });

    match token_mint {
        Some(mint) => msg!("Payment session created: {} units of {}", amount, mint),
        None => msg!("Payment session created: {} lamports", amount),
    }

    Ok(())
}
