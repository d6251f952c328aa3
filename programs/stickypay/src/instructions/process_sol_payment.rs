//! Settle a native-SOL payment session

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke, system_instruction};

use crate::constants::FEE_COLLECTOR;
use crate::errors::PaymentError;
use crate::events::PaymentProcessed;
use crate::state::{Merchant, Payment};

#[derive(Accounts)]
pub struct ProcessSolPayment<'info> {
    #[account(
        mut,
        seeds = [Merchant::SEED, merchant.authority.as_ref()],
        bump = merchant.bump
    )]
    pub merchant: Account<'info, Merchant>,

    #[account(
        mut,
        seeds = [Payment::SEED, merchant.key().as_ref(), payment.reference.as_ref()],
        bump = payment.bump,
        has_one = merchant
    )]
    pub payment: Account<'info, Payment>,

    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: settlement destination, pinned to the merchant authority
    #[account(mut, address = merchant.authority)]
    pub merchant_wallet: UncheckedAccount<'info>,

    /// CHECK: platform fee wallet, pinned to the deployment constant
    #[account(mut, address = FEE_COLLECTOR)]
    pub fee_collector: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ProcessSolPayment>) -> Result<()> {
    let clock = Clock::get()?;
    let payment = &mut ctx.accounts.payment;
    let merchant = &mut ctx.accounts.merchant;

    payment.assert_settleable(clock.unix_timestamp)?;
    require!(payment.token_mint.is_none(), PaymentError::InvalidPaymentType);

    let (merchant_amount, fee) = merchant.fee_split(payment.amount)?;

    invoke(
        &system_instruction::transfer(
            &ctx.accounts.payer.key(),
            &ctx.accounts.merchant_wallet.key(),
            merchant_amount,
        ),
        &[
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.merchant_wallet.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )?;

    if fee > 0 {
        invoke(
            &system_instruction::transfer(
                &ctx.accounts.payer.key(),
                &ctx.accounts.fee_collector.key(),
                fee,
            ),
            &[
                ctx.accounts.payer.to_account_info(),
                ctx.accounts.fee_collector.to_account_info(),
                ctx.accounts.system_program.to_account_info(),
            ],
        )?;
    }

    // State flips only after both transfer legs have succeeded
    payment.mark_paid(ctx.accounts.payer.key(), clock.unix_timestamp);
    merchant.record_settlement(payment.amount)?;

    emit!(PaymentProcessed {
        payment: payment.key(),
        merchant: payment.merchant,
        payer: ctx.accounts.payer.key(),
        amount: payment.amount,
        fee,
        token_mint: None,
        timestamp: clock.unix_timestamp,
    });

    msg!("SOL payment settled: {} to merchant, {} fee", merchant_amount, fee);

    Ok(())
}
