//! Settle an SPL-token payment session

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::FEE_COLLECTOR;
use crate::errors::PaymentError;
use crate::events::PaymentProcessed;
use crate::state::{Merchant, Payment};

#[derive(Accounts)]
pub struct ProcessTokenPayment<'info> {
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

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: token destination owner, pinned to the merchant authority
    #[account(address = merchant.authority)]
    pub merchant_wallet: UncheckedAccount<'info>,

    /// CHECK: platform fee wallet, pinned to the deployment constant
    #[account(address = FEE_COLLECTOR)]
    pub fee_collector: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = payer
    )]
    pub payer_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = merchant_wallet
    )]
    pub merchant_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = fee_collector
    )]
    pub fee_collector_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ProcessTokenPayment>) -> Result<()> {
    let clock = Clock::get()?;
    let payment = &mut ctx.accounts.payment;
    let merchant = &mut ctx.accounts.merchant;

    payment.assert_settleable(clock.unix_timestamp)?;

    let token_mint = payment
        .token_mint
        .ok_or(PaymentError::InvalidPaymentType)?;
    require!(
        token_mint == ctx.accounts.mint.key(),
        PaymentError::TokenMintMismatch
    );

    let (merchant_amount, fee) = merchant.fee_split(payment.amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payer_token_account.to_account_info(),
                to: ctx.accounts.merchant_token_account.to_account_info(),
                authority: ctx.accounts.payer.to_account_info(),
            },
        ),
        merchant_amount,
    )?;

    if fee > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.payer_token_account.to_account_info(),
                    to: ctx.accounts.fee_collector_token_account.to_account_info(),
                    authority: ctx.accounts.payer.to_account_info(),
                },
            ),
            fee,
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
        token_mint: payment.token_mint,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Token payment settled: {} to merchant, {} fee (mint {})",
        merchant_amount,
        fee,
        token_mint
    );

    Ok(())
}
