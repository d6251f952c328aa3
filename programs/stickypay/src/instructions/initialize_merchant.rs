//! Register the signing wallet as a merchant

use anchor_lang::prelude::*;

use crate::constants::MAX_FEE_BASIS_POINTS;
use crate::errors::PaymentError;
use crate::events::MerchantInitialized;
use crate::state::{Merchant, MAX_NAME_LEN};

#[derive(Accounts)]
pub struct InitializeMerchant<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Merchant::INIT_SPACE,
        seeds = [Merchant::SEED, authority.key().as_ref()],
        bump
    )]
    pub merchant: Account<'info, Merchant>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeMerchant>,
    name: String,
    fee_basis_points: u16,
) -> Result<()> {
    require!(!name.is_empty(), PaymentError::NameEmpty);
    require!(name.len() <= MAX_NAME_LEN, PaymentError::NameTooLong);
    require!(
        fee_basis_points <= MAX_FEE_BASIS_POINTS,
        PaymentError::FeeTooHigh
    );

    let clock = Clock::get()?;
    let merchant = &mut ctx.accounts.merchant;

    merchant.authority = ctx.accounts.authority.key();
    merchant.name = name;
    merchant.fee_basis_points = fee_basis_points;
    merchant.total_payments = 0;
    merchant.total_volume = 0;
    merchant.bump = ctx.bumps.merchant;

    emit!(MerchantInitialized {
        merchant: merchant.key(),
        authority: merchant.authority,
        fee_basis_points,
        timestamp: clock.unix_timestamp,
    });

    msg!("Merchant initialized: {} ({} bps)", merchant.name, fee_basis_points);

    Ok(())
}
