//! Account structures for merchants and payment sessions

use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::PaymentError;

/// Maximum length for a merchant display name
pub const MAX_NAME_LEN: usize = 64;

/// Maximum length for a payment memo
pub const MAX_MEMO_LEN: usize = 200;

/// Registered merchant, one per authority wallet
#[account]
#[derive(InitSpace)]
pub struct Merchant {
    /// Wallet allowed to create and cancel payment sessions
    pub authority: Pubkey,

    /// Display name
    #[max_len(MAX_NAME_LEN)]
    pub name: String,

    /// Fee charged on every settlement, in basis points (max 1000)
    pub fee_basis_points: u16,

    /// Count of settled payments
    pub total_payments: u64,

    /// Gross settled amount, pre-fee
    pub total_volume: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Merchant {
    pub const SEED: &'static [u8] = b"merchant";

    /// Derive the merchant address for an authority wallet
    pub fn find_address(authority: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED, authority.as_ref()], &crate::ID)
    }

    /// Split an amount into (merchant share, fee). The fee floors,
    /// so rounding dust stays with the merchant.
    pub fn fee_split(&self, amount: u64) -> Result<(u64, u64)> {
        let fee = (amount as u128)
            .checked_mul(self.fee_basis_points as u128)
            .and_then(|v| v.checked_div(BPS_DENOMINATOR as u128))
            .and_then(|v| u64::try_from(v).ok())
            .ok_or(PaymentError::MathOverflow)?;

        let merchant_amount = amount
            .checked_sub(fee)
            .ok_or(PaymentError::MathOverflow)?;

        Ok((merchant_amount, fee))
    }

    /// Roll a settled payment into the lifetime counters. Volume is
    /// gross, not net of fee.
    pub fn record_settlement(&mut self, amount: u64) -> Result<()> {
        self.total_payments = self
            .total_payments
            .checked_add(1)
            .ok_or(PaymentError::MathOverflow)?;
        self.total_volume = self
            .total_volume
            .checked_add(amount)
            .ok_or(PaymentError::MathOverflow)?;
        Ok(())
    }
}

/// Payment session, one per (merchant, reference) pair
#[account]
#[derive(InitSpace)]
pub struct Payment {
    /// Owning merchant account
    pub merchant: Pubkey,

    /// Amount due, in lamports or raw token units
    pub amount: u64,

    /// Caller-chosen uniqueness key, never required to sign
    pub reference: Pubkey,

    /// Free-text memo
    #[max_len(MAX_MEMO_LEN)]
    pub memo: String,

    pub created_at: i64,
    pub expires_at: i64,

    /// Write-once settlement flag
    pub paid: bool,

    /// Write-once cancellation flag, mutually exclusive with `paid`
    pub cancelled: bool,

    pub paid_at: Option<i64>,
    pub cancelled_at: Option<i64>,

    /// Wallet that settled the payment
    pub payer: Option<Pubkey>,

    /// None means native SOL; Some means SPL tokens of this mint
    pub token_mint: Option<Pubkey>,

    /// PDA bump seed
    pub bump: u8,
}

impl Payment {
    pub const SEED: &'static [u8] = b"payment";

    /// Derive the payment address for a (merchant, reference) pair
    pub fn find_address(merchant: &Pubkey, reference: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED, merchant.as_ref(), reference.as_ref()],
            &crate::ID,
        )
    }

    /// Settlement guard: the session must be open and unexpired.
    /// Expiry is checked live against the supplied clock; a payment
    /// at exactly `expires_at` is already expired.
    pub fn assert_settleable(&self, now: i64) -> Result<()> {
        require!(!self.paid, PaymentError::PaymentAlreadyProcessed);
        require!(!self.cancelled, PaymentError::PaymentAlreadyCancelled);
        require!(now < self.expires_at, PaymentError::PaymentExpired);
        Ok(())
    }

    /// Flip the write-once settlement flag and record the payer
    pub fn mark_paid(&mut self, payer: Pubkey, now: i64) {
        self.paid = true;
        self.paid_at = Some(now);
        self.payer = Some(payer);
    }
}
