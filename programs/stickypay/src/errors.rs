//! Error definitions for the payment program

use anchor_lang::prelude::*;

#[error_code]
pub enum PaymentError {
    #[msg("Fee basis points cannot exceed 1000 (10%)")]
    FeeTooHigh,

    #[msg("Merchant name cannot be empty")]
    NameEmpty,

    #[msg("Merchant name is too long (max 64 bytes)")]
    NameTooLong,

    #[msg("Payment memo is too long (max 200 bytes)")]
    MemoTooLong,

    #[msg("Payment amount must be greater than zero")]
    InvalidAmount,

    #[msg("Expiry timestamp must be in the future")]
    InvalidExpiry,

    #[msg("Unauthorized: only the merchant authority can perform this action")]
    Unauthorized,

    #[msg("Payment has already been processed")]
    PaymentAlreadyProcessed,

    #[msg("Payment has already been cancelled")]
    PaymentAlreadyCancelled,

    #[msg("Payment has expired")]
    PaymentExpired,

    #[msg("Settlement path does not match the payment's currency")]
    InvalidPaymentType,

    #[msg("Presented mint does not match the payment's token mint")]
    TokenMintMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
