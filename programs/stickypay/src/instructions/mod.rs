//! Instruction handlers for the payment program

pub mod initialize_merchant;
pub mod create_payment_session;
pub mod process_sol_payment;
pub mod process_token_payment;
pub mod cancel_payment;

pub use initialize_merchant::*;
pub use create_payment_session::*;
pub use process_sol_payment::*;
pub use process_token_payment::*;
pub use cancel_payment::*;
