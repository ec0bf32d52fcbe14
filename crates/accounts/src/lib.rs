//! Customer credit accounts (event-sourced).
//!
//! This crate contains business rules for prepaid customer balances,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). The invariant is simple and absolute: a balance is never
//! observable below zero.

pub mod account;

pub use account::{
    AccountCommand, AccountEvent, AccountId, AccountOpened, CreditAccount, Deposit,
    FundsDeposited, FundsWithdrawn, OpenAccount, Withdraw,
};
