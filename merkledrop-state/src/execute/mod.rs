//! Distribution operations.
//!
//! Each operation is an `execute_*` function taking the owned state, the
//! token-ledger collaborator, the execution context, and the explicit
//! calling identity where relevant. Every operation is all-or-nothing:
//! all guards run before any mutation, and a downstream failure rolls back
//! every mutation the call made.

mod activate;
mod claim;

pub use activate::execute_activate;
pub use claim::execute_claim;
