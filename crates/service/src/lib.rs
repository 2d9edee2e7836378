//! Service layer providing business-oriented operations on top of models.
//! - Owns every accept/reject decision for account and message mutations.
//! - Talks to the store through repository traits so handlers and tests
//!   never depend on a live database.
//! - Provides clear error types and documented interfaces.

pub mod account;
pub mod errors;
pub mod message;
