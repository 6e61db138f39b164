//! Utilities for testing symbolic object implementations.
//!
//! Everything here is built on the public factories and [`VALID_NAME_CHARS`] of
//! `spop-symbolic`; nothing reaches into the sealed implementations.
//!
//! [`VALID_NAME_CHARS`]: spop_symbolic::VALID_NAME_CHARS

mod contract;
mod sampling;
mod strategies;

pub use contract::*;
pub use sampling::*;
pub use strategies::*;
