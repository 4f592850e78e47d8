//! # Digit Extraction Module
//!
//! Pure functions computing individual digits of π.
//!
//! - [`decimal`]: decimal digits by the spigot method, used by the coordinator
//! - [`hex`]: hexadecimal digits by the BBP formula, standalone utility
//! - [`arith`]: modular arithmetic and prime enumeration shared by both

pub mod arith;
pub mod decimal;
pub mod hex;

pub use decimal::{compute_digit, BellardExtractor};
pub use hex::pi_hex_digits;
