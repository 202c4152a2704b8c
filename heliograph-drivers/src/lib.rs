//! Relay driver implementations
//!
//! Concrete building blocks between the abstract traits in
//! heliograph-hal and the logic in heliograph-core:
//!
//! - Carrier gate (burst shaping over any carrier output)
//! - The relay itself (line sampling glued to gate updates)

#![no_std]
#![deny(unsafe_code)]

// Host test builds link std for the proptest runner.
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod gate;
pub mod relay;
