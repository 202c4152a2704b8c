//! Board-agnostic relay logic for the infrared repeater firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Receive line decoding (active-low and active-high conventions)
//! - Carrier timing derivation (tick constants from clock and target)
//! - Power planning (sleep mode choice, peripheral shed list)
//! - Relay configuration validation

#![no_std]
#![deny(unsafe_code)]

// Host test builds link std for the proptest runner.
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod power;
pub mod signal;
pub mod timing;
