//! RP2040-specific HAL for the infrared relay firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `heliograph-hal` traits on top of embassy-rp:
//!
//! - Receive line input with async edge and level waits (IO bank interrupt)
//! - Free-running PWM slice as the gated carrier
//! - Sleep selection and sleep-time clock gating

#![no_std]

pub mod carrier;
pub mod input;
pub mod power;

pub use carrier::PwmCarrier;
pub use input::EdgeInput;
pub use power::CortexPower;
