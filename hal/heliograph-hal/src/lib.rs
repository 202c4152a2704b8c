//! Heliograph Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs (RP2040 today, other boards as they appear).
//! This keeps the relay logic independent of any vendor stack and lets
//! the host test suite stand in bench doubles for real silicon.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Application (heliograph-firmware, etc.) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │ heliograph-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ heliograph-   │       │  host tests   │
//! │  hal-rp2040   │       │ (mock impls)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input sampling
//! - [`carrier::CarrierOutput`] - Free-running carrier behind a gate
//! - [`power::PowerControl`] - Sleep mode selection and peripheral shedding

#![no_std]
#![deny(unsafe_code)]

pub mod carrier;
pub mod gpio;
pub mod power;

// Re-export key traits at crate root for convenience
pub use carrier::CarrierOutput;
pub use gpio::InputPin;
pub use power::{Peripheral, PowerControl, SleepMode};
