//! Firmware tasks

pub mod relay;

pub use relay::relay_task;
