#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(warnings)]
//! Network bootstrap configuration for IoT firmware
//!
//! This crate holds the configuration record that networking bootstrap code
//! reads once at startup: the device hostname, the service listen port, the
//! station SSID/password, and the IPv4 addressing mode (DHCP or a static
//! address block).
//!
//! - **`config`**: the `NetworkConfig` record, defaults, and build-time
//!   environment overrides
//! - **`error`**: simple error enum for loading and validation
//! - **`parse`**: human-editable `key=value` text format (parse + render)
//! - **`validate`**: fail-fast startup checks
//! - **`stack`**: conversion to `embassy_net::Config` (feature `embassy-net`)
//!
//! The record is immutable after loading: construct it, validate it, hand it
//! to the network task, and never touch it again.

pub mod config;
pub mod error;
pub mod parse;
pub mod validate;

#[cfg(feature = "embassy-net")]
pub mod stack;

// Re-export commonly used types
pub use config::{AddressConfig, NetworkConfig, StaticAddress};
pub use error::ConfigError;
