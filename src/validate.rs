#![deny(unsafe_code)]
#![deny(warnings)]
//! Fail-fast startup checks
//!
//! The record itself performs no validation; bootstrap code is expected to
//! call [`validate`] once after loading and refuse to bring the network up
//! on error.

use core::net::Ipv4Addr;

use crate::config::{AddressConfig, NetworkConfig, StaticAddress};
use crate::error::ConfigError;

/// Validate a loaded configuration record
///
/// Checks the port range, the mDNS label rules for the hostname, that the
/// station credentials are present, and the static address block if one is
/// configured.
pub fn validate(cfg: &NetworkConfig) -> Result<(), ConfigError> {
    if cfg.hostname.is_empty() {
        return Err(ConfigError::EmptyHostname);
    }
    if !is_valid_hostname(&cfg.hostname) {
        return Err(ConfigError::InvalidHostname);
    }
    if cfg.port == 0 {
        return Err(ConfigError::InvalidPort);
    }
    if cfg.sta_ssid.is_empty() {
        return Err(ConfigError::EmptySsid);
    }
    if cfg.sta_password.is_empty() {
        return Err(ConfigError::EmptyPassword);
    }
    if let AddressConfig::Static(block) = &cfg.address {
        validate_static(block)?;
    }
    Ok(())
}

/// Validate a static address block
///
/// The mask must be a contiguous run of leading ones, and the device must
/// lie within the gateway's network under that mask.
pub fn validate_static(block: &StaticAddress) -> Result<(), ConfigError> {
    if prefix_len(block.subnet).is_none() {
        return Err(ConfigError::InvalidSubnetMask);
    }
    let mask = u32::from_be_bytes(block.subnet.octets());
    let device = u32::from_be_bytes(block.device.octets());
    let gateway = u32::from_be_bytes(block.gateway.octets());
    if device & mask != gateway & mask {
        return Err(ConfigError::DeviceOutsideSubnet);
    }
    Ok(())
}

/// Convert a subnet mask to a CIDR prefix length
///
/// Returns `None` for non-contiguous masks such as `255.0.255.0`.
pub fn prefix_len(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from_be_bytes(mask.octets());
    if bits.leading_ones() + bits.trailing_zeros() == 32 {
        Some(bits.leading_ones() as u8)
    } else {
        None
    }
}

// Hostname rules follow RFC 1123 single-label form: ASCII alphanumerics and
// hyphens, no leading or trailing hyphen. Emptiness is reported separately.
fn is_valid_hostname(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.first() == Some(&b'-') || bytes.last() == Some(&b'-') {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}
