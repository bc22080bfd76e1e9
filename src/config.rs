#![deny(unsafe_code)]
#![deny(warnings)]
//! Network configuration record
//!
//! This module defines the immutable record that network bootstrap code
//! reads once at startup. The static address block is an ordinary tagged
//! variant selected at load time rather than a compile-time switch.
//!
//! # Usage
//!
//! ```no_run
//! use net_bootstrap_config::{validate, NetworkConfig};
//!
//! let cfg = NetworkConfig::from_build_env()?;
//! validate::validate(&cfg)?;
//! # Ok::<(), net_bootstrap_config::ConfigError>(())
//! ```
//!
//! Build-time overrides (all optional): `NET_HOSTNAME`, `NET_PORT`,
//! `NET_SSID`, `NET_PASSWORD`, `NET_STATIC`, `NET_IP`, `NET_GATEWAY`,
//! `NET_NETMASK`, `NET_DNS`.

use core::net::Ipv4Addr;

use heapless::String;

use crate::error::ConfigError;
use crate::parse;

/// Maximum hostname length (single DNS label)
pub const MAX_HOSTNAME_LEN: usize = 63;

/// Maximum SSID length (IEEE 802.11 standard)
pub const MAX_SSID_LEN: usize = 32;

/// Maximum WPA2 passphrase length
pub const MAX_PASSWORD_LEN: usize = 63;

/// Default hostname advertised on the local network
pub const DEFAULT_HOSTNAME: &str = "myesp8266";

/// Default service listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Placeholder station SSID, expected to be overridden per deployment
pub const DEFAULT_STA_SSID: &str = "your-ssid";

/// Placeholder station password, expected to be overridden per deployment
pub const DEFAULT_STA_PASSWORD: &str = "your-password";

/// Static IPv4 address block, used when DHCP is bypassed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StaticAddress {
    /// The device's fixed address
    pub device: Ipv4Addr,
    /// Default gateway
    pub gateway: Ipv4Addr,
    /// Subnet mask
    pub subnet: Ipv4Addr,
    /// DNS server
    pub dns: Ipv4Addr,
}

impl Default for StaticAddress {
    fn default() -> Self {
        Self {
            device: Ipv4Addr::new(192, 168, 0, 100),
            gateway: Ipv4Addr::new(192, 168, 0, 1),
            subnet: Ipv4Addr::new(255, 255, 255, 0),
            dns: Ipv4Addr::new(192, 168, 0, 1),
        }
    }
}

/// How the device obtains its IPv4 address
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressConfig {
    /// Lease an address from the network's DHCP server
    #[default]
    Dhcp,
    /// Use a fixed address block, bypassing DHCP
    Static(StaticAddress),
}

/// Network bootstrap configuration
///
/// Immutable after loading: construct, validate, then hand a shared
/// reference to the network task.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NetworkConfig {
    /// mDNS/network hostname
    pub hostname: String<MAX_HOSTNAME_LEN>,
    /// Service listen port (1-65535)
    pub port: u16,
    /// Wi-Fi network to join in station mode
    pub sta_ssid: String<MAX_SSID_LEN>,
    /// Wi-Fi password (WPA2)
    pub sta_password: String<MAX_PASSWORD_LEN>,
    /// IPv4 addressing mode
    pub address: AddressConfig,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        // The default literals fit their bounded strings by inspection:
        // 9, 9, and 13 bytes against capacities of 63, 32, and 63.
        Self {
            hostname: String::try_from(DEFAULT_HOSTNAME).expect("default hostname fits"),
            port: DEFAULT_PORT,
            sta_ssid: String::try_from(DEFAULT_STA_SSID).expect("default SSID fits"),
            sta_password: String::try_from(DEFAULT_STA_PASSWORD).expect("default password fits"),
            address: AddressConfig::Dhcp,
        }
    }
}

impl NetworkConfig {
    /// Load the configuration from build-time environment variables
    ///
    /// Unset variables fall back to the firmware defaults. Malformed values
    /// are an error rather than a silent fallback, so a typo in a build
    /// script fails at startup instead of joining the wrong network.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(v) = option_env!("NET_HOSTNAME") {
            cfg.hostname = String::try_from(v).map_err(|_| ConfigError::ValueTooLong)?;
        }
        if let Some(v) = option_env!("NET_PORT") {
            cfg.port = parse::port(v)?;
        }
        if let Some(v) = option_env!("NET_SSID") {
            cfg.sta_ssid = String::try_from(v).map_err(|_| ConfigError::ValueTooLong)?;
        }
        if let Some(v) = option_env!("NET_PASSWORD") {
            cfg.sta_password = String::try_from(v).map_err(|_| ConfigError::ValueTooLong)?;
        }

        let use_static = match option_env!("NET_STATIC") {
            Some(v) => parse::flag(v)?,
            None => false,
        };
        if use_static {
            let mut block = StaticAddress::default();
            if let Some(v) = option_env!("NET_IP") {
                block.device = parse::ipv4(v)?;
            }
            if let Some(v) = option_env!("NET_GATEWAY") {
                block.gateway = parse::ipv4(v)?;
            }
            if let Some(v) = option_env!("NET_NETMASK") {
                block.subnet = parse::ipv4(v)?;
            }
            if let Some(v) = option_env!("NET_DNS") {
                block.dns = parse::ipv4(v)?;
            }
            cfg.address = AddressConfig::Static(block);
        }

        Ok(cfg)
    }

    /// Check if station credentials are present
    ///
    /// Returns false if the SSID is empty (skip Wi-Fi initialization).
    pub fn is_configured(&self) -> bool {
        !self.sta_ssid.is_empty()
    }

    /// Log the configuration at startup
    ///
    /// The station password is deliberately not logged.
    #[cfg(feature = "defmt")]
    pub fn log(&self) {
        defmt::info!(
            "hostname: {} port: {}",
            self.hostname.as_str(),
            self.port
        );
        defmt::info!("station SSID: {}", self.sta_ssid.as_str());
        match &self.address {
            AddressConfig::Dhcp => defmt::info!("addressing: DHCP"),
            AddressConfig::Static(block) => {
                let ip = block.device.octets();
                let mask = block.subnet.octets();
                let gw = block.gateway.octets();
                let dns = block.dns.octets();
                defmt::info!(
                    "addressing: static {}.{}.{}.{} mask {}.{}.{}.{} gateway {}.{}.{}.{} dns {}.{}.{}.{}",
                    ip[0],
                    ip[1],
                    ip[2],
                    ip[3],
                    mask[0],
                    mask[1],
                    mask[2],
                    mask[3],
                    gw[0],
                    gw[1],
                    gw[2],
                    gw[3],
                    dns[0],
                    dns[1],
                    dns[2],
                    dns[3]
                );
            }
        }
    }
}
