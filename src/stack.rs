#![deny(unsafe_code)]
#![deny(warnings)]
//! embassy-net configuration seam
//!
//! Bootstrap code hands the result of [`effective`] straight to
//! `embassy_net::new` alongside the driver and stack resources. The record's
//! hostname and port are consumed elsewhere (mDNS advertisement and the
//! listen socket) and play no part in the IPv4 stack configuration.

use embassy_net::{Config, Ipv4Cidr, StaticConfigV4};
use heapless::Vec;

use crate::config::{AddressConfig, NetworkConfig};
use crate::error::ConfigError;
use crate::validate;

/// Build the effective `embassy_net::Config` for a configuration record
///
/// DHCP mode consults none of the static address fields. Static mode fails
/// on a non-contiguous subnet mask, which has no CIDR prefix form.
pub fn effective(cfg: &NetworkConfig) -> Result<Config, ConfigError> {
    match &cfg.address {
        AddressConfig::Dhcp => Ok(Config::dhcpv4(Default::default())),
        AddressConfig::Static(block) => {
            let prefix = validate::prefix_len(block.subnet).ok_or(ConfigError::InvalidSubnetMask)?;
            let mut dns_servers = Vec::new();
            dns_servers
                .push(block.dns)
                .map_err(|_| ConfigError::BufferTooSmall)?;
            Ok(Config::ipv4_static(StaticConfigV4 {
                address: Ipv4Cidr::new(block.device, prefix),
                gateway: Some(block.gateway),
                dns_servers,
            }))
        }
    }
}
