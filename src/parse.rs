#![deny(unsafe_code)]
#![deny(warnings)]
//! Text format for the configuration record
//!
//! A small `key=value` format, one assignment per line, for embedding the
//! configuration in a build artifact or a settings partition. `#` starts a
//! comment, blank lines are ignored, the last assignment of a key wins.
//!
//! ```text
//! hostname=myesp8266
//! port=8080
//! sta_ssid=your-ssid
//! sta_password=your-password
//! use_static_address=false
//! ```
//!
//! The address keys `device`, `gateway`, `subnet`, and `dns` are required
//! when `use_static_address=true` and ignored otherwise.
//!
//! Everything after the first `=` is the value. String fields keep it
//! verbatim, whitespace included; port, flag, and address fields tolerate
//! surrounding whitespace.

use core::fmt::Write;
use core::net::Ipv4Addr;
use core::str::FromStr;

use heapless::String;

use crate::config::{
    AddressConfig, NetworkConfig, StaticAddress, MAX_HOSTNAME_LEN, MAX_PASSWORD_LEN, MAX_SSID_LEN,
};
use crate::error::ConfigError;

/// Upper bound on rendered output with every value at maximum length
pub const TEXT_CAPACITY: usize = 352;

/// Parse an IPv4 address field
pub(crate) fn ipv4(s: &str) -> Result<Ipv4Addr, ConfigError> {
    Ipv4Addr::from_str(s.trim()).map_err(|_| ConfigError::InvalidAddress)
}

/// Parse a port field, rejecting 0
pub(crate) fn port(s: &str) -> Result<u16, ConfigError> {
    match s.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort),
        Ok(p) => Ok(p),
    }
}

/// Parse a boolean flag field
pub(crate) fn flag(s: &str) -> Result<bool, ConfigError> {
    match s.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidFlag),
    }
}

/// Parse a configuration record from its text form
///
/// The `hostname`, `port`, `sta_ssid`, and `sta_password` keys are
/// required. No semantic validation happens here; run
/// [`crate::validate::validate`] on the result.
pub fn parse(text: &str) -> Result<NetworkConfig, ConfigError> {
    let mut hostname: Option<String<MAX_HOSTNAME_LEN>> = None;
    let mut listen_port: Option<u16> = None;
    let mut sta_ssid: Option<String<MAX_SSID_LEN>> = None;
    let mut sta_password: Option<String<MAX_PASSWORD_LEN>> = None;
    let mut use_static = false;
    let mut device: Option<Ipv4Addr> = None;
    let mut gateway: Option<Ipv4Addr> = None;
    let mut subnet: Option<Ipv4Addr> = None;
    let mut dns: Option<Ipv4Addr> = None;

    for line in text.lines() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // String values are taken verbatim after the `=`. Trimming them
        // would not survive render-then-parse for credentials that carry
        // edge whitespace, which 802.11 permits.
        let (key, value) = line.split_once('=').ok_or(ConfigError::MalformedLine)?;
        let key = key.trim_end();
        match key {
            "hostname" => {
                hostname = Some(String::try_from(value).map_err(|_| ConfigError::ValueTooLong)?)
            }
            "port" => listen_port = Some(port(value)?),
            "sta_ssid" => {
                sta_ssid = Some(String::try_from(value).map_err(|_| ConfigError::ValueTooLong)?)
            }
            "sta_password" => {
                sta_password = Some(String::try_from(value).map_err(|_| ConfigError::ValueTooLong)?)
            }
            "use_static_address" => use_static = flag(value)?,
            "device" => device = Some(ipv4(value)?),
            "gateway" => gateway = Some(ipv4(value)?),
            "subnet" => subnet = Some(ipv4(value)?),
            "dns" => dns = Some(ipv4(value)?),
            _ => return Err(ConfigError::UnknownKey),
        }
    }

    // Address keys parsed while the flag is off are dropped here, so a
    // disabled static block has no observable effect.
    let address = if use_static {
        AddressConfig::Static(StaticAddress {
            device: device.ok_or(ConfigError::MissingField)?,
            gateway: gateway.ok_or(ConfigError::MissingField)?,
            subnet: subnet.ok_or(ConfigError::MissingField)?,
            dns: dns.ok_or(ConfigError::MissingField)?,
        })
    } else {
        AddressConfig::Dhcp
    };

    Ok(NetworkConfig {
        hostname: hostname.ok_or(ConfigError::MissingField)?,
        port: listen_port.ok_or(ConfigError::MissingField)?,
        sta_ssid: sta_ssid.ok_or(ConfigError::MissingField)?,
        sta_password: sta_password.ok_or(ConfigError::MissingField)?,
        address,
    })
}

/// Render a configuration record to its text form
///
/// `parse(&render(cfg)?)` yields a record equal to `cfg`.
pub fn render(cfg: &NetworkConfig) -> Result<String<TEXT_CAPACITY>, ConfigError> {
    let mut out: String<TEXT_CAPACITY> = String::new();
    let use_static = matches!(cfg.address, AddressConfig::Static(_));
    write!(
        out,
        "hostname={}\nport={}\nsta_ssid={}\nsta_password={}\nuse_static_address={}\n",
        cfg.hostname, cfg.port, cfg.sta_ssid, cfg.sta_password, use_static
    )
    .map_err(|_| ConfigError::BufferTooSmall)?;
    if let AddressConfig::Static(block) = &cfg.address {
        write!(
            out,
            "device={}\ngateway={}\nsubnet={}\ndns={}\n",
            block.device, block.gateway, block.subnet, block.dns
        )
        .map_err(|_| ConfigError::BufferTooSmall)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dhcp_record() {
        let cfg = parse(
            "# device settings\n\
             hostname=myesp8266\n\
             port=8080\n\
             \n\
             sta_ssid=your-ssid\n\
             sta_password=your-password\n\
             use_static_address=false\n",
        )
        .unwrap();
        assert_eq!(cfg, NetworkConfig::default());
    }

    #[test]
    fn parses_static_record() {
        let cfg = parse(
            "hostname=myesp8266\n\
             port=8080\n\
             sta_ssid=your-ssid\n\
             sta_password=your-password\n\
             use_static_address=true\n\
             device=192.168.0.100\n\
             gateway=192.168.0.1\n\
             subnet=255.255.255.0\n\
             dns=192.168.0.1\n",
        )
        .unwrap();
        assert_eq!(cfg.address, AddressConfig::Static(StaticAddress::default()));
    }

    #[test]
    fn address_keys_ignored_when_flag_off() {
        let cfg = parse(
            "hostname=myesp8266\n\
             port=8080\n\
             sta_ssid=your-ssid\n\
             sta_password=your-password\n\
             use_static_address=false\n\
             device=10.0.0.2\n\
             gateway=10.0.0.1\n\
             subnet=255.255.255.0\n\
             dns=10.0.0.1\n",
        )
        .unwrap();
        assert_eq!(cfg.address, AddressConfig::Dhcp);
    }

    #[test]
    fn last_assignment_wins() {
        let cfg = parse(
            "hostname=old-name\n\
             hostname=new-name\n\
             port=8080\n\
             sta_ssid=your-ssid\n\
             sta_password=your-password\n",
        )
        .unwrap();
        assert_eq!(cfg.hostname.as_str(), "new-name");
    }

    #[test]
    fn missing_required_key_is_rejected() {
        let err = parse("hostname=myesp8266\nport=8080\nsta_ssid=your-ssid\n").unwrap_err();
        assert_eq!(err, ConfigError::MissingField);
    }

    #[test]
    fn missing_static_key_is_rejected() {
        let err = parse(
            "hostname=myesp8266\n\
             port=8080\n\
             sta_ssid=your-ssid\n\
             sta_password=your-password\n\
             use_static_address=true\n\
             device=192.168.0.100\n",
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingField);
    }

    #[test]
    fn rejects_bad_values() {
        let base = "hostname=h\nsta_ssid=s\nsta_password=p\n";
        let with = |line: &str| {
            let mut text = std::string::String::from(base);
            text.push_str(line);
            text.push('\n');
            parse(&text).unwrap_err()
        };
        assert_eq!(with("port=0"), ConfigError::InvalidPort);
        assert_eq!(with("port=70000"), ConfigError::InvalidPort);
        assert_eq!(with("port=http"), ConfigError::InvalidPort);
        assert_eq!(with("port=8080\nuse_static_address=maybe"), ConfigError::InvalidFlag);
        assert_eq!(
            with("port=8080\nuse_static_address=true\ndevice=192.168.0"),
            ConfigError::InvalidAddress
        );
        assert_eq!(with("port=8080\nlisten=yes"), ConfigError::UnknownKey);
        assert_eq!(with("port=8080\nno equals sign"), ConfigError::MalformedLine);
    }

    #[test]
    fn rejects_oversized_ssid() {
        let err = parse(
            "hostname=h\n\
             port=8080\n\
             sta_ssid=an-ssid-well-past-the-thirty-two-byte-limit\n\
             sta_password=p\n",
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::ValueTooLong);
    }

    #[test]
    fn string_values_keep_edge_whitespace() {
        let cfg = parse(
            "hostname=h\n \
             port = 8080\n\
             sta_ssid=cafe wifi\n\
             sta_password= pass word \n",
        )
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.sta_ssid.as_str(), "cafe wifi");
        assert_eq!(cfg.sta_password.as_str(), " pass word ");
    }

    #[test]
    fn whitespace_padded_credentials_round_trip() {
        let mut cfg = NetworkConfig::default();
        cfg.sta_ssid = String::try_from("cafe wifi").unwrap();
        cfg.sta_password = String::try_from(" pass word ").unwrap();
        let text = render(&cfg).unwrap();
        assert_eq!(parse(&text).unwrap(), cfg);
    }

    #[test]
    fn dhcp_record_round_trips() {
        let cfg = NetworkConfig::default();
        let text = render(&cfg).unwrap();
        assert_eq!(parse(&text).unwrap(), cfg);
    }

    #[test]
    fn static_record_round_trips() {
        let mut cfg = NetworkConfig::default();
        cfg.address = AddressConfig::Static(StaticAddress::default());
        let text = render(&cfg).unwrap();
        assert_eq!(parse(&text).unwrap(), cfg);
    }
}
