#![deny(unsafe_code)]
#![deny(warnings)]
//! Configuration error types

/// Errors raised while loading or validating the network configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Hostname is empty
    EmptyHostname,
    /// Hostname contains characters outside the mDNS label rules
    InvalidHostname,
    /// Port is 0 or not a valid integer
    InvalidPort,
    /// Station SSID is empty
    EmptySsid,
    /// Station password is empty
    EmptyPassword,
    /// A string value exceeds its bounded capacity
    ValueTooLong,
    /// An address field is not a well-formed IPv4 address
    InvalidAddress,
    /// The subnet mask is not a contiguous run of leading ones
    InvalidSubnetMask,
    /// The device address is outside the gateway's network
    DeviceOutsideSubnet,
    /// A boolean flag is neither `true` nor `false`
    InvalidFlag,
    /// A line in the text format is not `key=value`
    MalformedLine,
    /// A key in the text format is not recognized
    UnknownKey,
    /// A required key is missing from the text format
    MissingField,
    /// Rendered output does not fit the bounded text buffer
    BufferTooSmall,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyHostname => write!(f, "hostname is empty"),
            Self::InvalidHostname => write!(f, "hostname is not a valid mDNS label"),
            Self::InvalidPort => write!(f, "port must be in 1-65535"),
            Self::EmptySsid => write!(f, "station SSID is empty"),
            Self::EmptyPassword => write!(f, "station password is empty"),
            Self::ValueTooLong => write!(f, "value exceeds its capacity"),
            Self::InvalidAddress => write!(f, "malformed IPv4 address"),
            Self::InvalidSubnetMask => write!(f, "non-contiguous subnet mask"),
            Self::DeviceOutsideSubnet => write!(f, "device address outside subnet"),
            Self::InvalidFlag => write!(f, "flag must be true or false"),
            Self::MalformedLine => write!(f, "line is not key=value"),
            Self::UnknownKey => write!(f, "unknown configuration key"),
            Self::MissingField => write!(f, "required configuration key missing"),
            Self::BufferTooSmall => write!(f, "render buffer too small"),
        }
    }
}

// Implement core::error::Error for no_std compatibility
impl core::error::Error for ConfigError {}
