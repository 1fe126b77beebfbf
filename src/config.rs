//! Shared defaults for VNet provisioning.

/// Reserved subnet name, only valid for virtual network gateways.
/// Never an ordinary allocation target or candidate name.
pub const GATEWAY_SUBNET_NAME: &str = "GatewaySubnet";

pub const DEFAULT_VNET_NAME: &str = "default-vnet";
pub const DEFAULT_SUBNET_NAME: &str = "default-subnet";

/// Address space used when the VNet does not exist yet.
pub const DEFAULT_VNET_ADDRESS_SPACE: &str = "10.0.0.0/16";
/// First subnet carved from a freshly synthesized VNet.
pub const DEFAULT_SUBNET_PREFIX: &str = "10.0.0.0/24";

/// Default identifiers and prefixes, passed explicitly into the builder.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub vnet_name: String,
    pub subnet_name: String,
    pub vnet_address_space: String,
    pub subnet_prefix: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            vnet_name: DEFAULT_VNET_NAME.to_string(),
            subnet_name: DEFAULT_SUBNET_NAME.to_string(),
            vnet_address_space: DEFAULT_VNET_ADDRESS_SPACE.to_string(),
            subnet_prefix: DEFAULT_SUBNET_PREFIX.to_string(),
        }
    }
}
