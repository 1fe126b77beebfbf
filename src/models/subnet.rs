//! Subnet descriptor model.

use super::Ipv4;
use serde::{Deserialize, Serialize};

/// A named subnet carved from one of a VNet's address-space prefixes.
///
/// Subnets are unique by name within a VNet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    /// Name of the subnet.
    pub subnet_name: String,
    /// CIDR block of the subnet.
    pub subnet_cidr: Ipv4,
}

impl Subnet {
    pub fn new(subnet_name: &str, subnet_cidr: Ipv4) -> Subnet {
        Subnet {
            subnet_name: subnet_name.to_string(),
            subnet_cidr,
        }
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.subnet_name, self.subnet_cidr)
    }
}
