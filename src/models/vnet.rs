//! Virtual network configuration model.

use super::{Ipv4, Subnet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A virtual network as a create-or-update unit: the declared address
/// spaces plus every subnet currently carved from them.
///
/// `vnet_cidr` keeps the order the address-space prefixes were declared in;
/// the allocator tries them first to last. `subnets` preserves discovery
/// order and is append-only — pre-existing entries are never reordered or
/// rewritten.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VnetConfig {
    /// Name of the virtual network.
    pub vnet_name: String,
    /// Address-space prefixes of the virtual network, in declared order.
    pub vnet_cidr: Vec<Ipv4>,
    /// Subnets within this VNet, in discovery order.
    pub subnets: Vec<Subnet>,
}

impl VnetConfig {
    pub fn new(vnet_name: &str, vnet_cidr: Vec<Ipv4>, subnets: Vec<Subnet>) -> VnetConfig {
        VnetConfig {
            vnet_name: vnet_name.to_string(),
            vnet_cidr,
            subnets,
        }
    }

    /// Find a subnet by name.
    pub fn subnet(&self, subnet_name: &str) -> Option<&Subnet> {
        self.subnets.iter().find(|s| s.subnet_name == subnet_name)
    }

    /// CIDR blocks of the subnets that fall inside one address-space prefix.
    pub fn subnet_cidrs_within(&self, prefix: &Ipv4) -> Vec<Ipv4> {
        self.subnets
            .iter()
            .map(|s| s.subnet_cidr)
            .filter(|cidr| cidr.is_within(prefix))
            .collect()
    }
}

impl fmt::Display for VnetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cidrs: Vec<String> = self.vnet_cidr.iter().map(|c| c.to_string()).collect();
        write!(
            f,
            "{} [{}] ({} subnets)",
            self.vnet_name,
            cidrs.join(", "),
            self.subnets.len()
        )
    }
}
