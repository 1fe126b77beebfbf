//! Subnet allocation across a VNet's address spaces.

use super::free_space::find_free_block;
use crate::config::GATEWAY_SUBNET_NAME;
use crate::error::{Error, Result};
use crate::models::{Subnet, VnetConfig};

/// Allocate a block for `subnet_name` and append it to the configuration.
///
/// Re-requesting a name that already exists is not an error: the
/// configuration comes back unchanged. The address-space prefixes are tried
/// in declared order and the first one with a free block wins.
pub fn allocate(subnet_name: &str, mut config: VnetConfig) -> Result<VnetConfig> {
    if subnet_name == GATEWAY_SUBNET_NAME {
        return Err(Error::ReservedSubnetName {
            name: subnet_name.to_string(),
        });
    }

    if let Some(existing) = config.subnet(subnet_name) {
        log::info!(
            "subnet {existing} already exists in vnet '{}', nothing to allocate",
            config.vnet_name
        );
        return Ok(config);
    }

    for prefix in config.vnet_cidr.clone() {
        let used = config.subnet_cidrs_within(&prefix);
        log::debug!(
            "trying address space {prefix} of vnet '{}' ({} subnets in use)",
            config.vnet_name,
            used.len()
        );
        if let Some(block) = find_free_block(prefix, &used) {
            log::info!(
                "allocated {block} for subnet '{subnet_name}' in vnet '{}'",
                config.vnet_name
            );
            config.subnets.push(Subnet::new(subnet_name, block));
            return Ok(config);
        }
    }

    Err(Error::NoAddressSpaceAvailable {
        subnet_name: subnet_name.to_string(),
        vnet_name: config.vnet_name,
    })
}
