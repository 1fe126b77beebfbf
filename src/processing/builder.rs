//! VNet configuration builder.
//!
//! Top-level entry point of the allocation pipeline: fetch the current VNet
//! snapshot through a [`VnetLookup`] collaborator, fall back to a default
//! configuration when the VNet does not exist yet, and otherwise delegate
//! to the allocator. Each call is a fresh computation over a fresh
//! snapshot; nothing is cached or mutated in place here.

use super::allocate::allocate;
use crate::config::{Defaults, GATEWAY_SUBNET_NAME};
use crate::error::{Error, Result};
use crate::models::{Ipv4, Subnet, VnetConfig};

/// Source of VNet snapshots, e.g. the az CLI or a test stub.
pub trait VnetLookup {
    /// Fetch the named VNet, or `None` if it does not exist.
    fn get_vnet(&self, resource_group: &str, vnet_name: &str) -> Result<Option<VnetConfig>>;
}

/// Build the create-or-update configuration that gives `subnet_name` a
/// home in `vnet_name`.
///
/// `vnet_name` and `subnet_name` fall back to the configured defaults when
/// unset. The returned configuration preserves every pre-existing subnet
/// verbatim and appends at most one new entry.
pub fn build_vnet_config(
    lookup: &dyn VnetLookup,
    defaults: &Defaults,
    resource_group: &str,
    vnet_name: Option<&str>,
    subnet_name: Option<&str>,
) -> Result<VnetConfig> {
    let vnet_name = vnet_name.unwrap_or(&defaults.vnet_name);
    let subnet_name = subnet_name.unwrap_or(&defaults.subnet_name);

    // The reserved-name rule holds on every path, including the
    // default-VNet one that never reaches the allocator.
    if subnet_name == GATEWAY_SUBNET_NAME {
        return Err(Error::ReservedSubnetName {
            name: subnet_name.to_string(),
        });
    }

    match lookup.get_vnet(resource_group, vnet_name)? {
        Some(config) => {
            log::info!("found existing vnet: {config}");
            allocate(subnet_name, config)
        }
        None => {
            log::info!(
                "vnet '{vnet_name}' not found in resource group '{resource_group}', \
                 using default configuration"
            );
            default_vnet_config(defaults, vnet_name, subnet_name)
        }
    }
}

/// Configuration for a VNet that does not exist yet: the default address
/// space with the requested subnet pre-placed at its base. The space is
/// empty by definition, so no allocator call is needed.
fn default_vnet_config(
    defaults: &Defaults,
    vnet_name: &str,
    subnet_name: &str,
) -> Result<VnetConfig> {
    let address_space = Ipv4::new(&defaults.vnet_address_space)?;
    let subnet_prefix = Ipv4::new(&defaults.subnet_prefix)?;
    Ok(VnetConfig::new(
        vnet_name,
        vec![address_space],
        vec![Subnet::new(subnet_name, subnet_prefix)],
    ))
}
