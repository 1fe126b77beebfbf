//! VNet lookup through the az CLI.
//!
//! Runs `az network vnet show` and translates the wire shape into the
//! internal [`VnetConfig`] model, preserving address-space and subnet
//! order exactly as provisioned.

use super::cli;
use crate::error::{Error, Result};
use crate::models::{Ipv4, Subnet, VnetConfig};
use crate::processing::VnetLookup;
use serde::Deserialize;

/// `az network vnet show --output json` response shape.
#[derive(Deserialize, Debug)]
struct VnetShow {
    name: String,
    #[serde(rename = "addressSpace")]
    address_space: AddressSpaceShow,
    #[serde(default)]
    subnets: Vec<SubnetShow>,
}

#[derive(Deserialize, Debug)]
struct AddressSpaceShow {
    #[serde(rename = "addressPrefixes")]
    address_prefixes: Vec<String>,
}

/// Subnet entry; newer az versions report `addressPrefixes` (plural) for
/// subnets with more than one prefix, older ones only `addressPrefix`.
#[derive(Deserialize, Debug)]
struct SubnetShow {
    name: String,
    #[serde(rename = "addressPrefix")]
    address_prefix: Option<String>,
    #[serde(rename = "addressPrefixes", default)]
    address_prefixes: Vec<String>,
}

impl SubnetShow {
    fn first_prefix(&self) -> Option<&str> {
        self.address_prefix
            .as_deref()
            .or_else(|| self.address_prefixes.first().map(String::as_str))
    }
}

/// VNet lookup backed by the az CLI.
pub struct AzCliVnetLookup;

impl VnetLookup for AzCliVnetLookup {
    fn get_vnet(&self, resource_group: &str, vnet_name: &str) -> Result<Option<VnetConfig>> {
        let cmd = format!(
            "az network vnet show --resource-group '{resource_group}' \
             --name '{vnet_name}' --output json"
        );
        match cli::run(&cmd) {
            Ok(json) => Ok(Some(parse_vnet_show(&json)?)),
            Err(Error::AzCli(stderr)) if is_not_found(&stderr) => {
                log::debug!("vnet '{vnet_name}' not found: {}", stderr.trim());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Classify az stderr as "the resource does not exist".
fn is_not_found(stderr: &str) -> bool {
    stderr.contains("ResourceNotFound")
        || stderr.contains("ResourceGroupNotFound")
        || stderr.contains("could not be found")
}

/// Deserialize the wire shape and translate it into the internal model.
fn parse_vnet_show(json: &str) -> Result<VnetConfig> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let show: VnetShow = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        Error::AzCli(format!(
            "error parsing vnet show output: path={} error={}",
            e.path(),
            e
        ))
    })?;

    let vnet_cidr = show
        .address_space
        .address_prefixes
        .iter()
        .map(|p| Ipv4::new(p))
        .collect::<Result<Vec<Ipv4>>>()?;

    let mut subnets = Vec::with_capacity(show.subnets.len());
    for subnet in &show.subnets {
        match subnet.first_prefix() {
            Some(prefix) => subnets.push(Subnet::new(&subnet.name, Ipv4::new(prefix)?)),
            None => {
                // No range means nothing to collide with; leave it to the
                // control plane.
                log::warn!(
                    "subnet '{}' in vnet '{}' has no address prefix, skipping",
                    subnet.name,
                    show.name
                );
            }
        }
    }

    Ok(VnetConfig::new(&show.name, vnet_cidr, subnets))
}
