//! Azure wire-shape payload for the create-or-update call.
//!
//! The submission itself happens elsewhere; this module only produces the
//! request body the network control plane expects.

use crate::error::{Error, Result};
use crate::models::VnetConfig;
use serde::Serialize;

#[derive(Serialize, Debug)]
struct VnetPayload<'a> {
    name: &'a str,
    #[serde(rename = "addressSpace")]
    address_space: AddressSpacePayload,
    subnets: Vec<SubnetPayload<'a>>,
}

#[derive(Serialize, Debug)]
struct AddressSpacePayload {
    #[serde(rename = "addressPrefixes")]
    address_prefixes: Vec<String>,
}

#[derive(Serialize, Debug)]
struct SubnetPayload<'a> {
    name: &'a str,
    #[serde(rename = "addressPrefix")]
    address_prefix: String,
}

/// Render the configuration as pretty-printed create-or-update JSON.
pub fn to_payload_json(config: &VnetConfig) -> Result<String> {
    let payload = VnetPayload {
        name: &config.vnet_name,
        address_space: AddressSpacePayload {
            address_prefixes: config.vnet_cidr.iter().map(|c| c.to_string()).collect(),
        },
        subnets: config
            .subnets
            .iter()
            .map(|s| SubnetPayload {
                name: &s.subnet_name,
                address_prefix: s.subnet_cidr.to_string(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&payload)
        .map_err(|e| Error::Payload(format!("error serializing: {e}")))
}
