// cargo watch -x 'fmt' -x 'test'

pub mod azure;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Error, Result};

use azure::{AzCliVnetLookup, CachedVnetLookup};
use config::Defaults;
use models::VnetConfig;
use processing::build_vnet_config;

/// Plan a subnet allocation against the live control plane (through the
/// snapshot cache): fetch the VNet, find or place the subnet, and return
/// the configuration ready to submit.
pub fn plan_subnet_allocation(
    resource_group: &str,
    vnet_name: Option<&str>,
    subnet_name: Option<&str>,
    cache_file: Option<&str>,
) -> Result<VnetConfig> {
    let lookup = CachedVnetLookup::new(AzCliVnetLookup, cache_file);
    build_vnet_config(
        &lookup,
        &Defaults::default(),
        resource_group,
        vnet_name,
        subnet_name,
    )
}
