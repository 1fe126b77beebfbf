//! Snapshot cache for VNet lookups.
//!
//! Read-through decorator over any [`VnetLookup`]: a hit skips the az round
//! trip, a miss fetches and writes the snapshot JSON. With an explicit file
//! this doubles as the fixture loader for offline tests. Not-found results
//! are never cached, so a freshly created VNet is picked up on retry.

use crate::error::{Error, Result};
use crate::models::VnetConfig;
use crate::processing::VnetLookup;
use std::path::Path;

pub struct CachedVnetLookup<L> {
    inner: L,
    cache_file: Option<String>,
}

impl<L> CachedVnetLookup<L> {
    pub fn new(inner: L, cache_file: Option<&str>) -> CachedVnetLookup<L> {
        CachedVnetLookup {
            inner,
            cache_file: cache_file.map(str::to_string),
        }
    }

    /// Explicit cache file, or a dated per-VNet default name.
    fn cache_file_name(&self, vnet_name: &str) -> Result<String> {
        match &self.cache_file {
            Some(file) => {
                if !Path::new(file).exists() {
                    return Err(Error::Cache(format!("cache file does not exist: {file}")));
                }
                log::info!("Using provided cache file: {file}");
                Ok(file.clone())
            }
            None => {
                let now = chrono::Utc::now().with_timezone(&chrono_tz::Pacific::Auckland);
                Ok(format!(
                    "vnet_cache_{vnet_name}_{}.json",
                    now.format("%Y-%m-%d")
                ))
            }
        }
    }
}

impl<L: VnetLookup> VnetLookup for CachedVnetLookup<L> {
    fn get_vnet(&self, resource_group: &str, vnet_name: &str) -> Result<Option<VnetConfig>> {
        let cache_file = self.cache_file_name(vnet_name)?;

        match std::fs::read_to_string(&cache_file) {
            Ok(json) => {
                log::info!("Reading vnet snapshot from cache file: {cache_file}");
                let config = serde_json::from_str(&json)
                    .map_err(|e| Error::Cache(format!("error parsing {cache_file}: {e}")))?;
                Ok(Some(config))
            }
            Err(_) => {
                log::debug!("Cache file not found: {cache_file}");
                let fetched = self.inner.get_vnet(resource_group, vnet_name)?;
                if let Some(config) = &fetched {
                    let json = serde_json::to_string(config)
                        .map_err(|e| Error::Cache(format!("error serializing snapshot: {e}")))?;
                    log::info!("Writing vnet snapshot to cache file: {cache_file}");
                    std::fs::write(&cache_file, json)
                        .map_err(|e| Error::Cache(format!("error writing {cache_file}: {e}")))?;
                }
                Ok(fetched)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inner lookup that must not be reached on a cache hit.
    struct PanicLookup;

    impl VnetLookup for PanicLookup {
        fn get_vnet(&self, _rg: &str, _vnet: &str) -> Result<Option<VnetConfig>> {
            panic!("cache hit expected, inner lookup called");
        }
    }

    #[test]
    fn test_fixture_cache_hit() {
        let lookup = CachedVnetLookup::new(
            PanicLookup,
            Some("src/tests/test_data/vnet_test_cache_01.json"),
        );
        let config = lookup
            .get_vnet("rg-test", "hub-vnet")
            .expect("Error reading vnet cache")
            .expect("Fixture should contain a vnet");

        assert_eq!(config.vnet_name, "hub-vnet");
        assert_eq!(config.vnet_cidr.len(), 1, "One address space expected");
        assert_eq!(config.subnets.len(), 3, "Three subnets in test sample");
        assert_eq!(config.subnets[0].subnet_name, "GatewaySubnet");
    }

    #[test]
    fn test_missing_explicit_cache_file_is_an_error() {
        let lookup = CachedVnetLookup::new(PanicLookup, Some("no/such/file.json"));
        let err = lookup.get_vnet("rg-test", "hub-vnet").unwrap_err();
        assert!(matches!(err, Error::Cache(_)));
    }
}
