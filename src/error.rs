//! Error taxonomy for subnet allocation.
//!
//! Every variant is a terminal, user-visible failure for the current
//! allocation request; none represent transient conditions worth retrying.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the allocator and its collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// A CIDR string from configuration or fetched data did not parse.
    #[error("invalid CIDR format: '{cidr}'")]
    InvalidCidrFormat { cidr: String },

    /// The requested subnet name is reserved for virtual network gateways.
    #[error("subnet name '{name}' is reserved for virtual network gateways")]
    ReservedSubnetName { name: String },

    /// Every address-space prefix of the VNet is exhausted.
    #[error(
        "no address space available for subnet '{subnet_name}' in virtual network '{vnet_name}'"
    )]
    NoAddressSpaceAvailable {
        subnet_name: String,
        vnet_name: String,
    },

    /// The az CLI failed or returned output we could not use.
    #[error("az cli: {0}")]
    AzCli(String),

    /// The snapshot cache file could not be read, parsed or written.
    #[error("vnet cache: {0}")]
    Cache(String),

    /// The create-or-update payload could not be rendered.
    #[error("payload: {0}")]
    Payload(String),
}
