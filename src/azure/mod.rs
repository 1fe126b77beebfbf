//! Azure CLI interaction.
//!
//! This module handles everything that touches the az CLI:
//! - [`cli`] - subprocess execution
//! - [`lookup`] - `az network vnet show` queries
//! - [`cache`] - read-through snapshot cache

mod cache;
mod cli;
mod lookup;

// Re-export public types and functions
pub use cache::CachedVnetLookup;
pub use cli::run;
pub use lookup::AzCliVnetLookup;
