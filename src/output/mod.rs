//! Output rendering.
//!
//! - [`terminal`] - human-readable configuration table
//! - [`payload`] - Azure wire-shape create-or-update JSON

mod payload;
mod terminal;

// Re-export public functions
pub use payload::to_payload_json;
pub use terminal::print_vnet_config;
