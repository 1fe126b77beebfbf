//! Terminal rendering of a VNet configuration.

use crate::models::VnetConfig;
use colored::Colorize;

/// Print the configuration as an aligned table, one row per subnet.
///
/// `new_subnet` marks the freshly appended entry, if any.
pub fn print_vnet_config(config: &VnetConfig, new_subnet: Option<&str>) {
    log::info!("#Start print_vnet_config() for {config}");

    println!(
        "VNET: '{vnet_name}' - {cidrs}",
        vnet_name = config.vnet_name,
        cidrs = config
            .vnet_cidr
            .iter()
            .map(|cidr| cidr.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    );
    println!(r#"  "state",      "subnet_cidr",       "broadcast", "hosts",  "subnet_name""#);

    for subnet in &config.subnets {
        let is_new = new_subnet == Some(subnet.subnet_name.as_str());
        let state = if is_new { "-new-" } else { "" };
        let row = format!(
            "{state},{cidr},{broadcast},{hosts},{name}",
            state = field(state, 9),
            cidr = field(subnet.subnet_cidr, 19),
            broadcast = field(format!("{}_br", subnet.subnet_cidr.hi()), 17),
            hosts = field(subnet.subnet_cidr.host_capacity(), 7),
            name = field(&subnet.subnet_name, 15),
        );
        if is_new {
            println!("{}", row.green());
        } else {
            println!("{row}");
        }
    }
}

/// Format a value as a quoted, right-aligned field.
fn field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_short() {
        assert_eq!(field("web", 8), "   \"web\"");
    }

    #[test]
    fn test_field_exact() {
        assert_eq!(field("web", 5), "\"web\"");
    }

    #[test]
    fn test_field_long() {
        assert_eq!(field("long_subnet_name", 5), "\"long_subnet_name\"");
    }

    #[test]
    fn test_field_number() {
        assert_eq!(field(256, 6), " \"256\"");
    }
}
