//! Canonical allocation-unit sizing.

use crate::models::Ipv4;

/// Cut a block down to the standard subnet size for its scale.
///
/// A prefix shorter than /20 yields the /20 at its base address, shorter
/// than /24 yields the /24 at its base address, and anything /24 or longer
/// is already subnet-sized and comes back unchanged. The result is the
/// candidate size to place; collision checking is the free-space finder's
/// job.
pub fn divide(network: Ipv4) -> Ipv4 {
    if network.mask < 20 {
        network.with_prefix(20)
    } else if network.mask < 24 {
        network.with_prefix(24)
    } else {
        network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_large_space() {
        let net = Ipv4::new("10.0.0.0/8").unwrap();
        assert_eq!(divide(net).to_string(), "10.0.0.0/20");

        let net = Ipv4::new("10.2.0.0/16").unwrap();
        assert_eq!(divide(net).to_string(), "10.2.0.0/20");

        let net = Ipv4::new("10.2.0.0/19").unwrap();
        assert_eq!(divide(net).to_string(), "10.2.0.0/20");
    }

    #[test]
    fn test_divide_medium_space() {
        let net = Ipv4::new("10.2.0.0/20").unwrap();
        assert_eq!(divide(net).to_string(), "10.2.0.0/24");

        let net = Ipv4::new("10.2.4.0/23").unwrap();
        assert_eq!(divide(net).to_string(), "10.2.4.0/24");
    }

    #[test]
    fn test_divide_already_subnet_sized() {
        for cidr in ["10.2.4.0/24", "10.2.4.16/28", "40.23.19.0/29", "10.0.0.1/32"] {
            let net = Ipv4::new(cidr).unwrap();
            assert_eq!(divide(net), net, "{cidr} should come back unchanged");
        }
    }

    #[test]
    fn test_divide_result_is_within_input() {
        let net = Ipv4::new("172.16.0.0/12").unwrap();
        assert!(divide(net).is_within(&net));
    }
}
