use std::net::Ipv4Addr;

use crate::network::cidr::Network;

/// An inclusive range of IPv4 addresses, enumerated lazily in ascending
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostRange {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl HostRange {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Resolves the per-prefix emission policy of a network:
    ///
    /// * `/32` covers exactly the base address.
    /// * `/31` covers exactly the address above the base.
    /// * Everything wider covers offsets `lo..=hi` over the base, where
    ///   `lo` is 1 when `omit_edges` is set (dropping the network
    ///   address) and `hi = !mask - lo`.
    ///
    /// `omit_edges` has no effect on `/31` and `/32`; those networks are
    /// too small for the network/broadcast distinction.
    pub fn from_network(network: &Network, omit_edges: bool) -> Self {
        let base = network.addr;
        match network.prefix {
            32 => Self::single(Ipv4Addr::from(base)),
            31 => Self::single(Ipv4Addr::from(base + 1)),
            _ => {
                let lo = u32::from(omit_edges);
                let hi = !network.mask - lo;
                Self::new(Ipv4Addr::from(base + lo), Ipv4Addr::from(base + hi))
            }
        }
    }

    fn single(addr: Ipv4Addr) -> Self {
        Self::new(addr, addr)
    }

    /// Fresh ascending iterator over the range; an inverted range yields
    /// nothing.
    pub fn to_iter(&self) -> impl Iterator<Item = Ipv4Addr> {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        (start..=end).map(Ipv4Addr::from)
    }

    /// Number of addresses in the range. 64 bits wide: `0.0.0.0/0`
    /// covers all 2^32 of them.
    pub fn len(&self) -> u64 {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        if end < start {
            0
        } else {
            u64::from(end) - u64::from(start) + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(s: &str) -> Network {
        s.parse().unwrap()
    }

    #[test]
    fn test_slash24_covers_every_host() {
        let range = HostRange::from_network(&network("192.168.1.0/24"), false);
        assert_eq!(range.len(), 256);

        let hosts: Vec<Ipv4Addr> = range.to_iter().collect();
        assert_eq!(hosts.first(), Some(&Ipv4Addr::new(192, 168, 1, 0)));
        assert_eq!(hosts.last(), Some(&Ipv4Addr::new(192, 168, 1, 255)));
        assert!(hosts.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_slash24_omit_edges() {
        let range = HostRange::from_network(&network("192.168.1.0/24"), true);
        assert_eq!(range.len(), 254);
        assert_eq!(range.start_addr, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(range.end_addr, Ipv4Addr::new(192, 168, 1, 254));
    }

    #[test]
    fn test_counts_down_to_slash30() {
        for prefix in 24..=30u8 {
            let network = network(&format!("10.0.0.0/{prefix}"));
            let full = HostRange::from_network(&network, false);
            let trimmed = HostRange::from_network(&network, true);
            assert_eq!(full.len(), 1u64 << (32 - prefix));
            assert_eq!(trimmed.len(), full.len() - 2);
        }
    }

    #[test]
    fn test_slash31_single_upper_address() {
        for omit in [false, true] {
            let range = HostRange::from_network(&network("10.0.0.0/31"), omit);
            let hosts: Vec<Ipv4Addr> = range.to_iter().collect();
            assert_eq!(hosts, vec![Ipv4Addr::new(10, 0, 0, 1)]);
        }
    }

    #[test]
    fn test_slash32_single_base_address() {
        for omit in [false, true] {
            let range = HostRange::from_network(&network("10.0.0.5/32"), omit);
            let hosts: Vec<Ipv4Addr> = range.to_iter().collect();
            assert_eq!(hosts, vec![Ipv4Addr::new(10, 0, 0, 5)]);
        }
    }

    #[test]
    fn test_slash0_spans_everything() {
        let range = HostRange::from_network(&network("0.0.0.0/0"), false);
        assert_eq!(range.start_addr, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(range.end_addr, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(range.len(), 1u64 << 32);
    }

    #[test]
    fn test_iteration_restarts_from_the_top() {
        let range = HostRange::from_network(&network("10.0.0.0/30"), false);
        assert_eq!(range.to_iter().count(), 4);
        assert_eq!(range.to_iter().count(), 4);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = HostRange::new(Ipv4Addr::new(10, 0, 0, 5), Ipv4Addr::new(10, 0, 0, 1));
        assert!(range.is_empty());
        assert_eq!(range.to_iter().count(), 0);
    }
}
