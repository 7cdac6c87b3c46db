use std::net::Ipv4Addr;

/// Dotted-decimal rendering of an address, most significant octet first.
///
/// Total over all inputs; allocates a fresh string per call so callers
/// never share a formatting buffer.
pub fn dotted(addr: Ipv4Addr) -> String {
    let [a, b, c, d] = addr.octets();
    format!("{a}.{b}.{c}.{d}")
}
