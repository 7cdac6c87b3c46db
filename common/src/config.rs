pub struct Config {
    /// Leaves out the network and broadcast addresses.
    ///
    /// Only meaningful for prefixes up to /30; smaller networks have no
    /// network/broadcast distinction to speak of.
    pub omit_edges: bool
}
