/// Summary state of one BGP peer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BgpSession {
    pub ip: String,
    /// Session is in the Established state.
    pub up: bool,
    pub asn: String,
    pub flaps: u64,
    pub input_messages: u64,
    pub output_messages: u64,
    pub accepted_prefixes: u64,
    pub active_prefixes: u64,
    pub received_prefixes: u64,
    pub rejected_prefixes: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OspfArea {
    pub name: String,
    /// Neighbors in the Full state.
    pub neighbors: u64,
}

/// Aggregate adjacency health; no per-adjacency detail is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsisAdjacencies {
    pub up: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutingTable {
    pub name: String,
    pub max_routes: u64,
    pub active_routes: u64,
    pub total_routes: u64,
    /// Per-protocol counts in device order.
    pub protocols: Vec<ProtocolRouteCount>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtocolRouteCount {
    pub name: String,
    pub routes: u64,
    pub active_routes: u64,
}
