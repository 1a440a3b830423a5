//! `show bgp summary`

use serde::Deserialize;

use super::empty_as_zero;

#[derive(Debug, Deserialize)]
pub struct BgpReply {
    #[serde(rename = "bgp-information")]
    pub information: BgpInformation,
}

#[derive(Debug, Default, Deserialize)]
pub struct BgpInformation {
    #[serde(rename = "bgp-peer", default)]
    pub peers: Vec<BgpPeer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BgpPeer {
    #[serde(rename = "peer-address")]
    pub ip: String,
    #[serde(rename = "peer-as")]
    pub asn: String,
    #[serde(rename = "peer-state")]
    pub state: String,
    #[serde(rename = "flap-count", deserialize_with = "empty_as_zero")]
    pub flaps: u64,
    #[serde(rename = "input-messages", deserialize_with = "empty_as_zero")]
    pub input_messages: u64,
    #[serde(rename = "output-messages", deserialize_with = "empty_as_zero")]
    pub output_messages: u64,
    /// One entry per RIB the peer contributes to. Multiprotocol peers carry
    /// several; the last one supplies the session counters.
    #[serde(rename = "bgp-rib")]
    pub ribs: Vec<BgpRib>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BgpRib {
    #[serde(rename = "active-prefix-count", deserialize_with = "empty_as_zero")]
    pub active_prefixes: u64,
    #[serde(rename = "received-prefix-count", deserialize_with = "empty_as_zero")]
    pub received_prefixes: u64,
    #[serde(rename = "accepted-prefix-count", deserialize_with = "empty_as_zero")]
    pub accepted_prefixes: u64,
    #[serde(rename = "suppressed-prefix-count", deserialize_with = "empty_as_zero")]
    pub rejected_prefixes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::scenarios;
    use crate::rpc::envelope::decode;

    #[test]
    fn test_decode_bgp_summary() {
        let reply: BgpReply = decode(scenarios::BGP_SUMMARY.as_bytes()).unwrap();
        let peers = reply.information.peers;
        assert_eq!(peers.len(), 3);

        assert_eq!(peers[0].ip, "192.0.2.1");
        assert_eq!(peers[0].asn, "65001");
        assert_eq!(peers[0].state, "Established");
        assert_eq!(peers[0].flaps, 3);
        assert_eq!(peers[0].ribs.len(), 1);
        assert_eq!(peers[0].ribs[0].rejected_prefixes, 20);

        assert_eq!(peers[1].ip, "2001:db8::2");
        assert_eq!(peers[1].state, "Active");
        assert!(peers[1].ribs.is_empty());

        assert_eq!(peers[2].ribs.len(), 2);
        assert_eq!(peers[2].ribs[1].accepted_prefixes, 7);
    }
}
