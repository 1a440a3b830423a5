//! `show isis adjacency`

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct IsisReply {
    #[serde(rename = "isis-adjacency-information")]
    pub information: IsisInformation,
}

#[derive(Debug, Default, Deserialize)]
pub struct IsisInformation {
    #[serde(rename = "isis-adjacency", default)]
    pub adjacencies: Vec<IsisAdjacency>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IsisAdjacency {
    #[serde(rename = "adjacency-state")]
    pub state: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::scenarios;
    use crate::rpc::envelope::decode;

    #[test]
    fn test_decode_isis_adjacency() {
        let reply: IsisReply = decode(scenarios::ISIS_ADJACENCY.as_bytes()).unwrap();
        let states: Vec<_> = reply
            .information
            .adjacencies
            .iter()
            .map(|a| a.state.as_str())
            .collect();

        assert_eq!(states, ["Up", "Up", "Initializing"]);
    }
}
