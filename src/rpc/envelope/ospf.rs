//! `show ospf3 overview`

use serde::Deserialize;

use super::empty_as_zero;

#[derive(Debug, Deserialize)]
pub struct Ospf3Reply {
    #[serde(rename = "ospf3-overview-information")]
    pub information: Ospf3Information,
}

#[derive(Debug, Default, Deserialize)]
pub struct Ospf3Information {
    /// Usually one block; repeats are merged by [`Ospf3Information::areas`].
    #[serde(rename = "ospf-overview", default)]
    pub overviews: Vec<OspfOverview>,
}

impl Ospf3Information {
    /// Areas of every overview block, in document order.
    pub fn areas(self) -> impl Iterator<Item = OspfAreaOverview> {
        self.overviews.into_iter().flat_map(|o| o.areas)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct OspfOverview {
    #[serde(rename = "ospf-area-overview", default)]
    pub areas: Vec<OspfAreaOverview>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OspfAreaOverview {
    #[serde(rename = "ospf-area")]
    pub name: String,
    #[serde(rename = "ospf-nbr-overview")]
    pub neighbors: OspfNeighborOverview,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OspfNeighborOverview {
    #[serde(rename = "ospf-nbr-up-count", deserialize_with = "empty_as_zero")]
    pub up: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::scenarios;
    use crate::rpc::envelope::decode;

    #[test]
    fn test_decode_ospf3_overview() {
        let reply: Ospf3Reply = decode(scenarios::OSPF3_OVERVIEW.as_bytes()).unwrap();
        let areas: Vec<_> = reply.information.areas().collect();

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].name, "0.0.0.0");
        assert_eq!(areas[0].neighbors.up, 2);
        assert_eq!(areas[1].neighbors.up, 1);
    }

    #[test]
    fn test_decode_ospf3_not_running() {
        let xml = "<rpc-reply><ospf3-overview-information/></rpc-reply>";
        let reply: Ospf3Reply = decode(xml.as_bytes()).unwrap();
        assert_eq!(reply.information.areas().count(), 0);
    }

    #[test]
    fn test_decode_repeated_overview_blocks() {
        let xml = r#"<rpc-reply>
            <ospf3-overview-information>
                <ospf-overview>
                    <ospf-area-overview>
                        <ospf-area>0.0.0.0</ospf-area>
                        <ospf-nbr-overview><ospf-nbr-up-count>2</ospf-nbr-up-count></ospf-nbr-overview>
                    </ospf-area-overview>
                </ospf-overview>
                <ospf-overview>
                    <ospf-area-overview>
                        <ospf-area>0.0.0.5</ospf-area>
                        <ospf-nbr-overview><ospf-nbr-up-count>4</ospf-nbr-up-count></ospf-nbr-overview>
                    </ospf-area-overview>
                </ospf-overview>
            </ospf3-overview-information>
        </rpc-reply>"#;

        let reply: Ospf3Reply = decode(xml.as_bytes()).unwrap();
        let areas: Vec<_> = reply
            .information
            .areas()
            .map(|a| (a.name, a.neighbors.up))
            .collect();
        assert_eq!(areas, [("0.0.0.0".to_string(), 2), ("0.0.0.5".to_string(), 4)]);
    }
}
