//! `show route summary`

use serde::Deserialize;

use super::empty_as_zero;

#[derive(Debug, Deserialize)]
pub struct RouteReply {
    #[serde(rename = "route-summary-information")]
    pub information: RouteSummaryInformation,
}

#[derive(Debug, Default, Deserialize)]
pub struct RouteSummaryInformation {
    #[serde(rename = "route-table", default)]
    pub tables: Vec<RouteTable>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RouteTable {
    #[serde(rename = "table-name")]
    pub name: String,
    #[serde(rename = "destination-count", deserialize_with = "empty_as_zero")]
    pub max_routes: u64,
    #[serde(rename = "total-route-count", deserialize_with = "empty_as_zero")]
    pub total_routes: u64,
    #[serde(rename = "active-route-count", deserialize_with = "empty_as_zero")]
    pub active_routes: u64,
    pub protocols: Vec<RouteProtocol>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RouteProtocol {
    #[serde(rename = "protocol-name")]
    pub name: String,
    #[serde(rename = "protocol-route-count", deserialize_with = "empty_as_zero")]
    pub routes: u64,
    #[serde(rename = "active-route-count", deserialize_with = "empty_as_zero")]
    pub active_routes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::scenarios;
    use crate::rpc::envelope::decode;

    #[test]
    fn test_decode_route_summary() {
        let reply: RouteReply = decode(scenarios::ROUTE_SUMMARY.as_bytes()).unwrap();
        let tables = reply.information.tables;
        assert_eq!(tables.len(), 2);

        let inet = &tables[0];
        assert_eq!(inet.name, "inet.0");
        assert_eq!(inet.max_routes, 210);
        assert_eq!(inet.total_routes, 215);
        assert_eq!(inet.active_routes, 160);

        let names: Vec<_> = inet.protocols.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Direct", "Local", "BGP", "Static"]);
        assert_eq!(inet.protocols[2].routes, 200);
        assert_eq!(inet.protocols[2].active_routes, 150);
    }
}
