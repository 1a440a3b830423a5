//! `show chassis routing-engine`

use serde::Deserialize;

use super::{Temperature, empty_as_zero};

#[derive(Debug, Deserialize)]
pub struct RoutingEngineReply {
    #[serde(rename = "route-engine-information")]
    pub information: RouteEngineInformation,
}

#[derive(Debug, Default, Deserialize)]
pub struct RouteEngineInformation {
    /// One entry per installed routing engine, primary slot first.
    #[serde(rename = "route-engine", default)]
    pub route_engines: Vec<RouteEngine>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RouteEngine {
    pub temperature: Temperature,
    #[serde(rename = "cpu-temperature")]
    pub cpu_temperature: Temperature,
    #[serde(rename = "memory-buffer-utilization", deserialize_with = "empty_as_zero")]
    pub memory_utilization: f64,
    #[serde(rename = "cpu-user", deserialize_with = "empty_as_zero")]
    pub cpu_user: f64,
    #[serde(rename = "cpu-background", deserialize_with = "empty_as_zero")]
    pub cpu_background: f64,
    #[serde(rename = "cpu-system", deserialize_with = "empty_as_zero")]
    pub cpu_system: f64,
    #[serde(rename = "cpu-interrupt", deserialize_with = "empty_as_zero")]
    pub cpu_interrupt: f64,
    #[serde(rename = "cpu-idle", deserialize_with = "empty_as_zero")]
    pub cpu_idle: f64,
    #[serde(rename = "load-average-one", deserialize_with = "empty_as_zero")]
    pub load_average_one: f64,
    #[serde(rename = "load-average-five", deserialize_with = "empty_as_zero")]
    pub load_average_five: f64,
    #[serde(rename = "load-average-fifteen", deserialize_with = "empty_as_zero")]
    pub load_average_fifteen: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::scenarios;
    use crate::rpc::envelope::decode;

    #[test]
    fn test_decode_dual_routing_engine() {
        let reply: RoutingEngineReply = decode(scenarios::ROUTING_ENGINE.as_bytes()).unwrap();
        let engines = reply.information.route_engines;
        assert_eq!(engines.len(), 2);

        let primary = &engines[0];
        assert_eq!(primary.temperature.celsius, 38.0);
        assert_eq!(primary.cpu_temperature.celsius, 45.0);
        assert_eq!(primary.memory_utilization, 42.0);
        assert_eq!(primary.cpu_idle, 91.0);
        assert_eq!(primary.load_average_fifteen, 0.18);

        let backup = &engines[1];
        assert_eq!(backup.temperature.celsius, 35.0);
        assert_eq!(backup.load_average_one, 0.0);
    }
}
