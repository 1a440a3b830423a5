use std::sync::Arc;

use super::datasource::RoutingTableDatasource;
use super::metric::with_labels;
use super::{Collector, Desc, Metric};
use crate::rpc::RpcError;

/// Route counts per table and per protocol within each table.
pub struct RouteCollector {
    total_routes: Arc<Desc>,
    active_routes: Arc<Desc>,
    max_routes: Arc<Desc>,
    protocol_routes: Arc<Desc>,
    protocol_active_routes: Arc<Desc>,
}

impl RouteCollector {
    pub fn new() -> Self {
        let table = ["target", "table"];
        let protocol = ["target", "table", "protocol"];

        Self {
            total_routes: Desc::new("junos_route_table_total_routes", "Number of routes in table", &table),
            active_routes: Desc::new(
                "junos_route_table_active_routes",
                "Number of active routes in table",
                &table,
            ),
            max_routes: Desc::new(
                "junos_route_table_max_routes",
                "Max number of routes reached in table",
                &table,
            ),
            protocol_routes: Desc::new(
                "junos_route_protocol_routes",
                "Number of routes by protocol in table",
                &protocol,
            ),
            protocol_active_routes: Desc::new(
                "junos_route_protocol_active_routes",
                "Number of active routes by protocol in table",
                &protocol,
            ),
        }
    }
}

impl Default for RouteCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: RoutingTableDatasource + ?Sized> Collector<D> for RouteCollector {
    fn name(&self) -> &'static str {
        "routes"
    }

    fn describe(&self) -> Vec<Arc<Desc>> {
        vec![
            Arc::clone(&self.total_routes),
            Arc::clone(&self.active_routes),
            Arc::clone(&self.max_routes),
            Arc::clone(&self.protocol_routes),
            Arc::clone(&self.protocol_active_routes),
        ]
    }

    fn collect(
        &self,
        datasource: &D,
        sink: &mut Vec<Metric>,
        label_values: &[String],
    ) -> Result<(), RpcError> {
        for table in datasource.routing_tables()? {
            let l = with_labels(label_values, &[&table.name]);
            sink.push(Metric::gauge(&self.total_routes, table.total_routes as f64, l.clone()));
            sink.push(Metric::gauge(&self.active_routes, table.active_routes as f64, l.clone()));
            sink.push(Metric::gauge(&self.max_routes, table.max_routes as f64, l));

            for proto in &table.protocols {
                let l = with_labels(label_values, &[&table.name, &proto.name]);
                sink.push(Metric::gauge(&self.protocol_routes, proto.routes as f64, l.clone()));
                sink.push(Metric::gauge(
                    &self.protocol_active_routes,
                    proto.active_routes as f64,
                    l,
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::testing::{count, target, value};
    use crate::model::{ProtocolRouteCount, RoutingTable};

    struct Fixture;

    impl RoutingTableDatasource for Fixture {
        fn routing_tables(&self) -> Result<Vec<RoutingTable>, RpcError> {
            Ok(vec![RoutingTable {
                name: "inet.0".to_string(),
                max_routes: 210,
                active_routes: 160,
                total_routes: 215,
                protocols: vec![
                    ProtocolRouteCount {
                        name: "BGP".to_string(),
                        routes: 200,
                        active_routes: 150,
                    },
                    ProtocolRouteCount {
                        name: "Static".to_string(),
                        routes: 6,
                        active_routes: 1,
                    },
                ],
            }])
        }
    }

    #[test]
    fn test_table_and_protocol_samples() {
        let mut sink = Vec::new();
        RouteCollector::new()
            .collect(&Fixture, &mut sink, &target())
            .unwrap();

        let table = [("table", "inet.0")];
        assert_eq!(value(&sink, "junos_route_table_total_routes", &table), Some(215.0));
        assert_eq!(value(&sink, "junos_route_table_active_routes", &table), Some(160.0));
        assert_eq!(value(&sink, "junos_route_table_max_routes", &table), Some(210.0));

        let bgp = [("table", "inet.0"), ("protocol", "BGP")];
        assert_eq!(value(&sink, "junos_route_protocol_routes", &bgp), Some(200.0));
        assert_eq!(value(&sink, "junos_route_protocol_active_routes", &bgp), Some(150.0));
        assert_eq!(count(&sink, "junos_route_protocol_routes"), 2);

        let protocols: Vec<_> = sink
            .iter()
            .filter(|m| m.desc.name == "junos_route_protocol_routes")
            .filter_map(|m| m.label("protocol"))
            .collect();
        assert_eq!(protocols, ["BGP", "Static"]);
    }
}
