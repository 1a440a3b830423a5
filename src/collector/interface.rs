use std::sync::Arc;

use super::datasource::InterfaceStatsDatasource;
use super::metric::{bool_value, with_labels};
use super::{Collector, Desc, Metric};
use crate::model::InterfaceStats;
use crate::rpc::RpcError;

const PREFIX: &str = "junos_interface_";

/// Traffic, status and error counters per interface.
///
/// Logical units only get byte counters; status and error samples are
/// emitted for physical interfaces.
pub struct InterfaceCollector {
    receive_bytes: Arc<Desc>,
    receive_errors: Arc<Desc>,
    receive_drops: Arc<Desc>,
    transmit_bytes: Arc<Desc>,
    transmit_errors: Arc<Desc>,
    transmit_drops: Arc<Desc>,
    admin_status: Arc<Desc>,
    oper_status: Arc<Desc>,
    error_status: Arc<Desc>,
}

impl InterfaceCollector {
    pub fn new() -> Self {
        let l = ["target", "name", "description", "mac"];
        let desc = |name: &str, help: &str| Desc::new(format!("{PREFIX}{name}"), help, &l);

        Self {
            receive_bytes: desc("receive_bytes", "Received data in bytes"),
            receive_errors: desc("receive_errors", "Number of errors caused by incoming packets"),
            receive_drops: desc("receive_drops", "Number of dropped incoming packets"),
            transmit_bytes: desc("transmit_bytes", "Transmitted data in bytes"),
            transmit_errors: desc("transmit_errors", "Number of errors caused by outgoing packets"),
            transmit_drops: desc("transmit_drops", "Number of dropped outgoing packets"),
            admin_status: desc("admin_up", "Admin operational status"),
            oper_status: desc("up", "Interface operational status"),
            error_status: desc("error_status", "Admin and operational status differ"),
        }
    }

    fn collect_for_interface(&self, s: &InterfaceStats, sink: &mut Vec<Metric>, label_values: &[String]) {
        let l = with_labels(label_values, &[&s.name, &s.description, &s.mac]);
        sink.push(Metric::gauge(&self.receive_bytes, s.receive_bytes as f64, l.clone()));
        sink.push(Metric::gauge(&self.transmit_bytes, s.transmit_bytes as f64, l.clone()));

        if let Some(phy) = &s.physical {
            sink.push(Metric::gauge(&self.admin_status, bool_value(phy.admin_up), l.clone()));
            sink.push(Metric::gauge(&self.oper_status, bool_value(phy.oper_up), l.clone()));
            sink.push(Metric::gauge(&self.error_status, bool_value(phy.error_status), l.clone()));
            sink.push(Metric::gauge(&self.transmit_errors, phy.transmit_errors as f64, l.clone()));
            sink.push(Metric::gauge(&self.transmit_drops, phy.transmit_drops as f64, l.clone()));
            sink.push(Metric::gauge(&self.receive_errors, phy.receive_errors as f64, l.clone()));
            sink.push(Metric::gauge(&self.receive_drops, phy.receive_drops as f64, l));
        }
    }
}

impl Default for InterfaceCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: InterfaceStatsDatasource + ?Sized> Collector<D> for InterfaceCollector {
    fn name(&self) -> &'static str {
        "interfaces"
    }

    fn describe(&self) -> Vec<Arc<Desc>> {
        vec![
            Arc::clone(&self.receive_bytes),
            Arc::clone(&self.receive_errors),
            Arc::clone(&self.receive_drops),
            Arc::clone(&self.transmit_bytes),
            Arc::clone(&self.transmit_drops),
            Arc::clone(&self.transmit_errors),
            Arc::clone(&self.admin_status),
            Arc::clone(&self.oper_status),
            Arc::clone(&self.error_status),
        ]
    }

    fn collect(
        &self,
        datasource: &D,
        sink: &mut Vec<Metric>,
        label_values: &[String],
    ) -> Result<(), RpcError> {
        let stats = datasource.interface_stats()?;
        for s in &stats {
            self.collect_for_interface(s, sink, label_values);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::testing::{count, target, transport_error, value};
    use crate::model::PhysicalCounters;

    struct Fixture(Result<Vec<InterfaceStats>, ()>);

    impl InterfaceStatsDatasource for Fixture {
        fn interface_stats(&self) -> Result<Vec<InterfaceStats>, RpcError> {
            self.0.clone().map_err(|_| transport_error())
        }
    }

    fn physical() -> InterfaceStats {
        InterfaceStats {
            name: "ge-0/0/1".to_string(),
            description: "to core2".to_string(),
            mac: "00:05:86:71:1a:c1".to_string(),
            receive_bytes: 100,
            transmit_bytes: 200,
            physical: Some(PhysicalCounters {
                receive_errors: 1,
                receive_drops: 2,
                transmit_errors: 3,
                transmit_drops: 4,
                ..PhysicalCounters::with_status(true, false)
            }),
        }
    }

    fn logical() -> InterfaceStats {
        InterfaceStats {
            name: "ge-0/0/1.0".to_string(),
            mac: "00:05:86:71:1a:c1".to_string(),
            receive_bytes: 10,
            transmit_bytes: 20,
            ..Default::default()
        }
    }

    #[test]
    fn test_physical_interface_samples() {
        let collector = InterfaceCollector::new();
        let mut sink = Vec::new();
        collector
            .collect(&Fixture(Ok(vec![physical()])), &mut sink, &target())
            .unwrap();

        assert_eq!(sink.len(), 9);
        assert_eq!(
            sink[0].label_values,
            ["r1", "ge-0/0/1", "to core2", "00:05:86:71:1a:c1"]
        );

        let l = [("name", "ge-0/0/1")];
        assert_eq!(value(&sink, "junos_interface_receive_bytes", &l), Some(100.0));
        assert_eq!(value(&sink, "junos_interface_transmit_bytes", &l), Some(200.0));
        assert_eq!(value(&sink, "junos_interface_admin_up", &l), Some(1.0));
        assert_eq!(value(&sink, "junos_interface_up", &l), Some(0.0));
        assert_eq!(value(&sink, "junos_interface_error_status", &l), Some(1.0));
        assert_eq!(value(&sink, "junos_interface_receive_errors", &l), Some(1.0));
        assert_eq!(value(&sink, "junos_interface_receive_drops", &l), Some(2.0));
        assert_eq!(value(&sink, "junos_interface_transmit_errors", &l), Some(3.0));
        assert_eq!(value(&sink, "junos_interface_transmit_drops", &l), Some(4.0));
    }

    #[test]
    fn test_logical_interface_only_bytes() {
        let collector = InterfaceCollector::new();
        let mut sink = Vec::new();
        collector
            .collect(&Fixture(Ok(vec![physical(), logical()])), &mut sink, &target())
            .unwrap();

        assert_eq!(sink.len(), 11);
        let l = [("name", "ge-0/0/1.0")];
        assert_eq!(value(&sink, "junos_interface_receive_bytes", &l), Some(10.0));
        assert_eq!(value(&sink, "junos_interface_transmit_bytes", &l), Some(20.0));
        assert_eq!(value(&sink, "junos_interface_up", &l), None);
        assert_eq!(value(&sink, "junos_interface_receive_errors", &l), None);
        assert_eq!(count(&sink, "junos_interface_admin_up"), 1);
    }

    #[test]
    fn test_repeated_collect_is_identical() {
        let collector = InterfaceCollector::new();
        let fixture = Fixture(Ok(vec![physical(), logical()]));

        let mut first = Vec::new();
        let mut second = Vec::new();
        collector.collect(&fixture, &mut first, &target()).unwrap();
        collector.collect(&fixture, &mut second, &target()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_datasource_error_emits_nothing() {
        let collector = InterfaceCollector::new();
        let mut sink = Vec::new();
        let result = collector.collect(&Fixture(Err(())), &mut sink, &target());

        assert!(result.is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_describe() {
        let collector = InterfaceCollector::new();
        let descs = Collector::<Fixture>::describe(&collector);

        assert_eq!(descs.len(), 9);
        assert!(descs
            .iter()
            .all(|d| d.label_names == ["target", "name", "description", "mac"]));
    }
}
