use std::sync::Arc;

use super::datasource::BgpDatasource;
use super::metric::{bool_value, with_labels};
use super::{Collector, Desc, Metric};
use crate::model::BgpSession;
use crate::rpc::RpcError;

const PREFIX: &str = "junos_bgp_session_";

/// Per-peer session state, prefix and message counters.
pub struct BgpCollector {
    up: Arc<Desc>,
    received_prefixes: Arc<Desc>,
    accepted_prefixes: Arc<Desc>,
    rejected_prefixes: Arc<Desc>,
    active_prefixes: Arc<Desc>,
    input_messages: Arc<Desc>,
    output_messages: Arc<Desc>,
    flaps: Arc<Desc>,
}

impl BgpCollector {
    pub fn new() -> Self {
        let l = ["target", "asn", "ip"];
        let desc = |name: &str, help: &str| Desc::new(format!("{PREFIX}{name}"), help, &l);

        Self {
            up: desc("up", "Session is up (1 = Established)"),
            received_prefixes: desc("received_prefixes_count", "Number of received prefixes"),
            accepted_prefixes: desc("accepted_prefixes_count", "Number of accepted prefixes"),
            rejected_prefixes: desc("rejected_prefixes_count", "Number of rejected prefixes"),
            active_prefixes: desc("active_prefixes_count", "Number of active prefixes (best route in RIB)"),
            input_messages: desc("messages_input_count", "Number of received messages"),
            output_messages: desc("messages_output_count", "Number of transmitted messages"),
            flaps: desc("flap_count", "Number of session flaps"),
        }
    }

    fn collect_for_session(&self, s: &BgpSession, sink: &mut Vec<Metric>, label_values: &[String]) {
        let l = with_labels(label_values, &[&s.asn, &s.ip]);
        let samples = [
            (&self.up, bool_value(s.up)),
            (&self.received_prefixes, s.received_prefixes as f64),
            (&self.accepted_prefixes, s.accepted_prefixes as f64),
            (&self.rejected_prefixes, s.rejected_prefixes as f64),
            (&self.active_prefixes, s.active_prefixes as f64),
            (&self.input_messages, s.input_messages as f64),
            (&self.output_messages, s.output_messages as f64),
            (&self.flaps, s.flaps as f64),
        ];
        for (desc, value) in samples {
            sink.push(Metric::gauge(desc, value, l.clone()));
        }
    }
}

impl Default for BgpCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: BgpDatasource + ?Sized> Collector<D> for BgpCollector {
    fn name(&self) -> &'static str {
        "bgp"
    }

    fn describe(&self) -> Vec<Arc<Desc>> {
        [
            &self.up,
            &self.received_prefixes,
            &self.accepted_prefixes,
            &self.rejected_prefixes,
            &self.active_prefixes,
            &self.input_messages,
            &self.output_messages,
            &self.flaps,
        ]
        .into_iter()
        .map(Arc::clone)
        .collect()
    }

    fn collect(
        &self,
        datasource: &D,
        sink: &mut Vec<Metric>,
        label_values: &[String],
    ) -> Result<(), RpcError> {
        let sessions = datasource.bgp_sessions()?;
        for s in &sessions {
            self.collect_for_session(s, sink, label_values);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::testing::{target, value};

    struct Fixture(Vec<BgpSession>);

    impl BgpDatasource for Fixture {
        fn bgp_sessions(&self) -> Result<Vec<BgpSession>, RpcError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_session_samples() {
        let sessions = vec![
            BgpSession {
                ip: "192.0.2.1".to_string(),
                up: true,
                asn: "65001".to_string(),
                flaps: 3,
                input_messages: 1234,
                output_messages: 1200,
                accepted_prefixes: 100,
                active_prefixes: 98,
                received_prefixes: 120,
                rejected_prefixes: 20,
            },
            BgpSession {
                ip: "2001:db8::2".to_string(),
                asn: "65002".to_string(),
                ..Default::default()
            },
        ];
        let mut sink = Vec::new();
        BgpCollector::new()
            .collect(&Fixture(sessions), &mut sink, &target())
            .unwrap();

        assert_eq!(sink.len(), 16);
        assert_eq!(sink[0].label_values, ["r1", "65001", "192.0.2.1"]);

        let peer = [("ip", "192.0.2.1")];
        assert_eq!(value(&sink, "junos_bgp_session_up", &peer), Some(1.0));
        assert_eq!(value(&sink, "junos_bgp_session_received_prefixes_count", &peer), Some(120.0));
        assert_eq!(value(&sink, "junos_bgp_session_accepted_prefixes_count", &peer), Some(100.0));
        assert_eq!(value(&sink, "junos_bgp_session_rejected_prefixes_count", &peer), Some(20.0));
        assert_eq!(value(&sink, "junos_bgp_session_active_prefixes_count", &peer), Some(98.0));
        assert_eq!(value(&sink, "junos_bgp_session_messages_input_count", &peer), Some(1234.0));
        assert_eq!(value(&sink, "junos_bgp_session_messages_output_count", &peer), Some(1200.0));
        assert_eq!(value(&sink, "junos_bgp_session_flap_count", &peer), Some(3.0));

        let down = [("ip", "2001:db8::2"), ("asn", "65002")];
        assert_eq!(value(&sink, "junos_bgp_session_up", &down), Some(0.0));
    }
}
