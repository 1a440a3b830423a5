use std::sync::Arc;

use super::datasource::AlarmDatasource;
use super::{Collector, Desc, Metric};
use crate::rpc::RpcError;

const PREFIX: &str = "junos_alarms_";

pub struct AlarmCollector {
    red: Arc<Desc>,
    yellow: Arc<Desc>,
}

impl AlarmCollector {
    pub fn new() -> Self {
        let l = ["target"];
        Self {
            red: Desc::new(format!("{PREFIX}red_count"), "Number of red alarms (not silenced)", &l),
            yellow: Desc::new(
                format!("{PREFIX}yellow_count"),
                "Number of yellow alarms (not silenced)",
                &l,
            ),
        }
    }
}

impl Default for AlarmCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: AlarmDatasource + ?Sized> Collector<D> for AlarmCollector {
    fn name(&self) -> &'static str {
        "alarm"
    }

    fn describe(&self) -> Vec<Arc<Desc>> {
        vec![Arc::clone(&self.red), Arc::clone(&self.yellow)]
    }

    fn collect(
        &self,
        datasource: &D,
        sink: &mut Vec<Metric>,
        label_values: &[String],
    ) -> Result<(), RpcError> {
        let counter = datasource.alarm_counter()?;
        sink.push(Metric::gauge(&self.red, counter.red as f64, label_values.to_vec()));
        sink.push(Metric::gauge(&self.yellow, counter.yellow as f64, label_values.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::testing::{target, transport_error, value};
    use crate::model::AlarmCounter;

    struct Fixture(Option<AlarmCounter>);

    impl AlarmDatasource for Fixture {
        fn alarm_counter(&self) -> Result<AlarmCounter, RpcError> {
            self.0.ok_or_else(transport_error)
        }
    }

    #[test]
    fn test_alarm_counts() {
        let mut sink = Vec::new();
        AlarmCollector::new()
            .collect(
                &Fixture(Some(AlarmCounter { red: 2, yellow: 1 })),
                &mut sink,
                &target(),
            )
            .unwrap();

        assert_eq!(value(&sink, "junos_alarms_red_count", &[]), Some(2.0));
        assert_eq!(value(&sink, "junos_alarms_yellow_count", &[]), Some(1.0));
        assert!(sink.iter().all(|m| m.label_values == ["r1"]));
    }

    #[test]
    fn test_no_alarms_still_reports_zero() {
        let mut sink = Vec::new();
        AlarmCollector::new()
            .collect(&Fixture(Some(AlarmCounter::default())), &mut sink, &target())
            .unwrap();
        assert_eq!(value(&sink, "junos_alarms_red_count", &[]), Some(0.0));
    }

    #[test]
    fn test_error() {
        let mut sink = Vec::new();
        assert!(AlarmCollector::new()
            .collect(&Fixture(None), &mut sink, &target())
            .is_err());
        assert!(sink.is_empty());
    }
}
