use std::sync::Arc;

use super::datasource::EnvironmentDatasource;
use super::metric::with_labels;
use super::{Collector, Desc, Metric};
use crate::rpc::RpcError;

pub struct EnvironmentCollector {
    temperature: Arc<Desc>,
}

impl EnvironmentCollector {
    pub fn new() -> Self {
        Self {
            temperature: Desc::new(
                "junos_environment_item_temp",
                "Temperature of the air flowing past",
                &["target", "item"],
            ),
        }
    }
}

impl Default for EnvironmentCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: EnvironmentDatasource + ?Sized> Collector<D> for EnvironmentCollector {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn describe(&self) -> Vec<Arc<Desc>> {
        vec![Arc::clone(&self.temperature)]
    }

    fn collect(
        &self,
        datasource: &D,
        sink: &mut Vec<Metric>,
        label_values: &[String],
    ) -> Result<(), RpcError> {
        for item in datasource.environment_items()? {
            let l = with_labels(label_values, &[&item.name]);
            sink.push(Metric::gauge(&self.temperature, item.temperature, l));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::testing::{target, value};
    use crate::model::EnvironmentItem;

    struct Fixture;

    impl EnvironmentDatasource for Fixture {
        fn environment_items(&self) -> Result<Vec<EnvironmentItem>, RpcError> {
            Ok(vec![EnvironmentItem {
                name: "FPC 0 Intake".to_string(),
                temperature: 33.0,
            }])
        }
    }

    #[test]
    fn test_item_temperature() {
        let mut sink = Vec::new();
        EnvironmentCollector::new()
            .collect(&Fixture, &mut sink, &target())
            .unwrap();

        assert_eq!(sink[0].label_values, ["r1", "FPC 0 Intake"]);
        assert_eq!(
            value(&sink, "junos_environment_item_temp", &[("item", "FPC 0 Intake")]),
            Some(33.0)
        );
    }
}
