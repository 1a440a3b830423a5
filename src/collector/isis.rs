use std::sync::Arc;

use super::datasource::IsisDatasource;
use super::{Collector, Desc, Metric};
use crate::rpc::RpcError;

pub struct IsisCollector {
    up: Arc<Desc>,
    total: Arc<Desc>,
}

impl IsisCollector {
    pub fn new() -> Self {
        let l = ["target"];
        Self {
            up: Desc::new("junos_isis_up_count", "Number of ISIS adjacencies in state up", &l),
            total: Desc::new("junos_isis_total_count", "Number of ISIS adjacencies", &l),
        }
    }
}

impl Default for IsisCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: IsisDatasource + ?Sized> Collector<D> for IsisCollector {
    fn name(&self) -> &'static str {
        "isis"
    }

    fn describe(&self) -> Vec<Arc<Desc>> {
        vec![Arc::clone(&self.up), Arc::clone(&self.total)]
    }

    fn collect(
        &self,
        datasource: &D,
        sink: &mut Vec<Metric>,
        label_values: &[String],
    ) -> Result<(), RpcError> {
        let adjacencies = datasource.isis_adjacencies()?;
        sink.push(Metric::gauge(&self.up, adjacencies.up as f64, label_values.to_vec()));
        sink.push(Metric::gauge(&self.total, adjacencies.total as f64, label_values.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::testing::{target, value};
    use crate::model::IsisAdjacencies;

    struct Fixture;

    impl IsisDatasource for Fixture {
        fn isis_adjacencies(&self) -> Result<IsisAdjacencies, RpcError> {
            Ok(IsisAdjacencies { up: 2, total: 3 })
        }
    }

    #[test]
    fn test_adjacency_counts() {
        let mut sink = Vec::new();
        IsisCollector::new()
            .collect(&Fixture, &mut sink, &target())
            .unwrap();

        assert_eq!(value(&sink, "junos_isis_up_count", &[]), Some(2.0));
        assert_eq!(value(&sink, "junos_isis_total_count", &[]), Some(3.0));
    }
}
