use std::sync::Arc;

use super::datasource::OspfDatasource;
use super::metric::with_labels;
use super::{Collector, Desc, Metric};
use crate::rpc::RpcError;

pub struct OspfCollector {
    neighbors: Arc<Desc>,
}

impl OspfCollector {
    pub fn new() -> Self {
        Self {
            neighbors: Desc::new(
                "junos_ospf3_neighbors",
                "Number of neighbors",
                &["target", "area"],
            ),
        }
    }
}

impl Default for OspfCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: OspfDatasource + ?Sized> Collector<D> for OspfCollector {
    fn name(&self) -> &'static str {
        "ospf"
    }

    fn describe(&self) -> Vec<Arc<Desc>> {
        vec![Arc::clone(&self.neighbors)]
    }

    fn collect(
        &self,
        datasource: &D,
        sink: &mut Vec<Metric>,
        label_values: &[String],
    ) -> Result<(), RpcError> {
        for area in datasource.ospf_areas()? {
            let l = with_labels(label_values, &[&area.name]);
            sink.push(Metric::gauge(&self.neighbors, area.neighbors as f64, l));
        }
        Ok(())
    }
}
