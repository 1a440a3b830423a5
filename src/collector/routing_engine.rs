use std::sync::Arc;

use super::datasource::RoutingEngineDatasource;
use super::{Collector, Desc, Metric};
use crate::rpc::RpcError;

const PREFIX: &str = "junos_route_engine_";

pub struct RoutingEngineCollector {
    temp: Arc<Desc>,
    cpu_temp: Arc<Desc>,
    memory_utilization: Arc<Desc>,
    cpu_user: Arc<Desc>,
    cpu_background: Arc<Desc>,
    cpu_system: Arc<Desc>,
    cpu_interrupt: Arc<Desc>,
    cpu_idle: Arc<Desc>,
    load_average_one: Arc<Desc>,
    load_average_five: Arc<Desc>,
    load_average_fifteen: Arc<Desc>,
}

impl RoutingEngineCollector {
    pub fn new() -> Self {
        let l = ["target"];
        let desc = |name: &str, help: &str| Desc::new(format!("{PREFIX}{name}"), help, &l);

        Self {
            temp: desc("temp", "Temperature of the air flowing past the Routing Engine"),
            cpu_temp: desc("cpu_temp", "Temperature of the CPU"),
            memory_utilization: desc("memory_utilization", "Percentage of Routing Engine memory being used"),
            cpu_user: desc("cpu_user", "Percentage of CPU time being used by user processes"),
            cpu_background: desc("cpu_background", "Percentage of CPU time being used by background processes"),
            cpu_system: desc("cpu_system", "Percentage of CPU time being used by kernel processes"),
            cpu_interrupt: desc("cpu_interrupt", "Percentage of CPU time being used by interrupts"),
            cpu_idle: desc("cpu_idle", "Percentage of CPU time that is idle"),
            load_average_one: desc("load_average_one", "Routing Engine load average over 1 minute"),
            load_average_five: desc("load_average_five", "Routing Engine load average over 5 minutes"),
            load_average_fifteen: desc("load_average_fifteen", "Routing Engine load average over 15 minutes"),
        }
    }

    fn descs(&self) -> [&Arc<Desc>; 11] {
        [
            &self.temp,
            &self.cpu_temp,
            &self.memory_utilization,
            &self.cpu_user,
            &self.cpu_background,
            &self.cpu_system,
            &self.cpu_interrupt,
            &self.cpu_idle,
            &self.load_average_one,
            &self.load_average_five,
            &self.load_average_fifteen,
        ]
    }
}

impl Default for RoutingEngineCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: RoutingEngineDatasource + ?Sized> Collector<D> for RoutingEngineCollector {
    fn name(&self) -> &'static str {
        "routing_engine"
    }

    fn describe(&self) -> Vec<Arc<Desc>> {
        self.descs().into_iter().map(Arc::clone).collect()
    }

    fn collect(
        &self,
        datasource: &D,
        sink: &mut Vec<Metric>,
        label_values: &[String],
    ) -> Result<(), RpcError> {
        let r = datasource.route_engine_stats()?;
        let values = [
            r.temperature,
            r.cpu_temperature,
            r.memory_utilization,
            r.cpu_user,
            r.cpu_background,
            r.cpu_system,
            r.cpu_interrupt,
            r.cpu_idle,
            r.load_average_one,
            r.load_average_five,
            r.load_average_fifteen,
        ];
        for (desc, value) in self.descs().into_iter().zip(values) {
            sink.push(Metric::gauge(desc, value, label_values.to_vec()));
        }
        Ok(())
    }
}
