use std::sync::Arc;

use super::datasource::InterfaceDiagnosticsDatasource;
use super::metric::with_labels;
use super::{Collector, Desc, Metric};
use crate::model::{InterfaceDiagnostics, RxPower};
use crate::rpc::RpcError;

const PREFIX: &str = "junos_interface_diagnostics_";

/// Optical transceiver readings.
///
/// Receive power is emitted either as the averaged signal (modules reporting
/// a supply voltage, together with that voltage) or as raw laser receive
/// power, never both.
pub struct InterfaceDiagnosticsCollector {
    laser_bias: Arc<Desc>,
    laser_output: Arc<Desc>,
    laser_output_dbm: Arc<Desc>,
    module_temperature: Arc<Desc>,
    module_voltage: Arc<Desc>,
    rx_signal_avg: Arc<Desc>,
    rx_signal_avg_dbm: Arc<Desc>,
    laser_rx: Arc<Desc>,
    laser_rx_dbm: Arc<Desc>,
}

impl InterfaceDiagnosticsCollector {
    pub fn new() -> Self {
        let l = ["target", "name"];
        let desc = |name: &str, help: &str| Desc::new(format!("{PREFIX}{name}"), help, &l);

        Self {
            laser_bias: desc("laser_bias", "Laser bias current in mA"),
            laser_output: desc("laser_output", "Laser output power in mW"),
            laser_output_dbm: desc("laser_output_dbm", "Laser output power in dBm"),
            module_temperature: desc("temp", "Module temperature in degrees Celsius"),
            module_voltage: desc("module_voltage", "Module voltage in V"),
            rx_signal_avg: desc("rx_signal_avg", "Receiver signal average optical power in mW"),
            rx_signal_avg_dbm: desc("rx_signal_avg_dbm", "Receiver signal average optical power in dBm"),
            laser_rx: desc("laser_rx", "Laser receiver power in mW"),
            laser_rx_dbm: desc("laser_rx_dbm", "Laser receiver power in dBm"),
        }
    }

    fn collect_for_interface(&self, d: &InterfaceDiagnostics, sink: &mut Vec<Metric>, label_values: &[String]) {
        let l = with_labels(label_values, &[&d.name]);
        sink.push(Metric::gauge(&self.laser_bias, d.laser_bias_current, l.clone()));
        sink.push(Metric::gauge(&self.laser_output, d.laser_output_power, l.clone()));
        sink.push(Metric::gauge(&self.laser_output_dbm, d.laser_output_power_dbm, l.clone()));
        sink.push(Metric::gauge(&self.module_temperature, d.module_temperature, l.clone()));

        match d.rx {
            RxPower::SignalAverage {
                module_voltage,
                power,
                power_dbm,
            } => {
                sink.push(Metric::gauge(&self.module_voltage, module_voltage, l.clone()));
                sink.push(Metric::gauge(&self.rx_signal_avg, power, l.clone()));
                sink.push(Metric::gauge(&self.rx_signal_avg_dbm, power_dbm, l));
            }
            RxPower::LaserRx { power, power_dbm } => {
                sink.push(Metric::gauge(&self.laser_rx, power, l.clone()));
                sink.push(Metric::gauge(&self.laser_rx_dbm, power_dbm, l));
            }
        }
    }
}

impl Default for InterfaceDiagnosticsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: InterfaceDiagnosticsDatasource + ?Sized> Collector<D> for InterfaceDiagnosticsCollector {
    fn name(&self) -> &'static str {
        "interface_diagnostics"
    }

    fn describe(&self) -> Vec<Arc<Desc>> {
        [
            &self.laser_bias,
            &self.laser_output,
            &self.laser_output_dbm,
            &self.module_temperature,
            &self.module_voltage,
            &self.rx_signal_avg,
            &self.rx_signal_avg_dbm,
            &self.laser_rx,
            &self.laser_rx_dbm,
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
        let diagnostics = datasource.interface_diagnostics()?;
        for d in &diagnostics {
            self.collect_for_interface(d, sink, label_values);
        }
        Ok(())
    }
}
