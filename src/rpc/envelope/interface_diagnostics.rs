//! `show interfaces diagnostics optics`

use serde::Deserialize;

use super::{Temperature, empty_as_zero};

#[derive(Debug, Deserialize)]
pub struct InterfaceDiagnosticsReply {
    #[serde(rename = "interface-information")]
    pub information: DiagnosticsInformation,
}

#[derive(Debug, Default, Deserialize)]
pub struct DiagnosticsInformation {
    #[serde(rename = "physical-interface", default)]
    pub diagnostics: Vec<PhysicalInterfaceDiagnostics>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PhysicalInterfaceDiagnostics {
    pub name: String,
    #[serde(rename = "optics-diagnostics")]
    pub optics: OpticsDiagnostics,
}

/// Transceiver readings. dBm values are kept as text because the device
/// reports dead lasers as `- Inf`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OpticsDiagnostics {
    #[serde(rename = "optic-diagnostics-not-available")]
    pub not_available: String,
    #[serde(rename = "laser-bias-current", deserialize_with = "empty_as_zero")]
    pub laser_bias_current: f64,
    #[serde(rename = "laser-output-power", deserialize_with = "empty_as_zero")]
    pub laser_output_power: f64,
    #[serde(rename = "laser-output-power-dbm")]
    pub laser_output_power_dbm: String,
    #[serde(rename = "module-temperature")]
    pub module_temperature: Temperature,
    #[serde(rename = "module-voltage", deserialize_with = "empty_as_zero")]
    pub module_voltage: f64,
    #[serde(rename = "rx-signal-avg-optical-power", deserialize_with = "empty_as_zero")]
    pub rx_signal_avg_optical_power: f64,
    #[serde(rename = "rx-signal-avg-optical-power-dbm")]
    pub rx_signal_avg_optical_power_dbm: String,
    #[serde(rename = "laser-rx-optical-power", deserialize_with = "empty_as_zero")]
    pub laser_rx_optical_power: f64,
    #[serde(rename = "laser-rx-optical-power-dbm")]
    pub laser_rx_optical_power_dbm: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::scenarios;
    use crate::rpc::envelope::decode;

    #[test]
    fn test_decode_optics() {
        let reply: InterfaceDiagnosticsReply =
            decode(scenarios::OPTICS_DIAGNOSTICS.as_bytes()).unwrap();
        let ports = reply.information.diagnostics;
        assert_eq!(ports.len(), 3);

        let xe0 = &ports[0].optics;
        assert_eq!(ports[0].name, "xe-0/0/0");
        assert_eq!(xe0.not_available, "");
        assert_eq!(xe0.laser_bias_current, 6.526);
        assert_eq!(xe0.laser_output_power_dbm, "-3.00");
        assert_eq!(xe0.module_temperature.celsius, 31.0);
        assert_eq!(xe0.module_voltage, 3.314);
        assert_eq!(xe0.rx_signal_avg_optical_power_dbm, "-3.43");

        assert_eq!(ports[1].optics.not_available, "N/A");

        let et2 = &ports[2].optics;
        assert_eq!(et2.module_voltage, 0.0);
        assert_eq!(et2.laser_output_power_dbm, "- Inf");
        assert_eq!(et2.laser_rx_optical_power, 0.35);
    }
}
