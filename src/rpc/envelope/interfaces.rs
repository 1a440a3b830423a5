//! `show interfaces statistics detail`

use serde::Deserialize;

use super::empty_as_zero;

#[derive(Debug, Deserialize)]
pub struct InterfaceReply {
    #[serde(rename = "interface-information")]
    pub information: InterfaceInformation,
}

#[derive(Debug, Default, Deserialize)]
pub struct InterfaceInformation {
    #[serde(rename = "physical-interface", default)]
    pub interfaces: Vec<PhysicalInterface>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PhysicalInterface {
    pub name: String,
    #[serde(rename = "admin-status")]
    pub admin_status: String,
    #[serde(rename = "oper-status")]
    pub oper_status: String,
    pub description: String,
    #[serde(rename = "current-physical-address")]
    pub mac_address: String,
    #[serde(rename = "traffic-statistics")]
    pub stats: TrafficStatistics,
    #[serde(rename = "input-error-list")]
    pub input_errors: InputErrorList,
    #[serde(rename = "output-error-list")]
    pub output_errors: OutputErrorList,
    #[serde(rename = "logical-interface")]
    pub logical_interfaces: Vec<LogicalInterface>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogicalInterface {
    pub name: String,
    pub description: String,
    #[serde(rename = "traffic-statistics")]
    pub stats: TrafficStatistics,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TrafficStatistics {
    #[serde(rename = "input-bytes", deserialize_with = "empty_as_zero")]
    pub input_bytes: u64,
    #[serde(rename = "output-bytes", deserialize_with = "empty_as_zero")]
    pub output_bytes: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InputErrorList {
    #[serde(rename = "input-errors", deserialize_with = "empty_as_zero")]
    pub errors: u64,
    #[serde(rename = "input-drops", deserialize_with = "empty_as_zero")]
    pub drops: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputErrorList {
    #[serde(rename = "output-errors", deserialize_with = "empty_as_zero")]
    pub errors: u64,
    #[serde(rename = "output-drops", deserialize_with = "empty_as_zero")]
    pub drops: u64,
}
