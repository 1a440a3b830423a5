//! `show system alarms` / `show chassis alarms`

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AlarmReply {
    #[serde(rename = "alarm-information")]
    pub information: AlarmInformation,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlarmInformation {
    #[serde(rename = "alarm-detail", default)]
    pub details: Vec<AlarmDetail>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AlarmDetail {
    #[serde(rename = "alarm-class")]
    pub class: String,
    #[serde(rename = "alarm-description")]
    pub description: String,
    #[serde(rename = "alarm-type")]
    pub alarm_type: String,
}
