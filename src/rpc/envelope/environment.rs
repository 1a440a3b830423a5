//! `show chassis environment`

use serde::Deserialize;

use super::Temperature;

#[derive(Debug, Deserialize)]
pub struct EnvironmentReply {
    #[serde(rename = "environment-information")]
    pub information: EnvironmentInformation,
}

#[derive(Debug, Default, Deserialize)]
pub struct EnvironmentInformation {
    #[serde(rename = "environment-item", default)]
    pub items: Vec<EnvironmentItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EnvironmentItem {
    #[serde(default)]
    pub name: String,
    /// Absent for power supplies, fans and other non-thermal sensors.
    pub temperature: Option<Temperature>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::scenarios;
    use crate::rpc::envelope::decode;

    #[test]
    fn test_decode_environment() {
        let reply: EnvironmentReply = decode(scenarios::ENVIRONMENT.as_bytes()).unwrap();
        let items = reply.information.items;
        assert_eq!(items.len(), 5);

        assert_eq!(items[0].name, "Routing Engine 0");
        assert_eq!(items[0].temperature.as_ref().map(|t| t.celsius), Some(37.0));
        assert_eq!(items[2].name, "PEM 0");
        assert!(items[2].temperature.is_none());
    }
}
