//! XML envelope schemas for `| display xml` replies.
//!
//! Each submodule mirrors the element structure of one command's reply. The
//! `<rpc-reply>` root is unnamed in the schema; its domain element (for
//! example `<interface-information>`) is required, so a reply from the wrong
//! command or an error page fails to decode. Everything below the domain
//! element defaults to zero or empty when the device omits it.
//!
//! Numeric elements that are present but empty (`<input-bytes/>`) read as
//! zero, see [`empty_as_zero`]. Text that is not a number still fails.
//!
//! Names match on the local part only: `junos:celsius` is read as `@celsius`
//! and the namespace declarations the device adds are ignored along with any
//! element the schema does not list.

pub mod alarm;
pub mod bgp;
pub mod environment;
pub mod interface_diagnostics;
pub mod interfaces;
pub mod isis;
pub mod ospf;
pub mod route;
pub mod routing_engine;

use std::fmt::Display;
use std::str::FromStr;

use quick_xml::DeError;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};

/// Temperature element such as
/// `<temperature junos:celsius="38">38 degrees C / 100 degrees F</temperature>`.
///
/// Only the attribute is read; the text is a display form of the same value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Temperature {
    #[serde(rename = "@celsius", default, deserialize_with = "empty_as_zero")]
    pub celsius: f64,
}

/// Parses a numeric element or attribute, reading empty text as zero.
pub fn empty_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let text = String::deserialize(deserializer)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(T::default());
    }
    text.parse().map_err(de::Error::custom)
}

/// Decodes a complete reply document into envelope `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DeError> {
    quick_xml::de::from_reader(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sensor {
        temperature: Temperature,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Counters {
        #[serde(deserialize_with = "empty_as_zero")]
        packets: u64,
        #[serde(deserialize_with = "empty_as_zero")]
        load: f64,
    }

    #[test]
    fn test_decode_temperature_attribute() {
        let xml = r#"<rpc-reply xmlns:junos="http://xml.juniper.net/junos/18.2R1/junos">
            <temperature junos:celsius="38">38 degrees C / 100 degrees F</temperature>
        </rpc-reply>"#;

        let sensor: Sensor = decode(xml.as_bytes()).unwrap();
        assert_eq!(sensor.temperature.celsius, 38.0);
    }

    #[test]
    fn test_empty_numeric_text_is_zero() {
        let xml = "<rpc-reply><packets/><load></load></rpc-reply>";
        let counters: Counters = decode(xml.as_bytes()).unwrap();
        assert_eq!(counters.packets, 0);
        assert_eq!(counters.load, 0.0);

        let xml = "<rpc-reply><packets>\n42\n</packets><load> 0.25 </load></rpc-reply>";
        let counters: Counters = decode(xml.as_bytes()).unwrap();
        assert_eq!(counters.packets, 42);
        assert_eq!(counters.load, 0.25);
    }

    #[test]
    fn test_non_numeric_text_fails() {
        let xml = "<rpc-reply><packets>many</packets></rpc-reply>";
        let result: Result<Counters, _> = decode(xml.as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_temperature_attribute_is_zero() {
        let xml = r#"<rpc-reply><temperature junos:celsius="">n/a</temperature></rpc-reply>"#;
        let sensor: Sensor = decode(xml.as_bytes()).unwrap();
        assert_eq!(sensor.temperature.celsius, 0.0);
    }

    #[test]
    fn test_decode_malformed() {
        let result: Result<Sensor, _> = decode(b"<rpc-reply><temperature>");
        assert!(result.is_err());
    }
}
