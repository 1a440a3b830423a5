//! CLI commands issued for each telemetry domain.
//!
//! Every command is sent with [`XML_OUTPUT_DIRECTIVE`] appended so the device
//! answers with a structured `<rpc-reply>` document instead of text.

pub const SYSTEM_ALARMS: &str = "show system alarms";
pub const CHASSIS_ALARMS: &str = "show chassis alarms";
pub const INTERFACES: &str = "show interfaces statistics detail";
pub const BGP: &str = "show bgp summary";
pub const OSPF: &str = "show ospf3 overview";
pub const ISIS: &str = "show isis adjacency";
pub const ROUTES: &str = "show route summary";
pub const ROUTING_ENGINE: &str = "show chassis routing-engine";
pub const ENVIRONMENT: &str = "show chassis environment";
pub const INTERFACE_DIAGNOSTICS: &str = "show interfaces diagnostics optics";

/// Every command the client may issue.
pub const ALL: [&str; 10] = [
    SYSTEM_ALARMS,
    CHASSIS_ALARMS,
    INTERFACES,
    BGP,
    OSPF,
    ISIS,
    ROUTES,
    ROUTING_ENGINE,
    ENVIRONMENT,
    INTERFACE_DIAGNOSTICS,
];

/// Output modifier requesting an XML reply.
pub const XML_OUTPUT_DIRECTIVE: &str = " | display xml";

/// Returns `command` with the XML output directive appended.
pub fn with_xml_output(command: &str) -> String {
    format!("{}{}", command, XML_OUTPUT_DIRECTIVE)
}
