//! Envelope to record mapping rules.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::envelope::{
    alarm::AlarmInformation, bgp::BgpInformation, environment::EnvironmentInformation,
    interface_diagnostics::DiagnosticsInformation, interfaces::InterfaceInformation,
    isis::IsisInformation, ospf::Ospf3Information, route::RouteSummaryInformation,
    routing_engine::RouteEngineInformation,
};
use super::filter::AlarmFilter;
use crate::model::{
    AlarmCounter, BgpSession, EnvironmentItem, InterfaceDiagnostics, InterfaceStats, IsisAdjacencies,
    OspfArea, PhysicalCounters, ProtocolRouteCount, RouteEngineStats, RoutingTable, RxPower,
};

const OPTICS_NOT_AVAILABLE: &str = "N/A";

/// Adds unfiltered Major and Minor alarms to `counter`. Other classes are ignored.
pub(super) fn count_alarms(info: &AlarmInformation, filter: &AlarmFilter, counter: &mut AlarmCounter) {
    for detail in &info.details {
        if filter.should_filter(&detail.description, &detail.alarm_type) {
            trace!("alarm filtered: {}", detail.description);
            continue;
        }

        match detail.class.as_str() {
            "Major" => counter.red += 1,
            "Minor" => counter.yellow += 1,
            _ => {}
        }
    }
}

/// Emits each physical interface followed by its logical units.
pub(super) fn interface_stats(info: InterfaceInformation) -> Vec<InterfaceStats> {
    let mut stats = Vec::with_capacity(info.interfaces.len());

    for phy in info.interfaces {
        let mut counters =
            PhysicalCounters::with_status(phy.admin_status == "up", phy.oper_status == "up");
        counters.receive_errors = phy.input_errors.errors;
        counters.receive_drops = phy.input_errors.drops;
        counters.transmit_errors = phy.output_errors.errors;
        counters.transmit_drops = phy.output_errors.drops;

        stats.push(InterfaceStats {
            name: phy.name,
            description: phy.description,
            mac: phy.mac_address.clone(),
            receive_bytes: phy.stats.input_bytes,
            transmit_bytes: phy.stats.output_bytes,
            physical: Some(counters),
        });

        for logical in phy.logical_interfaces {
            stats.push(InterfaceStats {
                name: logical.name,
                description: logical.description,
                mac: phy.mac_address.clone(),
                receive_bytes: logical.stats.input_bytes,
                transmit_bytes: logical.stats.output_bytes,
                physical: None,
            });
        }
    }

    stats
}

/// Prefix counters come from the peer's last RIB; peers without one report zero.
pub(super) fn bgp_sessions(info: BgpInformation) -> Vec<BgpSession> {
    info.peers
        .into_iter()
        .map(|peer| {
            let rib = peer.ribs.last();
            BgpSession {
                up: peer.state == "Established",
                ip: peer.ip,
                asn: peer.asn,
                flaps: peer.flaps,
                input_messages: peer.input_messages,
                output_messages: peer.output_messages,
                accepted_prefixes: rib.map_or(0, |r| r.accepted_prefixes),
                active_prefixes: rib.map_or(0, |r| r.active_prefixes),
                received_prefixes: rib.map_or(0, |r| r.received_prefixes),
                rejected_prefixes: rib.map_or(0, |r| r.rejected_prefixes),
            }
        })
        .collect()
}

pub(super) fn ospf_areas(info: Ospf3Information) -> Vec<OspfArea> {
    info.areas()
        .map(|area| OspfArea {
            name: area.name,
            neighbors: area.neighbors.up,
        })
        .collect()
}

pub(super) fn isis_adjacencies(info: &IsisInformation) -> IsisAdjacencies {
    let mut adjacencies = IsisAdjacencies::default();
    for adjacency in &info.adjacencies {
        if adjacency.state == "Up" {
            adjacencies.up += 1;
        }
        adjacencies.total += 1;
    }
    adjacencies
}

pub(super) fn routing_tables(info: RouteSummaryInformation) -> Vec<RoutingTable> {
    info.tables
        .into_iter()
        .map(|table| RoutingTable {
            name: table.name,
            max_routes: table.max_routes,
            active_routes: table.active_routes,
            total_routes: table.total_routes,
            protocols: table
                .protocols
                .into_iter()
                .map(|proto| ProtocolRouteCount {
                    name: proto.name,
                    routes: proto.routes,
                    active_routes: proto.active_routes,
                })
                .collect(),
        })
        .collect()
}

/// Uses the first routing engine listed, which is the primary slot.
pub(super) fn route_engine_stats(info: &RouteEngineInformation) -> RouteEngineStats {
    let Some(re) = info.route_engines.first() else {
        debug!("reply lists no routing engine");
        return RouteEngineStats::default();
    };

    RouteEngineStats {
        temperature: re.temperature.celsius,
        cpu_temperature: re.cpu_temperature.celsius,
        memory_utilization: re.memory_utilization,
        cpu_user: re.cpu_user,
        cpu_background: re.cpu_background,
        cpu_system: re.cpu_system,
        cpu_interrupt: re.cpu_interrupt,
        cpu_idle: re.cpu_idle,
        load_average_one: re.load_average_one,
        load_average_five: re.load_average_five,
        load_average_fifteen: re.load_average_fifteen,
    }
}

/// Keeps one reading per sensor name, the last one reported.
pub(super) fn environment_items(info: EnvironmentInformation) -> Vec<EnvironmentItem> {
    let mut readings: HashMap<String, f64> = HashMap::new();
    for item in info.items {
        match item.temperature {
            Some(temperature) => {
                readings.insert(item.name, temperature.celsius);
            }
            None => trace!("{} has no temperature reading", item.name),
        }
    }

    readings
        .into_iter()
        .map(|(name, temperature)| EnvironmentItem { name, temperature })
        .collect()
}

pub(super) fn interface_diagnostics(info: DiagnosticsInformation) -> Vec<InterfaceDiagnostics> {
    let mut diagnostics = Vec::with_capacity(info.diagnostics.len());

    for port in info.diagnostics {
        let optics = port.optics;
        if optics.not_available == OPTICS_NOT_AVAILABLE {
            trace!("{} has no optics diagnostics", port.name);
            continue;
        }

        let rx = if optics.module_voltage > 0.0 {
            RxPower::SignalAverage {
                module_voltage: optics.module_voltage,
                power: optics.rx_signal_avg_optical_power,
                power_dbm: parse_dbm(&port.name, &optics.rx_signal_avg_optical_power_dbm),
            }
        } else {
            RxPower::LaserRx {
                power: optics.laser_rx_optical_power,
                power_dbm: parse_dbm(&port.name, &optics.laser_rx_optical_power_dbm),
            }
        };

        diagnostics.push(InterfaceDiagnostics {
            laser_output_power_dbm: parse_dbm(&port.name, &optics.laser_output_power_dbm),
            name: port.name,
            laser_bias_current: optics.laser_bias_current,
            laser_output_power: optics.laser_output_power,
            module_temperature: optics.module_temperature.celsius,
            rx,
        });
    }

    diagnostics
}

/// Parses a dBm reading, yielding 0 for values such as `- Inf`.
fn parse_dbm(interface: &str, value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(dbm) => dbm,
        Err(_) => {
            debug!("{}: unparseable dBm value {:?}", interface, value);
            0.0
        }
    }
}
