//! Normalized domain records.
//!
//! Records are plain values built fresh on every collection cycle from a
//! decoded reply. They carry no XML or exposition concerns.

mod chassis;
mod interface;
mod routing;

pub use chassis::{AlarmCounter, EnvironmentItem, RouteEngineStats};
pub use interface::{InterfaceDiagnostics, InterfaceStats, PhysicalCounters, RxPower};
pub use routing::{BgpSession, IsisAdjacencies, OspfArea, ProtocolRouteCount, RoutingTable};
