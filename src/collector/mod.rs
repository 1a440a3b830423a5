//! Domain collectors: records in, gauge samples out.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Exporter                            │
//! │   label prefix [target]                                      │
//! │        │                                                     │
//! │  ┌─────▼──────────────┐  ┌───────────────┐  ┌─────────────┐  │
//! │  │ InterfaceCollector │  │ BgpCollector  │  │     ...     │  │
//! │  │ describe / collect │  │               │  │             │  │
//! │  └─────┬──────────────┘  └──────┬────────┘  └──────┬──────┘  │
//! │        └────────────────┬───────┴─────────────────┘          │
//! │                         │                                    │
//! │                ┌────────▼─────────┐                          │
//! │                │   *Datasource    │ (traits)                 │
//! │                └────────┬─────────┘                          │
//! └─────────────────────────┼────────────────────────────────────┘
//!                           │
//!                ┌──────────┴──────────┐
//!                │                     │
//!         ┌──────▼──────┐       ┌──────▼──────┐
//!         │  RpcClient  │       │  Fixtures   │
//!         │ (device)    │       │ (testing)   │
//!         └─────────────┘       └─────────────┘
//! ```
//!
//! A collector calls its datasource once per scrape. An error aborts that
//! collector only: it emits nothing and the caller moves on to the next one.
//! Every sample's label values are the caller's prefix followed by the
//! record's own labels, in descriptor order.
//!
//! # Usage
//!
//! ```
//! use junos_exporter::collector::{Collector, InterfaceCollector};
//! use junos_exporter::connector::MockChannel;
//! use junos_exporter::rpc::{AlarmFilter, RpcClient};
//!
//! let client = RpcClient::new(MockChannel::typical_router("r1"), AlarmFilter::none());
//! let mut samples = Vec::new();
//! InterfaceCollector::new()
//!     .collect(&client, &mut samples, &["r1".to_string()])
//!     .unwrap();
//! assert!(samples.iter().all(|m| m.label("target") == Some("r1")));
//! ```

mod alarm;
mod bgp;
pub mod datasource;
mod environment;
mod interface;
mod interface_diagnostics;
mod isis;
mod metric;
mod ospf;
mod route;
mod routing_engine;

use std::sync::Arc;

pub use alarm::AlarmCollector;
pub use bgp::BgpCollector;
pub use environment::EnvironmentCollector;
pub use interface::InterfaceCollector;
pub use interface_diagnostics::InterfaceDiagnosticsCollector;
pub use isis::IsisCollector;
pub use metric::{Desc, Metric};
pub use ospf::OspfCollector;
pub use route::RouteCollector;
pub use routing_engine::RoutingEngineCollector;

use crate::rpc::RpcError;

/// Turns one domain's records into samples.
pub trait Collector<D: ?Sized>: Send + Sync {
    /// Short name used in logs and the `collector` label.
    fn name(&self) -> &'static str;

    /// Every descriptor this collector may emit.
    fn describe(&self) -> Vec<Arc<Desc>>;

    /// Fetches records from `datasource` and appends their samples to `sink`.
    ///
    /// Nothing is appended when the datasource fails.
    fn collect(
        &self,
        datasource: &D,
        sink: &mut Vec<Metric>,
        label_values: &[String],
    ) -> Result<(), RpcError>;
}
