//! junos_exporter - Junos device telemetry for Prometheus.
//!
//! The library turns CLI commands run over SSH on a Junos router into
//! Prometheus gauges:
//!
//! - [`connector`] - command channel to one device (OpenSSH or mock)
//! - [`rpc`] - command dispatch, XML envelope decoding and record mapping
//! - [`model`] - normalized domain records
//! - [`collector`] - per-domain descriptors and sample emission
//! - [`exporter`] - scrape orchestration, self-metrics and text exposition
//! - [`config`] - exporter configuration
//!
//! ```
//! use junos_exporter::config::CollectorToggles;
//! use junos_exporter::connector::MockChannel;
//! use junos_exporter::exporter::{Exporter, exposition};
//! use junos_exporter::rpc::AlarmFilter;
//!
//! let exporter = Exporter::new(&CollectorToggles::default(), AlarmFilter::none());
//! let report = exporter.scrape(MockChannel::typical_router("r1"));
//! let text = exposition::render(&report.metrics).unwrap();
//! assert!(text.contains(r#"junos_up{target="r1"} 1"#));
//! ```

pub mod collector;
pub mod config;
pub mod connector;
pub mod exporter;
pub mod model;
pub mod rpc;
