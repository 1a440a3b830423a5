//! Scrape orchestration.
//!
//! An [`Exporter`] owns the enabled collectors and runs them against one
//! [`RpcClient`] per target. Each target gets its own channel, so the
//! one-command-at-a-time rule of [`CommandChannel`] holds even when targets
//! are scraped in parallel.

pub mod exposition;

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::collector::{
    AlarmCollector, BgpCollector, Collector, Desc, EnvironmentCollector, InterfaceCollector,
    InterfaceDiagnosticsCollector, IsisCollector, Metric, OspfCollector, RouteCollector,
    RoutingEngineCollector,
};
use crate::config::CollectorToggles;
use crate::connector::CommandChannel;
use crate::rpc::{AlarmFilter, RpcClient};

/// Samples gathered from one target in one cycle.
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub target: String,
    pub metrics: Vec<Metric>,
    /// Collectors whose datasource call failed.
    pub failed: Vec<&'static str>,
}

impl ScrapeReport {
    /// True when at least one collector succeeded.
    pub fn is_up(&self, attempted: usize) -> bool {
        self.failed.len() < attempted
    }
}

pub struct Exporter<C: CommandChannel + 'static> {
    collectors: Vec<Box<dyn Collector<RpcClient<C>>>>,
    alarm_filter: AlarmFilter,
    up: Arc<Desc>,
    collector_duration: Arc<Desc>,
}

impl<C: CommandChannel + 'static> Exporter<C> {
    /// Builds the collector list: interfaces and alarms, then every enabled
    /// optional collector in a fixed order.
    pub fn new(toggles: &CollectorToggles, alarm_filter: AlarmFilter) -> Self {
        let mut collectors: Vec<Box<dyn Collector<RpcClient<C>>>> = vec![
            Box::new(InterfaceCollector::new()),
            Box::new(AlarmCollector::new()),
        ];
        if toggles.bgp {
            collectors.push(Box::new(BgpCollector::new()));
        }
        if toggles.ospf {
            collectors.push(Box::new(OspfCollector::new()));
        }
        if toggles.isis {
            collectors.push(Box::new(IsisCollector::new()));
        }
        if toggles.routes {
            collectors.push(Box::new(RouteCollector::new()));
        }
        if toggles.routing_engine {
            collectors.push(Box::new(RoutingEngineCollector::new()));
        }
        if toggles.environment {
            collectors.push(Box::new(EnvironmentCollector::new()));
        }
        if toggles.interface_diagnostics {
            collectors.push(Box::new(InterfaceDiagnosticsCollector::new()));
        }

        Self {
            collectors,
            alarm_filter,
            up: Desc::new("junos_up", "Scrape of target was successful", &["target"]),
            collector_duration: Desc::new(
                "junos_collector_duration_seconds",
                "Duration of a collector scrape for one target",
                &["target", "collector"],
            ),
        }
    }

    pub fn collector_names(&self) -> Vec<&'static str> {
        self.collectors.iter().map(|c| c.name()).collect()
    }

    /// Every descriptor the exporter may emit, self-metrics included.
    pub fn describe(&self) -> Vec<Arc<Desc>> {
        let mut descs = vec![Arc::clone(&self.up), Arc::clone(&self.collector_duration)];
        for collector in &self.collectors {
            descs.extend(collector.describe());
        }
        descs
    }

    /// Runs every collector against `channel`'s target.
    ///
    /// Once a collector finds the device unreachable the remaining collectors
    /// are counted as failed without being run.
    pub fn scrape(&self, channel: C) -> ScrapeReport {
        let client = RpcClient::new(channel, self.alarm_filter.clone());
        let target = client.host().to_string();
        let label_values = vec![target.clone()];

        let mut metrics = Vec::new();
        let mut failed = Vec::new();

        for (i, collector) in self.collectors.iter().enumerate() {
            let start = Instant::now();
            let mut samples = Vec::new();

            let unreachable = match collector.collect(&client, &mut samples, &label_values) {
                Ok(()) => {
                    debug!("{}: {} collected {} samples", target, collector.name(), samples.len());
                    metrics.append(&mut samples);
                    false
                }
                Err(e) => {
                    warn!("{}: {} collector failed: {}", target, collector.name(), e);
                    failed.push(collector.name());
                    e.is_unreachable()
                }
            };

            metrics.push(Metric::gauge(
                &self.collector_duration,
                start.elapsed().as_secs_f64(),
                vec![target.clone(), collector.name().to_string()],
            ));

            if unreachable {
                let skipped = &self.collectors[i + 1..];
                if !skipped.is_empty() {
                    warn!("{}: unreachable, skipping {} collectors", target, skipped.len());
                }
                failed.extend(skipped.iter().map(|c| c.name()));
                break;
            }
        }

        let up = failed.len() < self.collectors.len();
        metrics.push(Metric::gauge(&self.up, if up { 1.0 } else { 0.0 }, label_values));

        ScrapeReport {
            target,
            metrics,
            failed,
        }
    }

    /// Scrapes every target concurrently, one thread per channel.
    ///
    /// Reports come back in the order of `channels`.
    pub fn scrape_all(&self, channels: Vec<C>) -> Vec<ScrapeReport> {
        let started = Instant::now();

        let reports: Vec<ScrapeReport> = thread::scope(|s| {
            let handles: Vec<_> = channels
                .into_iter()
                .map(|channel| {
                    let target = channel.host().to_string();
                    (target, s.spawn(move || self.scrape(channel)))
                })
                .collect();

            handles
                .into_iter()
                .map(|(target, handle)| {
                    handle.join().unwrap_or_else(|_| {
                        warn!("{}: scrape thread panicked", target);
                        self.down_report(target)
                    })
                })
                .collect()
        });

        let up = reports
            .iter()
            .filter(|r| r.is_up(self.collectors.len()))
            .count();
        info!(
            "scraped {} targets ({} up) in {:.2}s",
            reports.len(),
            up,
            started.elapsed().as_secs_f64()
        );

        reports
    }

    fn down_report(&self, target: String) -> ScrapeReport {
        ScrapeReport {
            metrics: vec![Metric::gauge(&self.up, 0.0, vec![target.clone()])],
            failed: self.collector_names(),
            target,
        }
    }
}
