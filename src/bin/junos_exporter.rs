//! junos_exporter - Junos telemetry exporter daemon.
//!
//! Scrapes every configured router on a fixed interval and writes the
//! Prometheus text exposition to a file for the node exporter's textfile
//! collector, or to stdout.

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tempfile::NamedTempFile;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use junos_exporter::config::{CollectorToggles, ExporterConfig, SshConfig, parse_targets};
use junos_exporter::connector::SshChannel;
use junos_exporter::exporter::{Exporter, exposition};

/// Junos telemetry exporter.
#[derive(Parser)]
#[command(name = "junos_exporter", about = "Junos telemetry exporter for Prometheus", version)]
struct Args {
    /// Comma-separated routers to scrape (host or host:port).
    #[arg(long, value_name = "HOSTS")]
    targets: String,

    /// SSH login name. Defaults to the OpenSSH configuration.
    #[arg(long, default_value = "")]
    ssh_user: String,

    /// SSH identity file.
    #[arg(long, value_name = "PATH")]
    ssh_keyfile: Option<PathBuf>,

    /// SSH port used for targets without an explicit port.
    #[arg(long, default_value = "22")]
    ssh_port: u16,

    /// SSH connect timeout in seconds.
    #[arg(long, default_value = "5")]
    ssh_timeout: u64,

    /// Regex; alarms whose description or type match are not counted.
    #[arg(long, default_value = "")]
    alarm_filter: String,

    /// Scrape BGP metrics.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    bgp: bool,

    /// Scrape OSPFv3 metrics.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    ospf: bool,

    /// Scrape ISIS metrics.
    #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
    isis: bool,

    /// Scrape routing table metrics.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    routes: bool,

    /// Scrape routing engine metrics.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    routing_engine: bool,

    /// Scrape environment metrics.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    environment: bool,

    /// Scrape optical interface diagnostics.
    #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
    ifdiag: bool,

    /// Scrape interval in seconds.
    #[arg(short, long, default_value = "30")]
    interval: u64,

    /// Textfile to write. Writes to stdout when absent.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Run a single scrape cycle and exit.
    #[arg(long)]
    once: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> ExporterConfig {
        ExporterConfig {
            targets: parse_targets(&self.targets),
            ssh: SshConfig {
                user: self.ssh_user.clone(),
                keyfile: self.ssh_keyfile.clone(),
                port: self.ssh_port,
                connect_timeout: Duration::from_secs(self.ssh_timeout),
            },
            alarm_filter: Some(self.alarm_filter.clone()),
            collectors: CollectorToggles {
                bgp: self.bgp,
                ospf: self.ospf,
                isis: self.isis,
                routes: self.routes,
                routing_engine: self.routing_engine,
                environment: self.environment,
                interface_diagnostics: self.ifdiag,
            },
            interval: Duration::from_secs(self.interval),
        }
    }
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is INFO. Use -q for quiet mode (errors only).
fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("junos_exporter={}", level)
            .parse()
            .context("invalid log directive")?,
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Replaces `path` with `contents` so readers never see a partial file.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path)
        .with_context(|| format!("renaming into {}", path.display()))?;
    Ok(())
}

fn run_cycle(exporter: &Exporter<SshChannel>, config: &ExporterConfig, output: Option<&Path>) -> Result<()> {
    let channels = config
        .targets
        .iter()
        .map(|target| SshChannel::new(target.as_str(), &config.ssh))
        .collect();

    let metrics: Vec<_> = exporter
        .scrape_all(channels)
        .into_iter()
        .flat_map(|report| report.metrics)
        .collect();
    let text = exposition::render(&metrics).context("encoding metrics")?;

    match output {
        Some(path) => {
            write_atomic(path, &text)?;
            debug!("wrote {} samples to {}", metrics.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet)?;

    let config = args.config();
    let alarm_filter = config.validate()?;

    let exporter: Exporter<SshChannel> = Exporter::new(&config.collectors, alarm_filter);

    info!("junos_exporter {} starting", env!("CARGO_PKG_VERSION"));
    info!(
        "Config: targets={}, interval={}s, collectors={}",
        config.targets.join(","),
        config.interval.as_secs(),
        exporter.collector_names().join(",")
    );

    if args.once {
        return run_cycle(&exporter, &config, args.output.as_deref());
    }

    // Setup graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }

    info!("Starting scrape loop");

    while running.load(Ordering::SeqCst) {
        let started = Instant::now();
        if let Err(e) = run_cycle(&exporter, &config, args.output.as_deref()) {
            error!("Scrape cycle failed: {:#}", e);
        }

        // Sleep with periodic checks for shutdown signal
        let sleep_interval = Duration::from_millis(100);
        let mut remaining = config.interval.saturating_sub(started.elapsed());
        while remaining > Duration::ZERO && running.load(Ordering::SeqCst) {
            let sleep_time = remaining.min(sleep_interval);
            std::thread::sleep(sleep_time);
            remaining = remaining.saturating_sub(sleep_time);
        }
    }

    info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_to_config() {
        let args = Args::parse_from([
            "junos_exporter",
            "--targets",
            "r1,r2:2222",
            "--ssh-user",
            "exporter",
            "--isis",
            "true",
            "--bgp",
            "false",
            "--alarm-filter",
            "Fan",
        ]);
        let config = args.config();

        assert_eq!(config.targets, ["r1", "r2:2222"]);
        assert_eq!(config.ssh.user, "exporter");
        assert_eq!(config.ssh.port, 22);
        assert!(config.collectors.isis);
        assert!(!config.collectors.bgp);
        assert!(config.collectors.ospf);
        assert!(!config.collectors.interface_diagnostics);
        assert_eq!(config.interval, Duration::from_secs(30));
        assert!(config.validate().unwrap().is_active());
    }

    #[test]
    fn test_write_atomic_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junos.prom");

        write_atomic(&path, "junos_up{target=\"r1\"} 1\n").unwrap();
        write_atomic(&path, "junos_up{target=\"r1\"} 0\n").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "junos_up{target=\"r1\"} 0\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
