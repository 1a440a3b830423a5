//! Prometheus text exposition.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};

use crate::collector::Metric;

/// Encodes `metrics` in the Prometheus text format.
///
/// A fresh registry is built per call, so samples from a previous cycle never
/// leak into the output. Samples sharing a descriptor name are grouped into
/// one metric family.
pub fn render(metrics: &[Metric]) -> Result<String, prometheus::Error> {
    let registry = Registry::new();
    let mut families: HashMap<&str, GaugeVec> = HashMap::new();

    for metric in metrics {
        let gauge = match families.entry(metric.desc.name.as_str()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let labels: Vec<&str> = metric.desc.label_names.iter().map(String::as_str).collect();
                let family = GaugeVec::new(
                    Opts::new(metric.desc.name.clone(), metric.desc.help.clone()),
                    &labels,
                )?;
                registry.register(Box::new(family.clone()))?;
                entry.insert(family)
            }
        };

        let values: Vec<&str> = metric.label_values.iter().map(String::as_str).collect();
        gauge
            .get_metric_with_label_values(&values)?
            .set(metric.value);
    }

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::Desc;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render_groups_families() {
        let neighbors = Desc::new("junos_ospf3_neighbors", "Number of neighbors", &["target", "area"]);
        let up = Desc::new("junos_up", "Scrape of target was successful", &["target"]);
        let metrics = vec![
            Metric::gauge(&up, 1.0, labels(&["r1"])),
            Metric::gauge(&neighbors, 2.0, labels(&["r1", "0.0.0.0"])),
            Metric::gauge(&neighbors, 1.0, labels(&["r1", "0.0.0.1"])),
            Metric::gauge(&up, 0.0, labels(&["r2"])),
        ];

        let text = render(&metrics).unwrap();
        assert_eq!(text.matches("# TYPE junos_ospf3_neighbors gauge").count(), 1);
        assert!(text.contains("# HELP junos_up Scrape of target was successful"));
        assert!(text.contains(r#"junos_ospf3_neighbors{area="0.0.0.0",target="r1"} 2"#));
        assert!(text.contains(r#"junos_ospf3_neighbors{area="0.0.0.1",target="r1"} 1"#));
        assert!(text.contains(r#"junos_up{target="r1"} 1"#));
        assert!(text.contains(r#"junos_up{target="r2"} 0"#));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]).unwrap(), "");
    }

    #[test]
    fn test_render_rejects_label_mismatch() {
        let desc = Desc::new("junos_isis_up_count", "Number of ISIS adjacencies in state up", &["target"]);
        let metric = Metric {
            desc,
            value: 1.0,
            label_values: labels(&["r1", "extra"]),
        };
        assert!(render(&[metric]).is_err());
    }
}
