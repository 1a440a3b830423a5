use std::sync::Arc;

/// Metric descriptor: name, help text and ordered label names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Desc {
    pub name: String,
    pub help: String,
    pub label_names: Vec<String>,
}

impl Desc {
    pub fn new(name: impl Into<String>, help: impl Into<String>, label_names: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            help: help.into(),
            label_names: label_names.iter().map(|l| l.to_string()).collect(),
        })
    }
}

/// One gauge sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub desc: Arc<Desc>,
    pub value: f64,
    /// Values in the order of `desc.label_names`.
    pub label_values: Vec<String>,
}

impl Metric {
    pub fn gauge(desc: &Arc<Desc>, value: f64, label_values: Vec<String>) -> Self {
        debug_assert_eq!(
            desc.label_names.len(),
            label_values.len(),
            "label count mismatch for {}",
            desc.name
        );
        Self {
            desc: Arc::clone(desc),
            value,
            label_values,
        }
    }

    /// Label value by name.
    pub fn label(&self, name: &str) -> Option<&str> {
        self.desc
            .label_names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.label_values.get(i))
            .map(String::as_str)
    }
}

pub(crate) fn bool_value(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

/// Appends a record's own label values to the caller's prefix.
pub(crate) fn with_labels(prefix: &[String], own: &[&str]) -> Vec<String> {
    let mut values = Vec::with_capacity(prefix.len() + own.len());
    values.extend_from_slice(prefix);
    values.extend(own.iter().map(|v| v.to_string()));
    values
}
