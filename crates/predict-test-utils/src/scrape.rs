//! Parsing of the Prometheus text exposition format for test assertions.
//!
//! Only the sample lines are kept; `# HELP` and `# TYPE` lines are skipped.

use std::collections::BTreeMap;

/// One sample line: `name{label="value",...} value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: String,
    pub labels: BTreeMap<String, String>,
    pub value: f64,
}

impl Sample {
    /// True when every `(key, value)` pair is present on this sample.
    pub fn has_labels(&self, labels: &[(&str, &str)]) -> bool {
        labels
            .iter()
            .all(|(k, v)| self.labels.get(*k).is_some_and(|actual| actual == v))
    }
}

/// Parsed `/metrics` output.
#[derive(Debug, Clone, Default)]
pub struct MetricsScrape {
    samples: Vec<Sample>,
}

impl MetricsScrape {
    /// Parse exposition text. Lines that do not look like samples are ignored.
    pub fn parse(text: &str) -> Self {
        let samples = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(parse_sample)
            .collect();

        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Value of the first sample named `name` carrying all of `labels`.
    pub fn sample(&self, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
        self.samples
            .iter()
            .find(|s| s.name == name && s.has_labels(labels))
            .map(|s| s.value)
    }

    /// Counter value for `name` with `labels`.
    pub fn counter(&self, name: &str, labels: &[(&str, &str)]) -> Option<u64> {
        self.sample(name, labels).map(|v| v as u64)
    }

    /// Number of observations of histogram `name` with `labels`.
    pub fn histogram_count(&self, name: &str, labels: &[(&str, &str)]) -> Option<u64> {
        self.counter(&format!("{name}_count"), labels)
    }

    /// Sum of observations of histogram `name` with `labels`.
    pub fn histogram_sum(&self, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
        self.sample(&format!("{name}_sum"), labels)
    }
}

fn parse_sample(line: &str) -> Option<Sample> {
    let (series, value) = match line.find('{') {
        Some(open) => {
            let close = line.rfind('}')?;
            let name = line.get(..open)?;
            let labels = parse_labels(line.get(open + 1..close)?)?;
            let value = line.get(close + 1..)?;
            ((name, labels), value)
        }
        None => {
            let (name, value) = line.split_once(' ')?;
            ((name, BTreeMap::new()), value)
        }
    };

    // A trailing timestamp, when present, follows the value.
    let value = value.split_whitespace().next()?;
    let value = match value {
        "+Inf" => f64::INFINITY,
        "-Inf" => f64::NEG_INFINITY,
        other => other.parse().ok()?,
    };

    Some(Sample {
        name: series.0.trim().to_string(),
        labels: series.1,
        value,
    })
}

fn parse_labels(body: &str) -> Option<BTreeMap<String, String>> {
    let mut labels = BTreeMap::new();
    let mut chars = body.chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| *c == ',' || c.is_whitespace()) {
            chars.next();
        }
        if chars.peek().is_none() {
            return Some(labels);
        }

        let mut key = String::new();
        for c in chars.by_ref() {
            if c == '=' {
                break;
            }
            key.push(c);
        }

        if chars.next()? != '"' {
            return None;
        }

        let mut value = String::new();
        loop {
            match chars.next()? {
                '\\' => match chars.next()? {
                    'n' => value.push('\n'),
                    other => value.push(other),
                },
                '"' => break,
                c => value.push(c),
            }
        }

        labels.insert(key.trim().to_string(), value);
    }
}
