use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::axis::{LimitLine, YAxisConfig, compute_axis_values};
use crate::error::{AxisError, AxisResult};

pub type AxisLabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Value axis model: styling plus the ordered tick values of the current pass.
#[derive(Clone, Default)]
pub struct YAxis {
    pub config: YAxisConfig,
    entries: Vec<f64>,
    decimals: usize,
    label_formatter: Option<AxisLabelFormatterFn>,
}

impl YAxis {
    #[must_use]
    pub fn new(config: YAxisConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            decimals: 0,
            label_formatter: None,
        }
    }

    /// Replaces tick values directly, keeping the current label precision.
    #[must_use]
    pub fn with_entries(mut self, entries: Vec<f64>) -> Self {
        self.entries = entries;
        self
    }

    pub fn set_entries(&mut self, entries: Vec<f64>, decimals: usize) {
        self.entries = entries;
        self.decimals = decimals;
    }

    /// Recomputes tick values and label precision for `[min, max]`.
    pub fn set_range(&mut self, min: f64, max: f64) -> AxisResult<()> {
        if !min.is_finite() || !max.is_finite() {
            return Err(AxisError::InvalidData(
                "axis range must be finite".to_owned(),
            ));
        }
        let values = compute_axis_values(
            min,
            max,
            self.config.label_count,
            self.config.force_label_count,
            self.config.granularity,
        );
        debug!(
            min,
            max,
            entry_count = values.entries.len(),
            decimals = values.decimals,
            "computed axis values"
        );
        self.entries = values.entries;
        self.decimals = values.decimals;
        Ok(())
    }

    #[must_use]
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn set_label_formatter(&mut self, formatter: AxisLabelFormatterFn) {
        self.label_formatter = Some(formatter);
    }

    pub fn clear_label_formatter(&mut self) {
        self.label_formatter = None;
    }

    /// Label text for tick `index`; empty when the index is out of range.
    #[must_use]
    pub fn formatted_label(&self, index: usize) -> String {
        let Some(&value) = self.entries.get(index) else {
            return String::new();
        };
        match &self.label_formatter {
            Some(formatter) => formatter(value),
            None => format_with_decimals(value, self.decimals),
        }
    }

    #[must_use]
    pub fn limit_lines(&self) -> &[LimitLine] {
        &self.config.limit_lines
    }

    pub fn add_limit_line(&mut self, line: LimitLine) {
        self.config.limit_lines.push(line);
    }

    pub fn remove_all_limit_lines(&mut self) {
        self.config.limit_lines.clear();
    }
}

impl fmt::Debug for YAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YAxis")
            .field("config", &self.config)
            .field("entries", &self.entries)
            .field("decimals", &self.decimals)
            .field("has_label_formatter", &self.label_formatter.is_some())
            .finish()
    }
}

fn format_with_decimals(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    // "-0" and "-0.00" read as noise on an axis.
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_owned()
    } else {
        text
    }
}
