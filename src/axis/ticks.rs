/// Tick entries and label precision derived from an axis range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisValues {
    pub entries: Vec<f64>,
    pub decimals: usize,
}

/// Computes "nice" tick values covering `[min, max]`.
///
/// The raw interval `range / label_count` is rounded to one significant digit,
/// raised to `granularity` when set, and snapped up to the next power of ten
/// when its leading digit exceeds 5. With `force_label_count` the range is
/// split into exactly `label_count` evenly spaced entries instead.
#[must_use]
pub fn compute_axis_values(
    min: f64,
    max: f64,
    label_count: usize,
    force_label_count: bool,
    granularity: Option<f64>,
) -> AxisValues {
    let range = (max - min).abs();
    if label_count == 0 || !range.is_finite() || range <= 0.0 || !min.is_finite() {
        return AxisValues::default();
    }
    let (low, high) = if min <= max { (min, max) } else { (max, min) };

    let raw_interval = range / label_count as f64;
    let mut interval = round_to_next_significant(raw_interval);
    if let Some(granularity) = granularity.filter(|g| g.is_finite() && *g > 0.0) {
        interval = interval.max(granularity);
    }

    let magnitude = 10f64.powf(interval.log10().floor());
    let leading_digit = (interval / magnitude) as i64;
    if leading_digit > 5 {
        interval = 10.0 * magnitude;
    }

    let entries = if force_label_count {
        let count = label_count.max(2);
        interval = range / (count - 1) as f64;
        (0..count)
            .map(|i| normalize_zero(low + i as f64 * interval))
            .collect()
    } else {
        let first = (low / interval).ceil() * interval;
        let last = (high / interval).floor() * interval;
        if last < first {
            Vec::new()
        } else {
            // Tolerance keeps `last` when the division lands a hair below an integer.
            let steps = ((last - first) / interval + 1e-9).floor() as usize;
            (0..=steps)
                .map(|i| normalize_zero(first + i as f64 * interval))
                .collect()
        }
    };

    AxisValues {
        entries,
        decimals: decimals_for_interval(interval),
    }
}

/// Rounds to one significant digit: 16.7 -> 20, 0.234 -> 0.2.
#[must_use]
pub fn round_to_next_significant(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return 0.0;
    }
    let digits = value.abs().log10().ceil();
    let power = 1.0 - digits;
    let magnitude = 10f64.powf(power);
    (value * magnitude).round() / magnitude
}

#[must_use]
pub fn decimals_for_interval(interval: f64) -> usize {
    if !interval.is_finite() || interval <= 0.0 || interval >= 1.0 {
        return 0;
    }
    (-interval.log10()).ceil().max(0.0) as usize
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
