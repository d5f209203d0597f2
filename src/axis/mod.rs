mod config;
mod ticks;
mod y_axis;

pub use config::{
    AXIS_CONFIG_JSON_SCHEMA_V1, AxisDependency, IndicatorBlockStyle, LimitLabelPosition,
    LimitLine, YAxisConfig, YAxisLabelPosition,
};
pub use ticks::{AxisValues, compute_axis_values, decimals_for_interval, round_to_next_significant};
pub use y_axis::{AxisLabelFormatterFn, YAxis};
