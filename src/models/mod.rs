pub mod config;
pub mod goal;
pub mod measurement;
pub mod metric;
pub mod rate;
pub mod series;

pub use goal::Goal;
pub use measurement::{Measurement, Sex};
pub use metric::BodyMetric;
pub use series::{MetricSeries, Projection, RequiredMode, SeriesKind, SeriesPoint};
