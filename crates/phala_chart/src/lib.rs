//! Chart construction for the phala prediction engine.
//!
//! - [`compute_chart`] / [`compute_chart_with_phases`]: ephemeris plus classification
//! - [`normalize_chart`]: tolerant import of heterogeneous chart JSON
//! - [`compute_lagna_timeline`]: ascendant segments across a time window

pub mod chart;
pub mod error;
pub mod normalize;
pub mod timeline;

pub use chart::{Chart, compute_chart, compute_chart_with_phases, compute_panchang};
pub use error::ChartError;
pub use normalize::{normalize_chart, normalize_chart_str, role_tag};
pub use timeline::{
    DEFAULT_DURATION_MINUTES, DEFAULT_RESOLUTION_MINUTES, LagnaTimelineSegment,
    MAX_TIMELINE_SAMPLES, compute_lagna_timeline,
};
