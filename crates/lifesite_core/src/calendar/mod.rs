//! Date-bucketed aggregates: the 52-week activity heatmap and the running
//! totals behind the dailies timeline.
//!
//! # Responsibility
//! - Place dated counts into a fixed Sunday-started week grid.
//! - Derive intensity levels and summary statistics.
//!
//! # Invariants
//! - Week index stays within `0..WEEKS`, day index within `0..7`.
//! - `today` is always an explicit argument; nothing reads the clock here.
//!
//! # See also
//! - `render::habits`, `render::dailies`, `render::github`

mod heatmap;
mod timeline;

pub use heatmap::{
    HeatmapCell, HeatmapGrid, HeatmapSummary, Intensity, DAYS_PER_WEEK, WEEKS,
};
pub use timeline::{cumulative_series, CumulativePoint, CumulativeSeries};
