//! Record filtering, ordering and view state.
//!
//! # Responsibility
//! - Decide which records of one domain are visible for a `ViewState`.
//! - Provide the shared orderings (newest first, name tiebreak).
//!
//! # Invariants
//! - Filtering returns a subset of its input in input order.
//! - An empty filter is the identity.
//! - Tags are OR-ed with each other and AND-ed with every other axis.

pub mod query;
pub mod sort;
pub mod view;

pub use query::{DateRange, Filterable, RecordFilter};
pub use sort::{group_by, sort_by_timestamp_asc, sort_by_timestamp_desc, tag_counts};
pub use view::{hash_target_id, ExpansionState, ViewState};
