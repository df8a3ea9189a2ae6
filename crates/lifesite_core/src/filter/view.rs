//! Per-render UI state.
//!
//! State lives only for one render call; nothing here is persisted.

use super::query::RecordFilter;
use std::collections::BTreeSet;

/// Set of expanded panel/node ids.
///
/// `flipped` holds the ids whose state differs from the default: open ids
/// when `all` is false, collapsed ids when it is true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    flipped: BTreeSet<String>,
    all: bool,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every id reports as open until toggled.
    pub fn expand_all() -> Self {
        Self {
            flipped: BTreeSet::new(),
            all: true,
        }
    }

    pub fn open(&mut self, id: &str) {
        if self.all {
            self.flipped.remove(id);
        } else {
            self.flipped.insert(id.to_string());
        }
    }

    /// Flips one id. Returns whether it is open afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.flipped.remove(id) {
            self.flipped.insert(id.to_string());
        }
        self.is_open(id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.all != self.flipped.contains(id)
    }
}

/// Everything a renderer may vary on besides its records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: RecordFilter,
    pub expanded: ExpansionState,
    /// Record id targeted by a URL fragment; rendered highlighted and open.
    pub focused_id: Option<String>,
    /// Trailing day window for renderers that support it (todos).
    pub days_window: Option<u32>,
}

impl ViewState {
    pub fn with_filter(filter: RecordFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn focused(id: impl Into<String>) -> Self {
        Self {
            focused_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_id.as_deref() == Some(id)
    }

    /// Open when expanded explicitly or targeted by the fragment.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.is_open(id) || self.is_focused(id)
    }
}

/// Strips `#` and leading slashes from a URL fragment.
///
/// Both `/page#id` and `/page/#/id` resolve to `id`. Blank input is `None`.
pub fn hash_target_id(fragment: &str) -> Option<&str> {
    let trimmed = fragment.trim();
    let without_hash = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let id = without_hash.trim_start_matches('/');
    (!id.is_empty()).then_some(id)
}
