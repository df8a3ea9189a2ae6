//! Small helpers shared by every renderer.
//!
//! # Responsibility
//! - Defensive parsing of JSON-encoded sub-fields.
//! - Date parsing/formatting, text shaping, status colors, markdown.
//!
//! # Invariants
//! - No helper here returns an error; malformed input degrades to a
//!   neutral value (empty list, raw text, `None`).

pub mod dates;
pub mod json_field;
pub mod markdown;
pub mod slug;
pub mod status;
pub mod text;
