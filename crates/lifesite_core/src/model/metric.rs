//! Health and activity metrics.

use super::{nullable, string_or_number};
use serde::{Deserialize, Serialize};

/// Series name used for the nightly sleep list.
pub const SLEEP_SERIES_NAME: &str = "Sleep Data (Last 7 Days)";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub metric_type: String,
    #[serde(deserialize_with = "nullable")]
    pub metric_name: String,
    #[serde(deserialize_with = "nullable")]
    pub value: f64,
    #[serde(deserialize_with = "nullable")]
    pub unit: String,
    pub metadata: Option<String>,
}

impl Metric {
    /// Value with its unit: `%` attaches directly, other units follow a space.
    pub fn display_value(&self) -> String {
        let value = format_number(self.value);
        match self.unit.trim() {
            "" => value,
            "%" => format!("{value}%"),
            unit => format!("{value} {unit}"),
        }
    }

    /// Badge classes by metric family.
    pub fn color_class(&self) -> &'static str {
        let name = self.metric_name.to_lowercase();
        if name.contains("sleep") {
            "bg-mauve/20 text-mauve"
        } else if name.contains("heart") {
            "bg-red/20 text-red"
        } else if name.contains("steps") {
            "bg-green/20 text-green"
        } else if name.contains("recovery") {
            "bg-blue/20 text-blue"
        } else {
            "bg-surface1 text-subtext1"
        }
    }
}

/// Groups the integer part with thousands separators and keeps up to two
/// decimals, with trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let text = format!("{:.2}", value.abs());
    let (digits, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if value < 0.0 && (digits != "0" || !fraction.is_empty()) {
        grouped.push('-');
    }
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
