use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Type tags of objects in a room payload that are not machines.
pub const FIXTURE_TYPES: [&str; 2] = ["D", "cardReader"];

pub const WASHER_PREFIX: &str = "wash";

pub const DRYER_PREFIX: &str = "dry";

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplianceKind {
    Washer,
    Dryer,
}

impl ApplianceKind {
    /// Category of a type tag, decided by its prefix alone.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.starts_with(WASHER_PREFIX) {
            Some(ApplianceKind::Washer)
        } else if tag.starts_with(DRYER_PREFIX) {
            Some(ApplianceKind::Dryer)
        } else {
            None
        }
    }
}

impl fmt::Display for ApplianceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApplianceKind::Washer => write!(f, "Washer"),
            ApplianceKind::Dryer => write!(f, "Dryer"),
        }
    }
}

/// Machine record as reported by the room status service.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObject {
    /// Upstream type tag, e.g. `washerFL` or `dryer3`
    #[serde(rename = "type")]
    pub kind: String,
    /// 0 while idle, 2 while running
    #[serde(default, deserialize_with = "deserialize_number")]
    pub status_toggle: Option<f64>,
    /// Minutes left in the current cycle
    #[serde(default, deserialize_with = "deserialize_number")]
    pub time_remaining: Option<f64>,
    /// Fraction of the current cycle already elapsed
    #[serde(default, deserialize_with = "deserialize_number")]
    pub percentage: Option<f64>,
    /// Unit label shown on the machine
    #[serde(default, deserialize_with = "deserialize_label")]
    pub appliance_desc: String,
}

/// Any JSON number, integer or float. Other values read as absent.
fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) => Ok(number.as_f64()),
        _ => Ok(None),
    }
}

/// Accepts a unit label sent either as a string or as a bare number.
fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(label) => Ok(label),
        other => Ok(other.to_string()),
    }
}

/// One entry of a room payload, sorted into a variant at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamRecord {
    Washer(RawObject),
    Dryer(RawObject),
    /// Walls, doors and card readers
    Fixture(String),
    /// Typed, but the tag matches no machine prefix
    Unmatched(String),
    /// Not an object, or no string `type` field
    Untyped,
}

impl UpstreamRecord {
    pub fn from_value(value: &Value) -> Self {
        let Some(tag) = value.get("type").and_then(Value::as_str) else {
            return UpstreamRecord::Untyped;
        };

        if FIXTURE_TYPES.contains(&tag) {
            return UpstreamRecord::Fixture(tag.to_owned());
        }

        let Some(kind) = ApplianceKind::from_tag(tag) else {
            return UpstreamRecord::Unmatched(tag.to_owned());
        };

        // Every field but `type` reads leniently, and `type` is a string here.
        let Ok(object) = RawObject::deserialize(value) else {
            return UpstreamRecord::Untyped;
        };

        match kind {
            ApplianceKind::Washer => UpstreamRecord::Washer(object),
            ApplianceKind::Dryer => UpstreamRecord::Dryer(object),
        }
    }
}
