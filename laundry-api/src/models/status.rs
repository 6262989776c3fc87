use std::fmt;

use serde::Serialize;

use super::RawObject;

pub const AVAILABLE_COLOR: &str = "#28a745";

pub const RUNNING_COLOR: &str = "#007bff";

pub const ELAPSED_COLOR: &str = "#e9ecef";

pub const FINISHED_COLOR: &str = "#343a40";

/// Toggle values compare numerically, so `0` and `0.0` are both idle.
pub const STATUS_IDLE: f64 = 0.0;

pub const STATUS_RUNNING: f64 = 2.0;

/// Presentation state of a single machine.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DerivedStatus {
    Available,
    Running {
        /// Whole minutes left
        minutes: i64,
        /// Whole percent complete
        percent: i64,
        /// Elapsed fraction of the cycle
        progress: f64,
    },
    Finished,
}

impl DerivedStatus {
    /// Rules are checked in order: idle, running with time left, anything else.
    pub fn derive(object: &RawObject) -> Self {
        let time_remaining = object.time_remaining.unwrap_or(0.0);

        match object.status_toggle {
            Some(toggle) if toggle == STATUS_IDLE => DerivedStatus::Available,
            Some(toggle) if toggle == STATUS_RUNNING && time_remaining > 0.0 => {
                let progress = object.percentage.unwrap_or(0.0);

                DerivedStatus::Running {
                    minutes: time_remaining.floor() as i64,
                    percent: (progress * 100.0).floor() as i64,
                    progress,
                }
            }
            _ => DerivedStatus::Finished,
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    pub fn color(&self) -> &'static str {
        match self {
            DerivedStatus::Available => AVAILABLE_COLOR,
            DerivedStatus::Running { .. } => RUNNING_COLOR,
            DerivedStatus::Finished => FINISHED_COLOR,
        }
    }

    /// Running machines are drawn on a light background and need dark text.
    pub fn text_color(&self) -> &'static str {
        match self {
            DerivedStatus::Running { .. } => "black",
            _ => "white",
        }
    }

    /// CSS `background` value: solid, or split at the elapsed fraction.
    pub fn background(&self) -> String {
        match self {
            DerivedStatus::Running { progress, .. } => {
                let elapsed = progress * 100.0;
                format!(
                    "linear-gradient(to right, {ELAPSED_COLOR} {elapsed}%, {RUNNING_COLOR} {elapsed}%)"
                )
            }
            other => other.color().to_string(),
        }
    }
}

impl fmt::Display for DerivedStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DerivedStatus::Available => write!(f, "Available"),
            DerivedStatus::Running {
                minutes, percent, ..
            } => write!(f, "{minutes} min ({percent}% Finished)"),
            DerivedStatus::Finished => write!(f, "Finished"),
        }
    }
}
