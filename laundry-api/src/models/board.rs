use serde::Serialize;
use time::OffsetDateTime;

use super::{ApplianceKind, DerivedStatus, RawObject};
use crate::classify::Classification;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Machine {
    /// Washer or dryer
    pub kind: ApplianceKind,
    /// Record as received
    pub object: RawObject,
    /// Derived presentation state
    pub status: DerivedStatus,
    /// Human readable status line
    pub label: String,
}

impl Machine {
    pub fn new(kind: ApplianceKind, object: RawObject) -> Self {
        let status = DerivedStatus::derive(&object);
        let label = status.label();

        Self {
            kind,
            object,
            status,
            label,
        }
    }

    /// Card heading, e.g. `Washer 04`.
    pub fn title(&self) -> String {
        format!("{} {}", self.kind, self.object.appliance_desc)
    }
}

/// Everything the dashboard shows after one poll cycle.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Board {
    /// Washers in upstream order
    pub washers: Vec<Machine>,
    /// Dryers in upstream order
    pub dryers: Vec<Machine>,
    /// Fetch failure of this cycle, if any
    pub error: Option<String>,
    /// Time the cycle's fetch started; empty before the first cycle
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Board {
    /// Placeholder published before the first cycle completes.
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn from_classification(classification: Classification, updated_at: OffsetDateTime) -> Self {
        Self {
            washers: classification.washers,
            dryers: classification.dryers,
            error: None,
            updated_at: Some(updated_at),
        }
    }

    pub fn failed(error: impl Into<String>, updated_at: OffsetDateTime) -> Self {
        Self {
            washers: Vec::new(),
            dryers: Vec::new(),
            error: Some(error.into()),
            updated_at: Some(updated_at),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.updated_at.is_none()
    }
}
