use serde_json::Value;

use crate::models::{ApplianceKind, Machine, UpstreamRecord};

/// A record left out of both columns that may point at an upstream change.
#[derive(Debug, Clone, PartialEq)]
pub enum Skipped {
    Unmatched { tag: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub washers: Vec<Machine>,
    pub dryers: Vec<Machine>,
    pub skipped: Vec<Skipped>,
}

/// Sorts room objects into washers and dryers, keeping upstream order in each.
///
/// Fixtures and untyped values are dropped without a trace. Typed records
/// matching neither prefix end up in `skipped`.
pub fn classify(objects: &[Value]) -> Classification {
    let mut classification = Classification::default();

    for value in objects {
        match UpstreamRecord::from_value(value) {
            UpstreamRecord::Washer(object) => classification
                .washers
                .push(Machine::new(ApplianceKind::Washer, object)),
            UpstreamRecord::Dryer(object) => classification
                .dryers
                .push(Machine::new(ApplianceKind::Dryer, object)),
            UpstreamRecord::Unmatched(tag) => {
                classification.skipped.push(Skipped::Unmatched { tag })
            }
            UpstreamRecord::Fixture(_) | UpstreamRecord::Untyped => {}
        }
    }

    classification
}
