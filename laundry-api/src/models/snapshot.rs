use serde_json::Value;

/// Objects of one room payload, kept as the service sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplianceSnapshot {
    pub objects: Vec<Value>,
}

impl ApplianceSnapshot {
    /// Returns `None` when the payload carries no `objects` array.
    pub fn from_payload(payload: Value) -> Option<Self> {
        match payload {
            Value::Object(mut map) => match map.remove("objects") {
                Some(Value::Array(objects)) => Some(Self { objects }),
                _ => None,
            },
            _ => None,
        }
    }
}
