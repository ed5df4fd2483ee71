//! Data transforms applied by the renderer before a trace is drawn.
//!
//! Transforms live in a trace's `transforms` list. Each entry is tagged with its
//! `"type"`, so the list can mix kinds.

pub mod aggregate;

pub use aggregate::{Aggregate, AggregateFunction, Aggregation, FunctionMode};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Transform {
    Aggregate(Aggregate),
}

impl From<Aggregate> for Transform {
    fn from(t: Aggregate) -> Self {
        Transform::Aggregate(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transform_carries_its_type() {
        let t = Transform::from(Aggregate {
            enabled: Some(true),
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(&t).unwrap(),
            json!({"type": "aggregate", "enabled": true})
        );
        let back: Transform = serde_json::from_value(json!({"type": "aggregate"})).unwrap();
        assert_eq!(back, Transform::Aggregate(Aggregate::default()));
    }
}
