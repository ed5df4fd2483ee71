use crate::schema::values::Data;
use serde::{Deserialize, Serialize};

/// Coalesces points that share a group value, reducing every other data array with
/// the configured aggregation functions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Aggregate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Grouping target. A string is a path to a data array of the parent trace
    /// (nested arrays use dots, e.g. `"marker.color"`); an array is the grouping data
    /// itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Data<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<Aggregation>>,
}

impl Aggregate {
    /// Group by the parent trace array at `path`.
    pub fn by(path: &str) -> Self {
        Self {
            groups: Some(Data::scalar(path)),
            ..Default::default()
        }
    }

    pub fn with(mut self, aggregation: Aggregation) -> Self {
        self.aggregations.get_or_insert_with(Vec::new).push(aggregation);
        self
    }
}

/// One reduction: which parent array to aggregate and how.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Aggregation {
    /// Path to the parent trace's data array; each array may be referenced once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(rename = "func", skip_serializing_if = "Option::is_none")]
    pub function: Option<AggregateFunction>,
    #[serde(rename = "funcmode", skip_serializing_if = "Option::is_none")]
    pub function_mode: Option<FunctionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Aggregation {
    pub fn new(target: &str, function: AggregateFunction) -> Self {
        Self {
            target: Some(target.to_string()),
            function: Some(function),
            ..Default::default()
        }
    }
}

/// Reduction applied to the values of one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Median,
    Mode,
    Rms,
    #[serde(rename = "stddev")]
    StdDev,
    Min,
    Max,
    First,
    Last,
    Change,
    Range,
}

/// Normalization of `stddev`: by `N - 1` (sample) or `N` (population).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionMode {
    Sample,
    Population,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dotted_group_path_is_a_plain_string() {
        let agg = Aggregate::by("marker.color")
            .with(Aggregation::new("y", AggregateFunction::StdDev))
            .with(Aggregation {
                function_mode: Some(FunctionMode::Population),
                ..Aggregation::new("x", AggregateFunction::Avg)
            });
        assert_eq!(
            serde_json::to_value(&agg).unwrap(),
            json!({
                "groups": "marker.color",
                "aggregations": [
                    {"target": "y", "func": "stddev"},
                    {"target": "x", "func": "avg", "funcmode": "population"}
                ]
            })
        );
    }
}
