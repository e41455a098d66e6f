//! Metric result sets.

use crate::error::SubmitError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metric name to score mapping produced by an evaluation provider.
///
/// Scores are usually numbers but any JSON value is accepted and passed through
/// untouched. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSet(Map<String, Value>);

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_metric(mut self, name: impl Into<String>, score: impl Into<Value>) -> Self {
        self.insert(name, score);
        self
    }

    /// Insert a score, returning the previous one for that name.
    pub fn insert(&mut self, name: impl Into<String>, score: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), score.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for MetricSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for MetricSet
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl TryFrom<Value> for MetricSet {
    type Error = SubmitError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(SubmitError::InvalidRequest(format!(
                "metric results must be a JSON object, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collects_mixed_scores() {
        let metrics: MetricSet = [("accuracy", json!(0.95)), ("verdict", json!("pass"))]
            .into_iter()
            .collect();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics.get("accuracy"), Some(&json!(0.95)));
        assert_eq!(metrics.get("verdict"), Some(&json!("pass")));
    }

    #[test]
    fn serializes_as_plain_object() {
        let metrics = MetricSet::new()
            .with_metric("f1_score", 0.91)
            .with_metric("samples", 120);
        assert_eq!(
            serde_json::to_value(&metrics).unwrap(),
            json!({"f1_score": 0.91, "samples": 120})
        );
    }

    #[test]
    fn empty_set_is_empty_object() {
        let metrics = MetricSet::new();
        assert!(metrics.is_empty());
        assert_eq!(metrics.to_value(), json!({}));
    }

    #[test]
    fn insert_replaces_existing_score() {
        let mut metrics = MetricSet::new().with_metric("bias", 0.05);
        let previous = metrics.insert("bias", 0.04);
        assert_eq!(previous, Some(json!(0.05)));
        assert_eq!(metrics.len(), 1);
    }

    #[test]
    fn try_from_rejects_non_objects() {
        assert!(MetricSet::try_from(json!({"hallucination": 0.08})).is_ok());
        let err = MetricSet::try_from(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, SubmitError::InvalidRequest(_)));
    }
}
