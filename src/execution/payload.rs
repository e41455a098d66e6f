//! Payload shaping.
//!
//! ```text
//! {
//!   "metric_metadata": {
//!     "application_name": .., "version": .., "url": ..,
//!     "<profile.metadata_key>": "<profile.name>",
//!     "use_case": ..
//!   },
//!   "metric_data": { "<profile.name>": <metrics> }
//! }
//! ```

use crate::types::{MetricSet, ProviderProfile, SubmissionMetadata};
use serde_json::{Map, Value, json};

/// Build the request body for one submission.
pub fn build_payload(
    profile: &ProviderProfile,
    metrics: &MetricSet,
    metadata: &SubmissionMetadata,
) -> Value {
    let mut metric_metadata = Map::new();
    metric_metadata.insert(
        "application_name".to_string(),
        json!(metadata.application_name),
    );
    metric_metadata.insert("version".to_string(), json!(metadata.version));
    if profile.include_url {
        if let Some(url) = &metadata.url {
            metric_metadata.insert("url".to_string(), json!(url));
        }
    }
    metric_metadata.insert(profile.metadata_key.clone(), json!(profile.name));
    metric_metadata.insert("use_case".to_string(), json!(metadata.use_case));

    let mut metric_data = Map::new();
    metric_data.insert(profile.name.clone(), metrics.to_value());

    json!({
        "metric_metadata": metric_metadata,
        "metric_data": metric_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Provider;

    fn metadata() -> SubmissionMetadata {
        SubmissionMetadata::new("fraud-detection-model", "2.1.0", "finance")
            .with_url("https://api.mycompany.com/fraud-detection")
    }

    #[test]
    fn evidently_uses_provider_key() {
        let metrics = MetricSet::new().with_metric("data_drift", 0.15);
        let body = build_payload(
            &Provider::Evidently.default_profile(),
            &metrics,
            &metadata(),
        );
        assert_eq!(
            body,
            json!({
                "metric_metadata": {
                    "application_name": "fraud-detection-model",
                    "version": "2.1.0",
                    "url": "https://api.mycompany.com/fraud-detection",
                    "provider": "evidently",
                    "use_case": "finance"
                },
                "metric_data": {"evidently": {"data_drift": 0.15}}
            })
        );
    }

    #[test]
    fn deepeval_nests_metrics_unmodified() {
        let metrics = MetricSet::new()
            .with_metric("answer_relevancy", 0.95)
            .with_metric("faithfulness", 0.92)
            .with_metric("hallucination", 0.08);
        let body = build_payload(&Provider::Deepeval.default_profile(), &metrics, &metadata());

        assert_eq!(body["metric_metadata"]["eval_provider"], json!("deepeval"));
        assert!(body["metric_metadata"].get("provider").is_none());
        let nested: MetricSet = serde_json::from_value(body["metric_data"]["deepeval"].clone())
            .expect("metric object");
        assert_eq!(nested, metrics);
    }

    #[test]
    fn empty_metrics_become_empty_object() {
        let body = build_payload(
            &Provider::Opik.default_profile(),
            &MetricSet::new(),
            &metadata(),
        );
        assert_eq!(body["metric_data"]["opik"], json!({}));
    }

    #[test]
    fn url_omitted_when_absent_or_disabled() {
        let no_url = SubmissionMetadata::new("app", "1.0.0", "healthcare");
        let body = build_payload(
            &Provider::Opik.default_profile(),
            &MetricSet::new(),
            &no_url,
        );
        assert!(body["metric_metadata"].get("url").is_none());

        let profile = Provider::Deepeval.default_profile().with_include_url(false);
        let body = build_payload(&profile, &MetricSet::new(), &metadata());
        assert!(body["metric_metadata"].get("url").is_none());
    }

    #[test]
    fn generic_profile_keys_on_given_name() {
        let profile = ProviderProfile::generic("ragas");
        let metrics = MetricSet::new().with_metric("context_recall", 0.7);
        let body = build_payload(&profile, &metrics, &metadata());
        assert_eq!(body["metric_metadata"]["eval_provider"], json!("ragas"));
        assert_eq!(body["metric_data"]["ragas"]["context_recall"], json!(0.7));
    }
}
