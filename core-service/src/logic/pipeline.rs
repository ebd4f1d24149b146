//! Scoring Pipeline
//!
//! One request/response cycle:
//! telemetry → features → classifier → {contribution ranking, insights} → result.
//!
//! Stateless per request. The only shared inputs are the classifier and the
//! statistics cache, both injected at construction and never mutated.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{CoreResult, ScoringError};
use crate::logic::baseline::StatsCache;
use crate::logic::explain::{self, ContributionEntry};
use crate::logic::features::{engineer, EngineeredFeatures, EngineeredSummary};
use crate::logic::insight::{self, Message};
use crate::logic::model::{FailureClassifier, FailureLabel, FailurePrediction};
use crate::logic::telemetry::Telemetry;

/// Aggregated output of one scoring request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    pub predictions: FailurePrediction,
    pub primary_failure: Option<FailureLabel>,
    pub engineered_features: EngineeredSummary,
    pub feature_importance: Vec<ContributionEntry>,
    /// Snapshot of the statistics used for ranking (empty when unavailable)
    pub dataset_stats: StatsCache,
    pub ai_insights: Vec<Message>,
    pub ai_recommendations: Vec<Message>,
    pub max_risk: f64,
}

#[derive(Clone)]
pub struct ScoringPipeline {
    classifier: Arc<dyn FailureClassifier>,
    stats: Arc<StatsCache>,
}

impl ScoringPipeline {
    pub fn new(classifier: Arc<dyn FailureClassifier>, stats: Arc<StatsCache>) -> Self {
        Self { classifier, stats }
    }

    pub fn stats(&self) -> &StatsCache {
        &self.stats
    }

    /// Score one telemetry snapshot. Either a full result or a single
    /// `ComputationFailed`, never a partial result.
    pub fn score(&self, telemetry: &Telemetry) -> CoreResult<ScoringResult> {
        // 1. Feature engineering
        let features = engineer(telemetry);
        ensure_finite(&features)?;

        // 2. Classifier
        let probabilities = self.classifier.predict_proba(&features.to_input())?;
        let predictions = FailurePrediction::from_probabilities(&probabilities)?;
        let (primary_failure, max_risk) = predictions.primary();

        // 3. Contribution ranking
        let feature_importance = explain::rank(telemetry, &self.stats);

        // 4. Insights
        let bundle = insight::explain(&predictions);

        log::debug!(
            "Scored via {}: primary={:?} max_risk={} factors={}",
            self.classifier.name(),
            primary_failure,
            max_risk,
            feature_importance.len()
        );

        Ok(ScoringResult {
            predictions,
            primary_failure,
            engineered_features: features.summary(),
            feature_importance,
            dataset_stats: StatsCache::clone(&self.stats),
            ai_insights: bundle.insights,
            ai_recommendations: bundle.recommendations,
            max_risk,
        })
    }
}

fn ensure_finite(features: &EngineeredFeatures) -> CoreResult<()> {
    if features.power_w.is_finite() && features.temp_delta.is_finite() {
        Ok(())
    } else {
        Err(ScoringError::ComputationFailed(format!(
            "derived values out of range (power_w={}, temp_delta={})",
            features.power_w, features.temp_delta
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::baseline::{FeatureStat, StatKey};
    use crate::logic::features::FEATURE_COUNT;
    use crate::logic::insight::{HEALTHY_INSIGHT, INSIGHT_RULES};
    use crate::logic::model::{InferenceError, FAILURE_LABELS, LABEL_COUNT};
    use parking_lot::Mutex;

    /// Returns fixed failure probabilities and remembers its last input
    struct FixedClassifier {
        failure: [f32; LABEL_COUNT],
        last_input: Mutex<Option<[f32; FEATURE_COUNT]>>,
    }

    impl FixedClassifier {
        fn new(failure: [f32; LABEL_COUNT]) -> Arc<Self> {
            Arc::new(Self { failure, last_input: Mutex::new(None) })
        }
    }

    impl FailureClassifier for FixedClassifier {
        fn predict_proba(&self, input: &[f32; FEATURE_COUNT]) -> Result<Vec<[f32; 2]>, InferenceError> {
            *self.last_input.lock() = Some(*input);
            Ok(self.failure.iter().map(|&p| [1.0 - p, p]).collect())
        }
    }

    struct BrokenClassifier;

    impl FailureClassifier for BrokenClassifier {
        fn predict_proba(&self, _: &[f32; FEATURE_COUNT]) -> Result<Vec<[f32; 2]>, InferenceError> {
            Err(InferenceError("session poisoned".to_string()))
        }
    }

    fn telemetry() -> Telemetry {
        Telemetry {
            machine_type: "H".to_string(),
            rotational_speed: 1432.0,
            torque: 10.0,
            tool_wear: 180.0,
            air_temperature: 298.1,
            proc_temperature: 308.6,
        }
    }

    fn stats() -> Arc<StatsCache> {
        Arc::new(StatsCache::from_stats([
            (StatKey::RotationalSpeed, FeatureStat { mean: 1538.8, std: 179.3 }),
            (StatKey::Torque, FeatureStat { mean: 39.99, std: 9.97 }),
            (StatKey::ToolWear, FeatureStat { mean: 107.95, std: 63.65 }),
            (StatKey::AirTemp, FeatureStat { mean: 300.0, std: 2.0 }),
            (StatKey::ProcTemp, FeatureStat { mean: 310.0, std: 1.48 }),
        ]))
    }

    #[test]
    fn test_score_full_result() {
        let classifier = FixedClassifier::new([0.1, 0.1, 0.7, 0.6, 0.05]);
        let pipeline = ScoringPipeline::new(classifier.clone(), stats());

        let result = pipeline.score(&telemetry()).unwrap();

        assert_eq!(result.predictions.iter().count(), FAILURE_LABELS.len());
        assert_eq!(result.predictions.get(FailureLabel::Pwf), 70.0);
        assert_eq!(result.primary_failure, Some(FailureLabel::Pwf));
        assert_eq!(result.max_risk, 70.0);

        assert_eq!(result.engineered_features.type_encoded, 2);
        assert!((result.engineered_features.power_w - 1499.56).abs() < 0.01);

        assert_eq!(result.feature_importance.len(), 4);
        assert!(result.feature_importance.windows(2).all(|w| w[0].contribution >= w[1].contribution));
        assert_eq!(result.feature_importance[0].feature, "Torque");

        assert_eq!(result.dataset_stats.len(), 5);
        assert_eq!(result.ai_insights.len(), 2);
        assert_eq!(result.ai_insights[0], INSIGHT_RULES[0].insight);
        assert_eq!(result.ai_recommendations.len(), 2);

        let input = (*classifier.last_input.lock()).unwrap();
        assert_eq!(input[0], 2.0);
        assert!((input[6] - 1499.56).abs() < 0.1);
    }

    #[test]
    fn test_empty_cache_still_predicts() {
        let classifier = FixedClassifier::new([0.0, 0.0, 0.0, 0.0, 0.0]);
        let pipeline = ScoringPipeline::new(classifier, Arc::new(StatsCache::empty()));

        let result = pipeline.score(&telemetry()).unwrap();

        assert!(result.feature_importance.is_empty());
        assert!(result.dataset_stats.is_empty());
        assert_eq!(result.predictions.iter().count(), 5);
        assert_eq!(result.primary_failure, None);
        assert_eq!(result.max_risk, 0.0);
        assert_eq!(result.ai_insights, vec![HEALTHY_INSIGHT]);
    }

    #[test]
    fn test_classifier_failure_is_computation_failed() {
        let pipeline = ScoringPipeline::new(Arc::new(BrokenClassifier), stats());
        let err = pipeline.score(&telemetry()).unwrap_err();

        match err {
            ScoringError::ComputationFailed(msg) => assert!(msg.contains("session poisoned")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_classifier_output_is_computation_failed() {
        let classifier = FixedClassifier::new([0.1, 0.1, 1.7, 0.6, 0.05]);
        let pipeline = ScoringPipeline::new(classifier, stats());
        assert!(matches!(pipeline.score(&telemetry()), Err(ScoringError::ComputationFailed(_))));
    }

    #[test]
    fn test_overflowing_power_is_computation_failed() {
        let pipeline = ScoringPipeline::new(FixedClassifier::new([0.0; LABEL_COUNT]), stats());
        let mut t = telemetry();
        t.torque = f64::MAX;
        t.rotational_speed = f64::MAX;
        assert!(matches!(pipeline.score(&t), Err(ScoringError::ComputationFailed(_))));
    }

    #[test]
    fn test_score_is_deterministic() {
        let pipeline = ScoringPipeline::new(FixedClassifier::new([0.2, 0.55, 0.3, 0.1, 0.01]), stats());

        let first = serde_json::to_string(&pipeline.score(&telemetry()).unwrap()).unwrap();
        let second = serde_json::to_string(&pipeline.score(&telemetry()).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_json_shape() {
        let pipeline = ScoringPipeline::new(FixedClassifier::new([0.0, 0.9, 0.0, 0.0, 0.0]), stats());
        let value = serde_json::to_value(pipeline.score(&telemetry()).unwrap()).unwrap();

        assert_eq!(value["primary_failure"], "HDF");
        assert_eq!(value["predictions"]["HDF"], 90.0);
        assert_eq!(value["ai_insights"][0]["en"], "The machine is getting too hot.");
        assert!(value["dataset_stats"]["proc_temp"]["std"].is_number());
        assert!(value["feature_importance"][0]["z_score"].is_number());
    }
}
