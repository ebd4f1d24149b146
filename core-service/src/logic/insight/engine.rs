use super::rules::{InsightRule, HEALTHY_INSIGHT, HEALTHY_RECOMMENDATION, INSIGHT_RULES, INSIGHT_THRESHOLD};
use super::types::InsightBundle;
use crate::logic::model::FailurePrediction;

impl InsightRule {
    pub fn fires(&self, predictions: &FailurePrediction, threshold: f64) -> bool {
        predictions.get(self.label) > threshold
    }
}

/// Insight / recommendation pairs for a prediction.
///
/// Every firing rule contributes its pair, in rule-table order. With no
/// firing rule the result is exactly one healthy pair.
pub fn explain(predictions: &FailurePrediction) -> InsightBundle {
    explain_with_threshold(predictions, INSIGHT_THRESHOLD)
}

pub fn explain_with_threshold(predictions: &FailurePrediction, threshold: f64) -> InsightBundle {
    let mut bundle = InsightBundle::default();

    for rule in INSIGHT_RULES.iter().filter(|r| r.fires(predictions, threshold)) {
        bundle.push(rule.insight, rule.recommendation);
    }

    if bundle.is_empty() {
        bundle.push(HEALTHY_INSIGHT, HEALTHY_RECOMMENDATION);
    }

    bundle
}
