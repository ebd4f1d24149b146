use std::cmp::Ordering;

use super::types::{ContributionEntry, CONTRIBUTION_FEATURES};
use crate::logic::baseline::{FeatureStat, StatsCache};
use crate::logic::numeric::round_to;
use crate::logic::telemetry::Telemetry;

/// Maps typical z-scores (0-4) onto a rough 0-100 display range
pub const CONTRIBUTION_SCALE: f64 = 25.0;

/// Absolute z-score, or `None` when the deviation is undefined (std of zero
/// or non-finite).
pub fn z_score(value: f64, stat: &FeatureStat) -> Option<f64> {
    if !stat.std.is_finite() || stat.std <= 0.0 {
        return None;
    }

    let z = ((value - stat.mean) / stat.std).abs();
    z.is_finite().then_some(z)
}

/// Rank interpretable features by how far they sit from the reference mean.
///
/// Features without a statistic, or with an undefined z-score, are left out.
/// Sorted descending by contribution; the sort is stable so ties keep
/// `CONTRIBUTION_FEATURES` order.
pub fn rank(telemetry: &Telemetry, stats: &StatsCache) -> Vec<ContributionEntry> {
    let mut contributions = Vec::with_capacity(CONTRIBUTION_FEATURES.len());

    for feature in CONTRIBUTION_FEATURES {
        let Some(stat) = stats.get(feature.stat_key()) else {
            continue;
        };

        let value = feature.value(telemetry);
        let Some(z) = z_score(value, stat) else {
            log::debug!("Skipping {}: standard deviation is {}", feature.display_name(), stat.std);
            continue;
        };

        contributions.push(ContributionEntry {
            feature: feature.display_name().to_string(),
            value,
            z_score: round_to(z, 2),
            contribution: round_to(z * CONTRIBUTION_SCALE, 1),
        });
    }

    // Sort by contribution DESC
    contributions.sort_by(|a, b| b.contribution.partial_cmp(&a.contribution).unwrap_or(Ordering::Equal));

    contributions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::baseline::StatKey;

    fn telemetry() -> Telemetry {
        Telemetry {
            machine_type: "L".to_string(),
            rotational_speed: 1900.0,
            torque: 40.0,
            tool_wear: 250.0,
            air_temperature: 300.0,
            proc_temperature: 310.0,
        }
    }

    fn stats() -> StatsCache {
        StatsCache::from_stats([
            (StatKey::RotationalSpeed, FeatureStat { mean: 1500.0, std: 200.0 }),
            (StatKey::Torque, FeatureStat { mean: 40.0, std: 10.0 }),
            (StatKey::ToolWear, FeatureStat { mean: 100.0, std: 60.0 }),
            (StatKey::AirTemp, FeatureStat { mean: 300.0, std: 2.0 }),
            (StatKey::ProcTemp, FeatureStat { mean: 310.0, std: 1.5 }),
        ])
    }

    #[test]
    fn test_rank_orders_by_contribution() {
        let ranked = rank(&telemetry(), &stats());

        let names: Vec<&str> = ranked.iter().map(|e| e.feature.as_str()).collect();
        assert_eq!(names, vec!["Tool wear", "Rotational speed", "Torque", "Proc_Temp_C"]);

        assert_eq!(ranked[0].z_score, 2.5);
        assert_eq!(ranked[0].contribution, 62.5);
        assert_eq!(ranked[1].z_score, 2.0);
        assert_eq!(ranked[1].contribution, 50.0);
        assert_eq!(ranked[1].value, 1900.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank(&telemetry(), &stats());
        // Torque and Proc_Temp_C both sit on their mean
        assert_eq!(ranked[2].feature, "Torque");
        assert_eq!(ranked[3].feature, "Proc_Temp_C");
        assert_eq!(ranked[2].contribution, 0.0);
    }

    #[test]
    fn test_zero_std_is_skipped() {
        let cache = StatsCache::from_stats([
            (StatKey::RotationalSpeed, FeatureStat { mean: 1500.0, std: 0.0 }),
            (StatKey::Torque, FeatureStat { mean: 30.0, std: 5.0 }),
        ]);
        let ranked = rank(&telemetry(), &cache);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].feature, "Torque");
        assert!(ranked.iter().all(|e| e.contribution.is_finite() && e.z_score.is_finite()));
    }

    #[test]
    fn test_missing_stat_is_omitted() {
        let cache = StatsCache::from_stats([(StatKey::ToolWear, FeatureStat { mean: 100.0, std: 60.0 })]);
        let ranked = rank(&telemetry(), &cache);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].feature, "Tool wear");
    }

    #[test]
    fn test_empty_cache_gives_empty_ranking() {
        assert!(rank(&telemetry(), &StatsCache::empty()).is_empty());
    }

    #[test]
    fn test_negative_deviation_is_absolute() {
        let mut t = telemetry();
        t.rotational_speed = 1100.0;
        let ranked = rank(&t, &stats());
        let speed = ranked.iter().find(|e| e.feature == "Rotational speed").unwrap();
        assert_eq!(speed.z_score, 2.0);
        assert_eq!(speed.value, 1100.0);
    }

    #[test]
    fn test_half_z_score_rounds_to_even() {
        let cache = StatsCache::from_stats([(StatKey::Torque, FeatureStat { mean: 0.0, std: 1.0 })]);
        let mut t = telemetry();
        t.torque = 0.125;
        let ranked = rank(&t, &cache);
        assert_eq!(ranked[0].z_score, 0.12);
        assert_eq!(ranked[0].contribution, 3.1);
    }

    #[test]
    fn test_contribution_uses_unrounded_z() {
        let cache = StatsCache::from_stats([(StatKey::Torque, FeatureStat { mean: 0.0, std: 1.0 })]);
        let mut t = telemetry();
        t.torque = 1.3349;
        let ranked = rank(&t, &cache);
        assert_eq!(ranked[0].z_score, 1.33);
        assert_eq!(ranked[0].contribution, 33.4);
    }
}
