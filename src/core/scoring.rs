use crate::models::{SurveyResponse, ScoringWeights, RescaleCurve};
use crate::core::{
    gate::gender_compatible,
    labels::{
        bedtime_hour, wake_up_hour, cleanliness_level, noise_level,
        MAX_SLEEP_SPAN_HOURS, MAX_CLEANLINESS_SPREAD, NOISE_DISTANCE_DIVISOR, NOISE_SCORE_FLOOR,
    },
};

/// Calculate the roommate compatibility score (0-100) of two surveys
///
/// Scoring:
/// 1. Gender gate: an incompatible pair scores 0 and nothing else is looked at
/// 2. Sub-scores (0-1) for sleep schedule, cleanliness and noise tolerance,
///    each only when both surveys answered it with a known label
/// 3. total = sum(sub_score * weight), max = sum(weight) over answered dimensions
/// 4. raw = total / max * 100 (0 when no dimension was answered)
/// 5. Rescale raw around the curve midpoint
/// 6. Clamp and round
///
/// The result does not depend on argument order.
pub fn calculate_match_score(
    a: &SurveyResponse,
    b: &SurveyResponse,
    weights: &ScoringWeights,
    curve: &RescaleCurve,
) -> u8 {
    if !gender_compatible(a, b) {
        return 0;
    }

    let dimensions = [
        (sleep_schedule_score(a, b, weights.bedtime_share), weights.sleep_schedule),
        (cleanliness_score(a, b), weights.cleanliness),
        (noise_tolerance_score(a, b), weights.noise_tolerance),
    ];

    let mut total = 0.0;
    let mut max_possible = 0.0;
    for (sub_score, weight) in dimensions {
        if let Some(sub_score) = sub_score {
            total += sub_score * weight;
            max_possible += weight;
        }
    }

    if max_possible <= 0.0 {
        return 0;
    }

    let raw = total / max_possible * 100.0;
    finalize(rescale(raw, curve))
}

/// Sleep schedule sub-score (0-1)
///
/// Needs bedtime and wake-up time on both sides. Bedtime and wake-up
/// closeness are blended with `bedtime_share` going to bedtime.
pub fn sleep_schedule_score(a: &SurveyResponse, b: &SurveyResponse, bedtime_share: f64) -> Option<f64> {
    let bed_a = bedtime_hour(a.bedtime.as_deref()?)?;
    let bed_b = bedtime_hour(b.bedtime.as_deref()?)?;
    let wake_a = wake_up_hour(a.wake_up_time.as_deref()?)?;
    let wake_b = wake_up_hour(b.wake_up_time.as_deref()?)?;

    let bedtime_score = closeness(bed_a, bed_b, MAX_SLEEP_SPAN_HOURS);
    let wake_up_score = closeness(wake_a, wake_b, MAX_SLEEP_SPAN_HOURS);

    Some(bedtime_score * bedtime_share + wake_up_score * (1.0 - bedtime_share))
}

/// Cleanliness sub-score (0-1)
pub fn cleanliness_score(a: &SurveyResponse, b: &SurveyResponse) -> Option<f64> {
    let level_a = cleanliness_level(a.cleanliness.as_deref()?)?;
    let level_b = cleanliness_level(b.cleanliness.as_deref()?)?;

    Some(closeness(level_a, level_b, MAX_CLEANLINESS_SPREAD))
}

/// Noise tolerance sub-score (0.3-1)
pub fn noise_tolerance_score(a: &SurveyResponse, b: &SurveyResponse) -> Option<f64> {
    let level_a = noise_level(a.noise_tolerance.as_deref()?)?;
    let level_b = noise_level(b.noise_tolerance.as_deref()?)?;

    let score = 1.0 - (level_a - level_b).abs() / NOISE_DISTANCE_DIVISOR;
    Some(score.max(NOISE_SCORE_FLOOR))
}

/// Stretch a raw percentage away from the curve midpoint
///
/// Below the midpoint: `m * (raw / m)^lower`.
/// At or above it: `100 - (100 - m) * ((100 - raw) / (100 - m))^upper`.
/// Both branches give `m` at `raw == m`.
pub fn rescale(raw: f64, curve: &RescaleCurve) -> f64 {
    let raw = raw.clamp(0.0, 100.0);
    let mid = curve.midpoint;

    if raw < mid {
        mid * (raw / mid).powf(curve.lower_exponent)
    } else {
        let upper_span = 100.0 - mid;
        100.0 - upper_span * ((100.0 - raw) / upper_span).powf(curve.upper_exponent)
    }
}

/// 1 for identical values, falling linearly to 0 at `span`
#[inline]
fn closeness(x: f64, y: f64, span: f64) -> f64 {
    (1.0 - (x - y).abs() / span).max(0.0)
}

#[inline]
fn finalize(score: f64) -> u8 {
    if !score.is_finite() {
        return 0;
    }
    score.clamp(0.0, 100.0).round() as u8
}
