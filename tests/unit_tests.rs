// Scoring property tests for Roommate Match

use roommate_match::core::{
    calculate_match_score, rescale, score,
    scoring::{cleanliness_score, noise_tolerance_score, sleep_schedule_score},
};
use roommate_match::models::{SurveyResponse, ScoringWeights, RescaleCurve};

const BEDTIMES: &[&str] = &["Before 11 PM", "Before 1 AM", "Before 3 AM", "Anytime is fine", "Whenever"];
const WAKE_UPS: &[&str] = &["Before 8 AM", "Before 10 AM", "Before noon", "Anytime is fine"];
const CLEANLINESS: &[&str] = &[
    "Very tidy (everything in place)",
    "Moderately tidy (clean weekly)",
    "Lightly messy is fine",
    "I don't care",
    "Spotless",
];
const NOISE: &[&str] = &[
    "Loud (Social hub)",
    "Moderate (Quiet conversation)",
    "Quiet (No noise)",
    "I'm fine with all of these",
];
const GENDERS: &[&str] = &["Male", "Female", "Other"];
const PREFERENCES: &[&str] = &["My gender", "Any gender", "my gender"];

/// Deterministic spread of surveys with some fields left out
fn survey_pool() -> Vec<SurveyResponse> {
    let pick = |table: &[&str], i: usize, skip_every: usize| -> Option<String> {
        if i % skip_every == 0 {
            None
        } else {
            Some(table[i % table.len()].to_string())
        }
    };

    (0..60)
        .map(|i| SurveyResponse {
            bedtime: pick(BEDTIMES, i, 7),
            wake_up_time: pick(WAKE_UPS, i / 2, 5),
            cleanliness: pick(CLEANLINESS, i / 3, 4),
            noise_tolerance: pick(NOISE, i + 1, 6),
            gender: pick(GENDERS, i, 9),
            gender_preference: pick(PREFERENCES, i / 4, 3),
            ..Default::default()
        })
        .collect()
}

fn clean(label: &str) -> SurveyResponse {
    SurveyResponse {
        cleanliness: Some(label.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_score_is_symmetric() {
    let pool = survey_pool();
    for a in &pool {
        for b in &pool {
            assert_eq!(score(a, b), score(b, a), "asymmetric for {:?} / {:?}", a, b);
        }
    }
}

#[test]
fn test_score_within_range() {
    let pool = survey_pool();
    for a in &pool {
        for b in &pool {
            assert!(score(a, b) <= 100);
        }
    }
}

#[test]
fn test_identical_sleep_answers_score_one() {
    let a = SurveyResponse {
        bedtime: Some("Before 11 PM".to_string()),
        wake_up_time: Some("Before 8 AM".to_string()),
        ..Default::default()
    };

    assert_eq!(sleep_schedule_score(&a, &a.clone(), 0.6), Some(1.0));
    assert_eq!(score(&a, &a), 100);
}

#[test]
fn test_empty_surveys_score_zero() {
    assert_eq!(score(&SurveyResponse::default(), &SurveyResponse::default()), 0);

    // Nothing scorable in common
    let sleeper = SurveyResponse {
        bedtime: Some("Before 1 AM".to_string()),
        wake_up_time: Some("Before 10 AM".to_string()),
        ..Default::default()
    };
    assert_eq!(score(&sleeper, &clean("I don't care")), 0);
}

#[test]
fn test_gender_veto_overrides_everything() {
    let mut a = SurveyResponse {
        gender: Some("Male".to_string()),
        gender_preference: Some("my gender".to_string()),
        bedtime: Some("Before 1 AM".to_string()),
        wake_up_time: Some("Before 10 AM".to_string()),
        cleanliness: Some("I don't care".to_string()),
        noise_tolerance: Some("Quiet (No noise)".to_string()),
        ..Default::default()
    };
    let mut b = a.clone();
    b.gender = Some("Female".to_string());

    assert_eq!(score(&a, &b), 0);

    a.gender_preference = Some("any gender".to_string());
    assert_eq!(score(&a, &b), 100);
}

#[test]
fn test_any_gender_passes_gate() {
    let a = SurveyResponse {
        gender: Some("Male".to_string()),
        gender_preference: Some("any gender".to_string()),
        cleanliness: Some("Moderately tidy (clean weekly)".to_string()),
        ..Default::default()
    };
    let b = SurveyResponse {
        gender: Some("Female".to_string()),
        gender_preference: Some("my gender".to_string()),
        cleanliness: Some("Very tidy (everything in place)".to_string()),
        ..Default::default()
    };

    assert_eq!(score(&a, &b), 50);
}

#[test]
fn test_cleanliness_monotonic() {
    let very = clean("Very tidy (everything in place)");
    let steps = [
        "Very tidy (everything in place)",
        "Moderately tidy (clean weekly)",
        "Lightly messy is fine",
    ];

    let scores: Vec<f64> = steps
        .iter()
        .map(|label| cleanliness_score(&very, &clean(label)).unwrap())
        .collect();

    assert_eq!(scores, vec![1.0, 0.5, 0.0]);
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_partial_data_uses_only_answered_dimensions() {
    let a = clean("Very tidy (everything in place)");
    let b = clean("I don't care");

    // cleanliness 0.25 -> raw 25 -> 50 * 0.5^0.8
    let expected = (50.0 * 0.5f64.powf(0.8)).round() as u8;
    assert_eq!(expected, 29);
    assert_eq!(score(&a, &b), expected);
}

#[test]
fn test_unrecognized_label_is_skipped() {
    let mut a = clean("Very tidy (everything in place)");
    a.noise_tolerance = Some("Library silence".to_string());
    let mut b = clean("Very tidy (everything in place)");
    b.noise_tolerance = Some("Loud (Social hub)".to_string());

    assert_eq!(noise_tolerance_score(&a, &b), None);
    assert_eq!(score(&a, &b), 100);
}

#[test]
fn test_weighted_mix_of_dimensions() {
    let a = SurveyResponse {
        bedtime: Some("Before 11 PM".to_string()),
        wake_up_time: Some("Before 8 AM".to_string()),
        cleanliness: Some("Very tidy (everything in place)".to_string()),
        noise_tolerance: Some("Loud (Social hub)".to_string()),
        ..Default::default()
    };
    let b = SurveyResponse {
        bedtime: Some("Before 11 PM".to_string()),
        wake_up_time: Some("Before 8 AM".to_string()),
        cleanliness: Some("Lightly messy is fine".to_string()),
        noise_tolerance: Some("Quiet (No noise)".to_string()),
        ..Default::default()
    };

    // (20 * 1 + 20 * 0 + 15 / 3) / 55 -> raw 45.45 -> 46 after rescaling
    assert_eq!(score(&a, &b), 46);
}

#[test]
fn test_rescale_continuity_at_midpoint() {
    let curve = RescaleCurve::default();
    assert_eq!(rescale(50.0, &curve), 50.0);

    let below = rescale(50.0 - f64::EPSILON * 100.0, &curve);
    assert!((below - 50.0).abs() < 1e-9);

    let above = rescale(50.0 + f64::EPSILON * 100.0, &curve);
    assert!((above - 50.0).abs() < 1e-9);
}

#[test]
fn test_custom_weights_change_balance() {
    let a = SurveyResponse {
        cleanliness: Some("Very tidy (everything in place)".to_string()),
        noise_tolerance: Some("Quiet (No noise)".to_string()),
        ..Default::default()
    };
    let b = SurveyResponse {
        cleanliness: Some("Lightly messy is fine".to_string()),
        noise_tolerance: Some("Quiet (No noise)".to_string()),
        ..Default::default()
    };

    let noise_only = ScoringWeights {
        cleanliness: 0.0,
        ..ScoringWeights::default()
    };

    let curve = RescaleCurve::default();
    assert!(calculate_match_score(&a, &b, &ScoringWeights::default(), &curve) < 50);
    assert_eq!(calculate_match_score(&a, &b, &noise_only, &curve), 100);
}
