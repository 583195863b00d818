//! Numeric anchors for the enumerated survey answers.
//!
//! Labels must match exactly; anything else is treated as unanswered.

/// Bedtime buckets as hour of day, past midnight continuing at 24+
pub const BEDTIME_HOURS: &[(&str, f64)] = &[
    ("Before 11 PM", 22.0),
    ("Before 1 AM", 24.0),
    ("Before 3 AM", 26.0),
    ("Anytime is fine", 24.0),
];

/// Wake-up buckets as hour of day
pub const WAKE_UP_HOURS: &[(&str, f64)] = &[
    ("Before 8 AM", 8.0),
    ("Before 10 AM", 10.0),
    ("Before noon", 12.0),
    ("Anytime is fine", 10.0),
];

/// Widest gap between two bedtime (or two wake-up) anchors, in hours
pub const MAX_SLEEP_SPAN_HOURS: f64 = 4.0;

/// Tidiness on a 1-4 scale; "I don't care" sits on the midpoint
pub const CLEANLINESS_LEVELS: &[(&str, f64)] = &[
    ("Very tidy (everything in place)", 4.0),
    ("Moderately tidy (clean weekly)", 3.0),
    ("Lightly messy is fine", 2.0),
    ("I don't care", 2.5),
];

/// Widest ordinal spread between two cleanliness answers
pub const MAX_CLEANLINESS_SPREAD: f64 = 2.0;

/// Noise on a 1-3 scale, loud to quiet
pub const NOISE_LEVELS: &[(&str, f64)] = &[
    ("Loud (Social hub)", 1.0),
    ("Moderate (Quiet conversation)", 2.0),
    ("Quiet (No noise)", 3.0),
    ("I'm fine with all of these", 2.0),
];

/// Divisor for noise distance; wider than the 2-step spread so mismatches cost less
pub const NOISE_DISTANCE_DIVISOR: f64 = 3.0;

/// Lowest noise sub-score a pair can receive
pub const NOISE_SCORE_FLOOR: f64 = 0.3;

#[inline]
fn lookup(table: &[(&str, f64)], label: &str) -> Option<f64> {
    table
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, value)| *value)
}

#[inline]
pub fn bedtime_hour(label: &str) -> Option<f64> {
    lookup(BEDTIME_HOURS, label)
}

#[inline]
pub fn wake_up_hour(label: &str) -> Option<f64> {
    lookup(WAKE_UP_HOURS, label)
}

#[inline]
pub fn cleanliness_level(label: &str) -> Option<f64> {
    lookup(CLEANLINESS_LEVELS, label)
}

#[inline]
pub fn noise_level(label: &str) -> Option<f64> {
    lookup(NOISE_LEVELS, label)
}
