use serde::{Deserialize, Serialize};

/// A user's lifestyle survey answers
///
/// Every field is optional. Absent fields (and labels outside the known
/// tables) make the matching dimension drop out of the score rather than
/// counting against the pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedtime: Option<String>,
    #[serde(rename = "wakeUpTime", default, skip_serializing_if = "Option::is_none")]
    pub wake_up_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanliness: Option<String>,
    #[serde(rename = "noiseTolerance", default, skip_serializing_if = "Option::is_none")]
    pub noise_tolerance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "genderPreference", default, skip_serializing_if = "Option::is_none")]
    pub gender_preference: Option<String>,
    #[serde(rename = "sleepScheduleImportance", default, skip_serializing_if = "Option::is_none")]
    pub sleep_schedule_importance: Option<u8>,
    #[serde(rename = "cleanlinessMatchImportance", default, skip_serializing_if = "Option::is_none")]
    pub cleanliness_match_importance: Option<u8>,
    #[serde(rename = "workloadStyle", default, skip_serializing_if = "Option::is_none")]
    pub workload_style: Option<String>,
    #[serde(rename = "workloadMatchImportance", default, skip_serializing_if = "Option::is_none")]
    pub workload_match_importance: Option<u8>,
    #[serde(rename = "musicPreference", default, skip_serializing_if = "Option::is_none")]
    pub music_preference: Option<String>,
    #[serde(rename = "musicPreferenceImportance", default, skip_serializing_if = "Option::is_none")]
    pub music_preference_importance: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<String>,
}

/// Stored survey document for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSurvey {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub responses: SurveyResponse,
    #[serde(rename = "submittedAt", default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl UserSurvey {
    pub fn new(user_id: impl Into<String>, responses: SurveyResponse) -> Self {
        Self {
            user_id: user_id.into(),
            responses,
            submitted_at: None,
        }
    }
}

/// Compatibility of a single pair, always within 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
}

/// Ranked candidate returned to the current user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub score: u8,
    #[serde(rename = "lookingFor")]
    pub looking_for: Vec<String>,
    pub survey: SurveyResponse,
}

/// Per-dimension weights
///
/// A dimension only adds its weight to the attainable total when both
/// surveys carry usable answers for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub sleep_schedule: f64,
    pub cleanliness: f64,
    pub noise_tolerance: f64,
    /// Share of the sleep dimension taken by bedtime; wake-up time gets the rest
    pub bedtime_share: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            sleep_schedule: 20.0,
            cleanliness: 20.0,
            noise_tolerance: 15.0,
            bedtime_share: 0.6,
        }
    }
}

/// Piecewise power curve applied to the raw percentage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RescaleCurve {
    pub lower_exponent: f64,
    pub upper_exponent: f64,
    pub midpoint: f64,
}

impl Default for RescaleCurve {
    fn default() -> Self {
        Self {
            lower_exponent: 0.8,
            upper_exponent: 1.2,
            midpoint: 50.0,
        }
    }
}
