use crate::models::SurveyResponse;

/// Maximum number of points shown on a candidate card
pub const MAX_LOOKING_FOR_POINTS: usize = 3;

/// Importance (1-5) at which a preference is shown as a must-have
const HIGH_IMPORTANCE: u8 = 4;

const HOBBY_KEYWORDS: &[(&[&str], &str)] = &[
    (&["gym", "fitness", "workout"], "gym enthusiast"),
    (&["game", "gaming", "video game"], "enjoys gaming"),
    (&["music", "instrument", "band"], "loves music"),
    (&["sport", "athletic", "team"], "athletic/sporty"),
    (&["cook", "baking", "food"], "enjoys cooking"),
    (&["read", "book"], "loves reading"),
    (&["social", "party", "going out"], "social butterfly"),
];

/// Short "looking for" summary of a survey
///
/// Collects points from the answered preferences in a fixed order and
/// keeps the first three.
pub fn looking_for(survey: &SurveyResponse) -> Vec<String> {
    let mut points = Vec::new();

    if is_important(survey.sleep_schedule_importance) {
        match (survey.bedtime.as_deref(), survey.wake_up_time.as_deref()) {
            (Some("Before 11 PM"), Some("Before 10 AM")) => points.push("morning person".to_string()),
            (Some("Before 3 AM"), _) => points.push("night owl".to_string()),
            _ => {}
        }
    }

    if is_important(survey.cleanliness_match_importance)
        && survey.cleanliness.as_deref() == Some("Very tidy (everything in place)")
    {
        points.push("very clean roommate".to_string());
    }

    if is_important(survey.workload_match_importance) {
        match survey.workload_style.as_deref() {
            Some("Academic grind") => points.push("wants serious studier".to_string()),
            Some("Balanced") => points.push("wants balanced lifestyle".to_string()),
            Some("Light/stress-free") => {
                points.push("wants relaxed approach to academics".to_string())
            }
            _ => {}
        }
    }

    if is_important(survey.music_preference_importance) {
        match survey.music_preference.as_deref() {
            Some("No music out loud") => points.push("quiet environment".to_string()),
            Some("Music is always playing") => {
                points.push("wants music-loving roommate".to_string())
            }
            _ => {}
        }
    }

    match survey.noise_tolerance.as_deref() {
        Some("Quiet (No noise)") => points.push("very quiet space".to_string()),
        Some("Loud (Social hub)") => points.push("ok with noise".to_string()),
        _ => {}
    }

    if let (Some(preference), Some(gender)) = (&survey.gender_preference, &survey.gender) {
        if preference.eq_ignore_ascii_case("my gender") {
            points.push(format!("requires {} roommate", gender));
        }
    }

    if let Some(hobbies) = &survey.hobbies {
        let hobbies = hobbies.to_lowercase();
        for (keywords, point) in HOBBY_KEYWORDS {
            if keywords.iter().any(|k| hobbies.contains(k)) {
                points.push(point.to_string());
            }
        }
    }

    points.truncate(MAX_LOOKING_FOR_POINTS);
    points
}

#[inline]
fn is_important(importance: Option<u8>) -> bool {
    importance.is_some_and(|level| level >= HIGH_IMPORTANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_survey_has_no_points() {
        assert!(looking_for(&SurveyResponse::default()).is_empty());
    }

    #[test]
    fn test_sleep_points_need_importance() {
        let mut survey = SurveyResponse {
            bedtime: Some("Before 3 AM".to_string()),
            wake_up_time: Some("Before noon".to_string()),
            sleep_schedule_importance: Some(2),
            ..Default::default()
        };
        assert!(looking_for(&survey).is_empty());

        survey.sleep_schedule_importance = Some(5);
        assert_eq!(looking_for(&survey), vec!["night owl"]);
    }

    #[test]
    fn test_points_capped_at_three() {
        let survey = SurveyResponse {
            cleanliness: Some("Very tidy (everything in place)".to_string()),
            cleanliness_match_importance: Some(4),
            noise_tolerance: Some("Quiet (No noise)".to_string()),
            gender: Some("Female".to_string()),
            gender_preference: Some("My gender".to_string()),
            hobbies: Some("Gym, reading and cooking".to_string()),
            ..Default::default()
        };

        assert_eq!(
            looking_for(&survey),
            vec!["very clean roommate", "very quiet space", "requires Female roommate"]
        );
    }

    #[test]
    fn test_workload_and_music_points() {
        let mut survey = SurveyResponse {
            workload_style: Some("Academic grind".to_string()),
            workload_match_importance: Some(3),
            music_preference: Some("Music is always playing".to_string()),
            music_preference_importance: Some(3),
            ..Default::default()
        };
        assert!(looking_for(&survey).is_empty());

        survey.workload_match_importance = Some(4);
        survey.music_preference_importance = Some(5);
        assert_eq!(
            looking_for(&survey),
            vec!["wants serious studier", "wants music-loving roommate"]
        );

        survey.workload_style = Some("Light/stress-free".to_string());
        survey.music_preference = Some("No music out loud".to_string());
        assert_eq!(
            looking_for(&survey),
            vec!["wants relaxed approach to academics", "quiet environment"]
        );
    }

    #[test]
    fn test_points_follow_preference_order() {
        let survey = SurveyResponse {
            cleanliness: Some("Very tidy (everything in place)".to_string()),
            cleanliness_match_importance: Some(5),
            workload_style: Some("Balanced".to_string()),
            workload_match_importance: Some(4),
            music_preference: Some("No music out loud".to_string()),
            music_preference_importance: Some(4),
            noise_tolerance: Some("Quiet (No noise)".to_string()),
            ..Default::default()
        };

        assert_eq!(
            looking_for(&survey),
            vec!["very clean roommate", "wants balanced lifestyle", "quiet environment"]
        );
    }

    #[test]
    fn test_hobby_keywords() {
        let survey = SurveyResponse {
            hobbies: Some("Board games and BOOKS".to_string()),
            ..Default::default()
        };
        assert_eq!(looking_for(&survey), vec!["enjoys gaming", "loves reading"]);
    }
}
