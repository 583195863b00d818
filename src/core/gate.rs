use crate::models::SurveyResponse;

const ANY_GENDER: &str = "any gender";
const MY_GENDER: &str = "my gender";

/// Check the gender hard constraint between two surveys
///
/// Only applies when both sides have answered gender and gender
/// preference; otherwise the pair passes. Comparison is case-insensitive.
/// The check is symmetric in `a` and `b`.
pub fn gender_compatible(a: &SurveyResponse, b: &SurveyResponse) -> bool {
    let (Some(gender_a), Some(pref_a), Some(gender_b), Some(pref_b)) = (
        a.gender.as_deref(),
        a.gender_preference.as_deref(),
        b.gender.as_deref(),
        b.gender_preference.as_deref(),
    ) else {
        return true;
    };

    let gender_a = gender_a.to_lowercase();
    let gender_b = gender_b.to_lowercase();
    let pref_a = pref_a.to_lowercase();
    let pref_b = pref_b.to_lowercase();

    if pref_a == ANY_GENDER || pref_b == ANY_GENDER {
        return true;
    }

    if (pref_a == MY_GENDER || pref_b == MY_GENDER) && gender_a == gender_b {
        return true;
    }

    // Preferences that name a gender outright
    pref_a == gender_b && pref_b == gender_a
}
